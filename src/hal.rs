//! Hardware abstraction layer: the PMECC and PMERRLOC register interfaces
//! the spec fixes but treats as external collaborators (§6).
//!
//! A production caller implements these traits against real memory-mapped
//! registers (all reads/writes there must be volatile, per the spec's note
//! on partial-syndrome byte layout). This crate also ships
//! [`SoftwarePmerrloc`], a pure-software Chien search, so the decode
//! pipeline can run end to end without physical PMERRLOC silicon.

use crate::galois::GaloisField;
use crate::params::T_MAX;

/// The PMECC block: supplies per-sector partial syndromes and (optionally)
/// its configured ECC start offset for the §9 read-back cross-check.
pub trait PmeccPort {
    /// Read the `t` 16-bit partial-remainder entries for `sector_index`
    /// (the `REM + sector_index*0x40` region, §4.1). Entries beyond `t`
    /// are unused and may be left zeroed.
    fn sector_remainders(&self, sector_index: usize, t: usize) -> [u16; T_MAX];

    /// The hardware's configured ECC start offset (`PMECC_SADDR`), if the
    /// backing implementation can report one.
    fn reported_ecc_start_offset(&self) -> Option<usize> {
        None
    }

    /// Bitmask mirroring `PMECC_ISR`: bit `i` set means sector `i` has at
    /// least one nonzero partial syndrome and needs full BCH processing.
    /// A real controller uses this to skip syndrome substitution for
    /// already-clean sectors; the default is conservative and marks every
    /// sector as needing a look.
    fn status_word(&self) -> u32 {
        u32::MAX
    }
}

/// Result of one Chien-search run: the root count the peripheral reports
/// and the bit positions it found (1-based within the sector bitstream,
/// per §4.3/§4.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateResult {
    pub roots: Vec<u32>,
}

/// The PMERRLOC block: runs a Chien search against a supplied σ and
/// reports the roots it finds.
///
/// Implementors own the disable/write-sigma/configure/enable/poll-done
/// register sequence of §4.3; this crate's [`crate::locator::ErrorLocator`]
/// only checks the returned root count against the expected σ degree.
pub trait PmerrlocPort {
    fn locate(&mut self, sigma: &[u16], sector_size_index: u8, sector_bits: u32) -> LocateResult;
}

/// Reference software Chien search: evaluates σ(α^-l) for every candidate
/// bit position `l` in `[0, sector_bits)` by Horner's method.
///
/// This is a stand-in for the PMERRLOC peripheral, not a replacement for
/// it — real hardware performs this exhaustive evaluation in parallel
/// across all field elements in one shot; this does the same work
/// sequentially in software.
pub struct SoftwarePmerrloc<'gf> {
    gf: &'gf GaloisField,
}

impl<'gf> SoftwarePmerrloc<'gf> {
    pub fn new(gf: &'gf GaloisField) -> Self {
        Self { gf }
    }
}

impl<'gf> PmerrlocPort for SoftwarePmerrloc<'gf> {
    fn locate(&mut self, sigma: &[u16], _sector_size_index: u8, sector_bits: u32) -> LocateResult {
        let n = self.gf.n();
        let mut roots = Vec::new();

        for l in 0..sector_bits as usize {
            // sigma(alpha^-l) via Horner's method over the stored coefficients.
            let alpha_inv_l = self.gf.alpha(n - (l % n));
            let mut value = 0u16;
            let mut power = 1u16;
            for &coef in sigma {
                value ^= self.gf.mul(coef, power);
                power = self.gf.mul(power, alpha_inv_l);
            }
            if value == 0 {
                roots.push((l + 1) as u32);
            }
        }

        LocateResult { roots }
    }
}
