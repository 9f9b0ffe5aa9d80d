//! Shared test fixtures: a way to synthesize PMECC partial syndromes for an
//! arbitrary injected error pattern, without needing a real PMECC encoder
//! or silicon.
//!
//! [`crate::syndrome::SyndromeBuilder::substitute`] reconstructs a full
//! syndrome `S_i` from a hardware partial remainder by treating the
//! remainder's bits as coefficients and evaluating at `alpha^i`:
//! `S_i = sum_j bit_j(partial_syn[i]) * alpha^(i*j)`. That map is a linear
//! bijection over GF(2) for any `i` coprime with the field order, so given
//! a target `S_i` we can solve for the partial-syndrome bits that produce
//! it. This lets tests specify an error pattern directly as bit positions
//! and have a mock [`PmeccPort`] report whatever partial syndromes decode
//! to that pattern.

use pmecc_core::{GaloisField, PmeccPort, T_MAX};

/// Solve `sum_j x_j * columns[j] = target` for the bit vector `x`, over
/// GF(2), via Gaussian elimination. `columns` has exactly `m` entries.
pub fn gf2_solve(columns: &[u16], target: u16, m: usize) -> u16 {
    let mut rows: Vec<u32> = (0..m)
        .map(|i| {
            let mut row = 0u32;
            for (j, &col) in columns.iter().enumerate() {
                if (col >> i) & 1 != 0 {
                    row |= 1 << j;
                }
            }
            if (target >> i) & 1 != 0 {
                row |= 1 << m;
            }
            row
        })
        .collect();

    let mut pivot_row = 0;
    let mut pivot_col_of_row = vec![usize::MAX; m];
    for col in 0..m {
        if let Some(r) = (pivot_row..m).find(|&r| (rows[r] >> col) & 1 != 0) {
            rows.swap(pivot_row, r);
            for other in 0..m {
                if other != pivot_row && (rows[other] >> col) & 1 != 0 {
                    rows[other] ^= rows[pivot_row];
                }
            }
            pivot_col_of_row[pivot_row] = col;
            pivot_row += 1;
        }
    }

    let mut solution = 0u16;
    for (r, &col) in pivot_col_of_row.iter().enumerate().take(pivot_row) {
        if (rows[r] >> m) & 1 != 0 {
            solution |= 1 << col;
        }
    }
    solution
}

/// `S_i` for a sector with bit errors at `error_positions` (0-based,
/// ascending, LSB-first within each byte, across the combined `data || ecc`
/// bitstream — the same convention [`pmecc_core::Corrector`] uses).
fn target_syndrome(gf: &GaloisField, i: usize, error_positions: &[u32]) -> u16 {
    let mut value = 0u16;
    for &k in error_positions {
        value ^= gf.alpha(i * k as usize);
    }
    value
}

/// A [`PmeccPort`] that reports whatever partial syndromes correspond to a
/// caller-chosen set of bit-error positions, independently per sector.
pub struct FaultInjector<'gf> {
    pub gf: &'gf GaloisField,
    pub errors_by_sector: Vec<Vec<u32>>,
}

impl<'gf> FaultInjector<'gf> {
    pub fn new(gf: &'gf GaloisField, errors_by_sector: Vec<Vec<u32>>) -> Self {
        Self { gf, errors_by_sector }
    }

    pub fn single_sector(gf: &'gf GaloisField, sectors_per_page: usize, sector_index: usize, positions: Vec<u32>) -> Self {
        let mut errors_by_sector = vec![Vec::new(); sectors_per_page];
        errors_by_sector[sector_index] = positions;
        Self { gf, errors_by_sector }
    }
}

impl<'gf> PmeccPort for FaultInjector<'gf> {
    fn sector_remainders(&self, sector_index: usize, t: usize) -> [u16; T_MAX] {
        let m = self.gf.m();
        let n = self.gf.n();
        let errors = self.errors_by_sector.get(sector_index).map(Vec::as_slice).unwrap_or(&[]);
        let mut out = [0u16; T_MAX];
        for (k, slot) in out.iter_mut().enumerate().take(t) {
            let i = 2 * k + 1;
            let columns: Vec<u16> = (0..m).map(|j| self.gf.alpha_to((i * j) % n)).collect();
            let target = target_syndrome(self.gf, i, errors);
            *slot = gf2_solve(&columns, target, m);
        }
        out
    }
}

/// Flip the bits at `positions` (0-based, ascending) in the combined
/// `data || ecc` byte buffers, per §4.4's `byte_offset = p0 / 8`,
/// `bit_offset = p0 mod 8`, `target ^= (1 << bit_offset)` (LSB-first within
/// a byte — matches [`pmecc_core::Corrector`]).
pub fn flip_bits(data: &mut [u8], ecc: &mut [u8], positions: &[u32]) {
    let data_bits = (data.len() * 8) as u32;
    for &p in positions {
        if p < data_bits {
            let byte = (p / 8) as usize;
            let bit = p % 8;
            data[byte] ^= 1 << bit;
        } else {
            let ecc_bit = p - data_bits;
            let byte = (ecc_bit / 8) as usize;
            let bit = ecc_bit % 8;
            ecc[byte] ^= 1 << bit;
        }
    }
}
