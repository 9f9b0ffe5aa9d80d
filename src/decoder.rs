//! PageDecoder: orchestrates the per-sector pipeline across one NAND page
//! (§4.5) — syndrome build, key-equation solve, location, correction —
//! with the fast paths for clean sectors and erased pages the hardware
//! exists to avoid redoing.

use crate::corrector::Corrector;
use crate::error::DecodeOutcome;
use crate::galois::GaloisField;
use crate::hal::{PmeccPort, PmerrlocPort};
use crate::key_equation::KeyEquationSolver;
use crate::locator::ErrorLocator;
use crate::params::CodeParameters;
use crate::syndrome::SyndromeBuilder;
use crate::workspace::DecoderWorkspace;

/// Outcome for a single sector within a page decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorReport {
    pub sector_index: usize,
    pub outcome: DecodeOutcome,
}

/// Outcome for an entire page decode. `aborted` is set when a sector came
/// back uncorrectable and the remaining sectors were never attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub sectors: Vec<SectorReport>,
    pub aborted: bool,
}

impl PageReport {
    pub fn is_fully_correctable(&self) -> bool {
        !self.aborted
    }

    pub fn total_bits_corrected(&self) -> u32 {
        self.sectors
            .iter()
            .map(|s| match s.outcome {
                DecodeOutcome::Corrected { bits_corrected } => bits_corrected,
                _ => 0,
            })
            .sum()
    }
}

pub struct PageDecoder;

impl PageDecoder {
    /// Decode every sector of one page in ascending order, correcting
    /// `data` and `oob_ecc` in place.
    ///
    /// `data` must be exactly `params.page_size` bytes; `oob_ecc` must be
    /// exactly `params.sectors_per_page * params.ecc_bytes_per_sector`
    /// bytes, holding only the ECC region (callers slice it out of the
    /// full OOB area themselves using `params.ecc_start_offset`).
    ///
    /// Stops at the first uncorrectable sector: later sectors are left
    /// untouched and omitted from the report, matching the hardware's own
    /// practice of aborting a page on the first uncorrectable failure.
    pub fn decode(
        params: &CodeParameters,
        pmecc: &dyn PmeccPort,
        pmerrloc: &mut dyn PmerrlocPort,
        gf: &GaloisField,
        data: &mut [u8],
        oob_ecc: &mut [u8],
    ) -> PageReport {
        debug_assert_eq!(data.len(), params.page_size);
        debug_assert_eq!(oob_ecc.len(), params.sectors_per_page * params.ecc_bytes_per_sector);

        let t = params.t as usize;
        let status = pmecc.status_word();
        let mut sectors = Vec::with_capacity(params.sectors_per_page);
        let mut aborted = false;

        // §4.5 step 3 / §7: the erased-page check is over the whole page's
        // ECC region, not per sector — a partially programmed page with one
        // blank sector and one real sector must not skip the real sector.
        let page_erased = oob_ecc.iter().all(|&b| b == 0xFF);

        for sector_index in 0..params.sectors_per_page {
            let data_start = sector_index * params.sector_size_bytes;
            let data_end = data_start + params.sector_size_bytes;
            let ecc_start = sector_index * params.ecc_bytes_per_sector;
            let ecc_end = ecc_start + params.ecc_bytes_per_sector;

            let sector_ecc = &mut oob_ecc[ecc_start..ecc_end];

            if page_erased {
                sectors.push(SectorReport { sector_index, outcome: DecodeOutcome::Clean });
                continue;
            }

            if status & (1 << sector_index) == 0 {
                sectors.push(SectorReport { sector_index, outcome: DecodeOutcome::Clean });
                continue;
            }

            let mut workspace = DecoderWorkspace::new();
            SyndromeBuilder::build(&mut workspace, pmecc, sector_index, t);
            SyndromeBuilder::substitute(&mut workspace, gf, t);

            if workspace.si[1..=2 * t].iter().all(|&s| s == 0) {
                sectors.push(SectorReport { sector_index, outcome: DecodeOutcome::Clean });
                continue;
            }

            KeyEquationSolver::solve(&mut workspace, gf, t);

            match ErrorLocator::locate(&workspace, pmerrloc, params, sector_index) {
                Ok(roots) => {
                    let sector_data = &mut data[data_start..data_end];
                    let bits_corrected = Corrector::correct(params, sector_data, sector_ecc, &roots);
                    sectors.push(SectorReport {
                        sector_index,
                        outcome: DecodeOutcome::Corrected { bits_corrected },
                    });
                }
                Err(outcome) => {
                    sectors.push(SectorReport { sector_index, outcome });
                    aborted = true;
                    break;
                }
            }
        }

        PageReport { sectors, aborted }
    }
}
