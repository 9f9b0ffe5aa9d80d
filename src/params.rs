//! PMECC code parameters: the immutable configuration for a decode session.

use crate::error::ConfigError;

/// Maximum correction capability the PMECC hardware supports; workspace
/// arrays are sized for this regardless of the configured `t`.
pub const T_MAX: usize = 24;

const VALID_T: [u8; 5] = [2, 4, 8, 12, 24];
const VALID_SECTOR_SIZES: [usize; 2] = [512, 1024];
const VALID_PAGE_SIZES: [usize; 2] = [2048, 4096];

/// Default position of the first ECC byte within the out-of-band area
/// (after the 2-byte bad-block marker reserved by ONFI convention).
pub const DEFAULT_ECC_START_OFFSET: usize = 2;

/// ECC bytes per sector, indexed by `t` and sector size, per the PMECC
/// correction-capability table.
fn ecc_bytes_per_sector(t: u8, sector_size_bytes: usize) -> Option<usize> {
    let table: &[(u8, usize, usize)] = &[
        (2, 512, 4),
        (2, 1024, 4),
        (4, 512, 7),
        (4, 1024, 7),
        (8, 512, 13),
        (8, 1024, 14),
        (12, 512, 20),
        (12, 1024, 21),
        (24, 512, 39),
        (24, 1024, 42),
    ];
    table
        .iter()
        .find(|&&(tt, sz, _)| tt == t && sz == sector_size_bytes)
        .map(|&(_, _, bytes)| bytes)
}

/// Immutable configuration for one decode session: correction capability,
/// sector/page geometry, and the derived field/ECC-layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParameters {
    pub t: u8,
    pub sector_size_bytes: usize,
    pub m: usize,
    pub n: usize,
    pub ecc_bytes_per_sector: usize,
    pub page_size: usize,
    pub sectors_per_page: usize,
    pub ecc_start_offset: usize,
}

impl CodeParameters {
    /// Validate and derive a full parameter set, using the default ECC
    /// start offset ([`DEFAULT_ECC_START_OFFSET`]).
    pub fn new(t: u8, sector_size_bytes: usize, page_size: usize) -> Result<Self, ConfigError> {
        Self::with_ecc_start_offset(t, sector_size_bytes, page_size, DEFAULT_ECC_START_OFFSET)
    }

    /// Validate and derive a full parameter set with an explicit ECC start
    /// offset, for callers whose OOB layout reserves a non-default number
    /// of leading spare bytes.
    pub fn with_ecc_start_offset(
        t: u8,
        sector_size_bytes: usize,
        page_size: usize,
        ecc_start_offset: usize,
    ) -> Result<Self, ConfigError> {
        if !VALID_T.contains(&t) {
            return Err(ConfigError::InvalidCorrectionCapability(t));
        }
        if !VALID_SECTOR_SIZES.contains(&sector_size_bytes) {
            return Err(ConfigError::InvalidSectorSize(sector_size_bytes));
        }
        if !VALID_PAGE_SIZES.contains(&page_size) {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        if page_size % sector_size_bytes != 0 {
            return Err(ConfigError::PageNotDivisibleBySector { page_size, sector_size: sector_size_bytes });
        }

        let m = if sector_size_bytes == 512 { 13 } else { 14 };
        let n = (1 << m) - 1;
        let ecc_bytes_per_sector = ecc_bytes_per_sector(t, sector_size_bytes)
            .expect("validated (t, sector_size_bytes) pair must be in the ECC-bytes table");
        let sectors_per_page = page_size / sector_size_bytes;

        Ok(Self {
            t,
            sector_size_bytes,
            m,
            n,
            ecc_bytes_per_sector,
            page_size,
            sectors_per_page,
            ecc_start_offset,
        })
    }

    /// Total OOB (spare area) size needed to hold this page's ECC bytes,
    /// starting at `ecc_start_offset`.
    pub fn oob_ecc_span(&self) -> usize {
        self.ecc_start_offset + self.sectors_per_page * self.ecc_bytes_per_sector
    }

    /// `sector_size_index` as used by the PMERRLOC sector-size config bits:
    /// 0 for 512-byte sectors, 1 for 1024-byte sectors.
    pub fn sector_size_index(&self) -> u8 {
        if self.sector_size_bytes == 512 { 0 } else { 1 }
    }

    /// Confirm a hardware-reported `PMECC_SADDR` value agrees with the
    /// statically configured ECC start offset (see the spec's open
    /// question on ECC start offset read-back).
    pub fn check_ecc_start_offset(&self, reported: usize) -> Result<(), ConfigError> {
        if reported == self.ecc_start_offset {
            Ok(())
        } else {
            Err(ConfigError::EccStartOffsetMismatch { declared: self.ecc_start_offset, reported })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_configuration_derives_expected_fields() {
        let p = CodeParameters::new(4, 512, 2048).unwrap();
        assert_eq!(p.m, 13);
        assert_eq!(p.n, 8191);
        assert_eq!(p.ecc_bytes_per_sector, 7);
        assert_eq!(p.sectors_per_page, 4);
    }

    #[test]
    fn sector_1024_uses_m14() {
        let p = CodeParameters::new(8, 1024, 4096).unwrap();
        assert_eq!(p.m, 14);
        assert_eq!(p.ecc_bytes_per_sector, 14);
        assert_eq!(p.sectors_per_page, 4);
    }

    #[test]
    fn rejects_bad_t() {
        assert_eq!(
            CodeParameters::new(3, 512, 2048),
            Err(ConfigError::InvalidCorrectionCapability(3))
        );
    }

    #[test]
    fn rejects_bad_sector_size() {
        assert_eq!(
            CodeParameters::new(4, 768, 2048),
            Err(ConfigError::InvalidSectorSize(768))
        );
    }

    #[test]
    fn rejects_bad_page_size() {
        assert_eq!(
            CodeParameters::new(4, 512, 3000),
            Err(ConfigError::InvalidPageSize(3000))
        );
    }

    #[test]
    fn ecc_start_offset_mismatch_detected() {
        let p = CodeParameters::new(4, 512, 2048).unwrap();
        assert!(p.check_ecc_start_offset(2).is_ok());
        assert!(p.check_ecc_start_offset(4).is_err());
    }
}
