//! Error types for the PMECC decoder.

use serde::{Deserialize, Serialize};

/// Configuration errors, raised by [`crate::params::CodeParameters::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    /// `t` is not one of the PMECC-supported correction capabilities.
    InvalidCorrectionCapability(u8),
    /// Sector size is not 512 or 1024 bytes.
    InvalidSectorSize(usize),
    /// Page size is not 2048 or 4096 bytes.
    InvalidPageSize(usize),
    /// Page size is not an integer multiple of the sector size.
    PageNotDivisibleBySector { page_size: usize, sector_size: usize },
    /// The hardware-reported ECC start offset disagrees with the configured one.
    EccStartOffsetMismatch { declared: usize, reported: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidCorrectionCapability(t) => {
                write!(f, "invalid PMECC correction capability: {t} (expected 2, 4, 8, 12 or 24)")
            }
            ConfigError::InvalidSectorSize(s) => {
                write!(f, "invalid PMECC sector size: {s} (expected 512 or 1024)")
            }
            ConfigError::InvalidPageSize(p) => {
                write!(f, "invalid NAND page size: {p} (expected 2048 or 4096)")
            }
            ConfigError::PageNotDivisibleBySector { page_size, sector_size } => {
                write!(f, "page size {page_size} is not a multiple of sector size {sector_size}")
            }
            ConfigError::EccStartOffsetMismatch { declared, reported } => {
                write!(
                    f,
                    "ECC start offset mismatch: configured {declared}, hardware reports {reported}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Outcome of decoding one NAND page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeOutcome {
    /// No errors detected (or the page is erased); the buffer is untouched.
    Clean,
    /// Errors were found and corrected in place.
    Corrected { bits_corrected: u32 },
    /// A sector had more bit errors than the code can correct.
    Uncorrectable {
        /// Index of the sector (within the page) that failed.
        sector_index: usize,
        /// Number of roots the Chien search found, for diagnostics.
        roots_found: usize,
        /// Expected root count (the degree of σ).
        expected_roots: usize,
    },
}
