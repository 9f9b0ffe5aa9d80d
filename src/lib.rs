pub mod corrector;
pub mod decoder;
pub mod error;
pub mod galois;
pub mod hal;
pub mod key_equation;
pub mod locator;
pub mod params;
pub mod syndrome;
pub mod workspace;

pub use corrector::Corrector;
pub use decoder::{PageDecoder, PageReport, SectorReport};
pub use error::{ConfigError, DecodeOutcome};
pub use galois::GaloisField;
pub use hal::{LocateResult, PmeccPort, PmerrlocPort, SoftwarePmerrloc};
pub use key_equation::KeyEquationSolver;
pub use locator::ErrorLocator;
pub use params::{CodeParameters, T_MAX};
pub use syndrome::SyndromeBuilder;
pub use workspace::DecoderWorkspace;
