//! ErrorLocator: drives the PMERRLOC peripheral (or its software
//! stand-in) with a solved σ and reconciles the roots it reports against
//! σ's expected degree (§4.3).

use crate::error::DecodeOutcome;
use crate::hal::PmerrlocPort;
use crate::key_equation::KeyEquationSolver;
use crate::params::CodeParameters;
use crate::workspace::DecoderWorkspace;

pub struct ErrorLocator;

impl ErrorLocator {
    /// Run a Chien search for `sigma` (taken from `workspace.smu[t+1]`) and
    /// return the root positions if their count matches σ's degree.
    ///
    /// A mismatch means the received word is outside the code's correction
    /// radius: more errors occurred than `t` can locate, and the roots
    /// PMERRLOC did find cannot be trusted as true error positions.
    pub fn locate(
        workspace: &DecoderWorkspace,
        port: &mut dyn PmerrlocPort,
        params: &CodeParameters,
        sector_index: usize,
    ) -> Result<Vec<u32>, DecodeOutcome> {
        let t = params.t as usize;
        let degree = KeyEquationSolver::sigma_degree(workspace, t);

        if degree == 0 {
            return Ok(Vec::new());
        }

        let sigma = &workspace.smu[t + 1][..=degree];
        let sector_bits = (params.sector_size_bytes * 8) as u32;
        let result = port.locate(sigma, params.sector_size_index(), sector_bits);

        if result.roots.len() != degree {
            return Err(DecodeOutcome::Uncorrectable {
                sector_index,
                roots_found: result.roots.len(),
                expected_roots: degree,
            });
        }

        Ok(result.roots)
    }
}
