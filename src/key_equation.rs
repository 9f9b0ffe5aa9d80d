//! KeyEquationSolver: the simplified Berlekamp–Massey iteration that
//! derives the error-locator polynomial σ(x) from the BCH syndromes.
//!
//! This is the algorithmic heart of the decoder (§4.2) and the component
//! most sensitive to exact-index-arithmetic bugs: the two early-termination
//! parity conditions and the strict tie-break in the ρ search are not
//! incidental details, they change the answer on short-weight error
//! patterns if dropped or loosened.

use crate::galois::GaloisField;
use crate::params::T_MAX;
use crate::workspace::DecoderWorkspace;

pub struct KeyEquationSolver;

impl KeyEquationSolver {
    /// Run the solver for `t` iterations (or until early termination),
    /// leaving the result in `workspace.smu[t+1]` / `workspace.lmu[t+1]`.
    ///
    /// Requires [`crate::syndrome::SyndromeBuilder::substitute`] to have
    /// already populated `workspace.si`.
    pub fn solve(workspace: &mut DecoderWorkspace, gf: &GaloisField, t: usize) {
        let n = gf.n();

        // mu and delta are signed: mu[0] is the symbolic "-1" initializer.
        let mut mu = [0i32; T_MAX + 2];
        let mut dmu = [0u16; T_MAX + 2];
        let mut delta = [0i32; T_MAX + 2];

        mu[0] = -1;
        workspace.smu[0][0] = 1;
        dmu[0] = 1;
        workspace.lmu[0] = 0;
        delta[0] = (2 * mu[0] - workspace.lmu[0] as i32) / 2;

        mu[1] = 0;
        workspace.smu[1][0] = 1;
        dmu[1] = workspace.si[1];
        workspace.lmu[1] = 0;
        delta[1] = (2 * mu[1] - workspace.lmu[1] as i32) / 2;

        let mut dmu_zero_count: u32 = 0;

        for i in 1..=t {
            mu[i + 1] = (i as i32) << 1;

            if dmu[i] == 0 {
                dmu_zero_count += 1;
                let degree = (workspace.lmu[i] >> 1) as i32;
                let remaining = t as i32 - degree - 1;
                let threshold = if remaining & 1 != 0 {
                    remaining / 2 + 2
                } else {
                    remaining / 2 + 1
                };

                if dmu_zero_count as i32 == threshold {
                    for j in 0..=(degree as usize + 1) {
                        workspace.smu[t + 1][j] = workspace.smu[i][j];
                    }
                    workspace.lmu[t + 1] = workspace.lmu[i];
                    return;
                }

                for j in 0..=degree as usize {
                    workspace.smu[i + 1][j] = workspace.smu[i][j];
                }
                workspace.lmu[i + 1] = workspace.lmu[i];
            } else {
                let mut rho = 0usize;
                let mut largest = -1i32;
                for j in 0..i {
                    if dmu[j] != 0 && delta[j] > largest {
                        largest = delta[j];
                        rho = j;
                    }
                }

                let diff = mu[i] - mu[rho];
                debug_assert!(diff >= 0, "mu must be non-decreasing for a valid BM run");
                let diff = diff as usize;

                let degree_i = (workspace.lmu[i] >> 1) as i32;
                let degree_rho_shifted = (workspace.lmu[rho] >> 1) as i32 + diff as i32;
                workspace.lmu[i + 1] = if degree_i > degree_rho_shifted {
                    workspace.lmu[i]
                } else {
                    (degree_rho_shifted * 2) as u16
                };

                workspace.smu[i + 1] = [0; 2 * T_MAX + 1];
                for k in 0..=(workspace.lmu[rho] >> 1) as usize {
                    if workspace.smu[rho][k] != 0 && dmu[i] != 0 {
                        let log_dmu_i = gf.index_of_raw(dmu[i]) as usize;
                        let log_dmu_rho = gf.index_of_raw(dmu[rho]) as usize;
                        let log_smu_rho_k = gf.index_of_raw(workspace.smu[rho][k]) as usize;
                        let exponent = (log_dmu_i + (n - log_dmu_rho) + log_smu_rho_k) % n;
                        workspace.smu[i + 1][k + diff] = gf.alpha_to(exponent);
                    }
                }
                for k in 0..=(workspace.lmu[i] >> 1) as usize {
                    workspace.smu[i + 1][k] ^= workspace.smu[i][k];
                }
            }

            delta[i + 1] = (2 * mu[i + 1] - workspace.lmu[i + 1] as i32) / 2;

            if i < t {
                let mut discrepancy = workspace.si[2 * i + 1];
                for k in 1..=(workspace.lmu[i + 1] >> 1) as usize {
                    let smu_k = workspace.smu[i + 1][k];
                    let si_term = workspace.si[2 * i + 1 - k];
                    if smu_k != 0 && si_term != 0 {
                        discrepancy ^= gf.mul(smu_k, si_term);
                    }
                }
                dmu[i + 1] = discrepancy;
            }
        }
    }

    /// Degree of σ, i.e. the number of errors the solver expects — valid
    /// only after [`Self::solve`] has run.
    pub fn sigma_degree(workspace: &DecoderWorkspace, t: usize) -> usize {
        (workspace.lmu[t + 1] >> 1) as usize
    }
}
