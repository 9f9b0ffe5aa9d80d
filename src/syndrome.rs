//! SyndromeBuilder: turns hardware partial remainders into full BCH syndromes.

use crate::galois::GaloisField;
use crate::hal::PmeccPort;
use crate::workspace::DecoderWorkspace;

/// Builds the `2t` syndromes `S_1 .. S_2t` for one sector from the PMECC
/// block's partial remainders.
pub struct SyndromeBuilder;

impl SyndromeBuilder {
    /// Copy the hardware's `t` partial remainders for `sector_index` into
    /// the odd-indexed slots of `partial_syn`, and zero the syndrome slots
    /// that are about to be recomputed by [`Self::substitute`].
    pub fn build(workspace: &mut DecoderWorkspace, port: &dyn PmeccPort, sector_index: usize, t: usize) {
        let remainders = port.sector_remainders(sector_index, t);
        for k in 0..t {
            workspace.partial_syn[2 * k + 1] = remainders[k];
        }
        for i in 1..(2 * t) {
            workspace.si[i] = 0;
        }
    }

    /// Evaluate the received polynomial at `alpha^1 .. alpha^2t`, producing
    /// the standard BCH syndromes. Odd syndromes come directly from the
    /// hardware's partial remainders; even syndromes are the squares of
    /// the corresponding odd ones (`S_2k = S_k^2` in GF(2^m)).
    pub fn substitute(workspace: &mut DecoderWorkspace, gf: &GaloisField, t: usize) {
        let m = gf.m();
        let n = gf.n();

        let mut i = 1;
        while i <= 2 * t - 1 {
            let mut value = 0u16;
            for j in 0..m {
                if workspace.partial_syn[i] & (1 << j) != 0 {
                    value ^= gf.alpha_to(i * j);
                }
            }
            workspace.si[i] = value;
            i += 2;
        }

        let mut i = 2;
        while i <= 2 * t {
            let half = workspace.si[i / 2];
            workspace.si[i] = if half == 0 {
                0
            } else {
                let log_half = gf.index_of_raw(half) as usize;
                gf.alpha_to((2 * log_half) % n)
            };
            i += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::PmeccPort;
    use crate::params::T_MAX;

    struct FixedRemainders([u16; T_MAX]);
    impl PmeccPort for FixedRemainders {
        fn sector_remainders(&self, _sector_index: usize, _t: usize) -> [u16; T_MAX] {
            self.0
        }
    }

    #[test]
    fn zero_remainders_give_zero_syndromes() {
        let gf = GaloisField::new(13);
        let mut ws = DecoderWorkspace::new();
        let port = FixedRemainders([0; T_MAX]);

        SyndromeBuilder::build(&mut ws, &port, 0, 4);
        SyndromeBuilder::substitute(&mut ws, &gf, 4);

        for i in 1..=8 {
            assert_eq!(ws.si[i], 0, "S_{i} should be zero for an error-free sector");
        }
    }

    #[test]
    fn even_syndrome_is_square_of_odd() {
        let gf = GaloisField::new(13);
        let mut ws = DecoderWorkspace::new();
        let mut rem = [0u16; T_MAX];
        rem[0] = 0b101; // nonzero partial syndrome for S_1
        let port = FixedRemainders(rem);

        SyndromeBuilder::build(&mut ws, &port, 0, 4);
        SyndromeBuilder::substitute(&mut ws, &gf, 4);

        let expected_s2 = gf.mul(ws.si[1], ws.si[1]);
        assert_eq!(ws.si[2], expected_s2);
    }
}
