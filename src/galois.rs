//! Galois field GF(2^m) log/antilog tables for the PMECC decoder.
//!
//! Real hardware supplies these as ROM-resident lookup regions for m=13 and
//! m=14 (see the GF table interface in the spec). This crate computes the
//! same tables in software from the field's primitive polynomial, which is
//! the only practical stand-in without a ROM image to read from.

/// Primitive polynomial for GF(2^13): x^13 + x^4 + x^3 + x + 1.
const PRIM_POLY_13: u32 = 0x201b;
/// Primitive polynomial for GF(2^14): x^14 + x^10 + x^6 + x + 1.
const PRIM_POLY_14: u32 = 0x4443;

/// Sentinel stored in `index_of[0]`: zero has no discrete logarithm.
const NO_LOG: i16 = -1;

/// Read-only α^i ↔ i maps for one Galois field extension degree.
///
/// `alpha_to[i]` is α^i as an m-bit integer; `index_of[v]` is the i such
/// that α^i = v, or [`NO_LOG`] if v is zero.
pub struct GaloisField {
    m: usize,
    n: usize,
    alpha_to: Vec<u16>,
    index_of: Vec<i16>,
}

impl GaloisField {
    /// Build the tables for extension degree `m` (13 or 14).
    ///
    /// # Panics
    /// Panics if `m` is not 13 or 14; those are the only degrees the PMECC
    /// hardware supports (sector sizes 512 and 1024 respectively).
    pub fn new(m: usize) -> Self {
        let prim_poly = match m {
            13 => PRIM_POLY_13,
            14 => PRIM_POLY_14,
            _ => panic!("unsupported Galois field degree: {m}"),
        };
        let n = (1usize << m) - 1;

        let mut alpha_to = vec![0u16; n + 1];
        let mut index_of = vec![NO_LOG; n + 1];

        let mut x: u32 = 1;
        for i in 0..n {
            alpha_to[i] = x as u16;
            index_of[x as usize] = i as i16;

            x <<= 1;
            if x & (1 << m) != 0 {
                x ^= prim_poly;
            }
        }
        alpha_to[n] = alpha_to[0];

        Self { m, n, alpha_to, index_of }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// α^i for any integer exponent, reduced mod n.
    #[inline]
    pub fn alpha(&self, i: usize) -> u16 {
        self.alpha_to[i % self.n]
    }

    /// Raw antilog table entry; index must be in `[0, n]`.
    #[inline]
    pub fn alpha_to(&self, i: usize) -> u16 {
        self.alpha_to[i]
    }

    /// Discrete log of a nonzero field element, or `None` if `v == 0`.
    #[inline]
    pub fn log(&self, v: u16) -> Option<u16> {
        if v == 0 {
            None
        } else {
            Some(self.index_of[v as usize] as u16)
        }
    }

    /// Raw discrete-log table entry (the sentinel `-1` for `v == 0`).
    #[inline]
    pub fn index_of_raw(&self, v: u16) -> i16 {
        self.index_of[v as usize]
    }

    /// GF(2^m) multiplication via logs; either operand zero yields zero.
    #[inline]
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        match (self.log(a), self.log(b)) {
            (Some(la), Some(lb)) => self.alpha_to[(la as usize + lb as usize) % self.n],
            _ => 0,
        }
    }

    /// GF(2^m) division; panics if `b == 0`.
    #[inline]
    pub fn div(&self, a: u16, b: u16) -> u16 {
        let lb = self.log(b).expect("division by zero in GF");
        match self.log(a) {
            Some(la) => self.alpha_to[(la as usize + self.n - lb as usize) % self.n],
            None => 0,
        }
    }
}
