//! Number Theoretic Transform over `Z_q[x]/(x^n + 1)`
//!
//! The forward transform weights the input by powers of `psi` and runs an
//! iterative FFT. There is no separate inverse FFT: running the same FFT a
//! second time yields the coefficients in reversed order, which the inverse
//! fixes with the `r` table and an index flip.
//!
//! All coefficients handed to the FFT stay in `[0, q)`; debug builds check
//! this after every stage.

use crate::params::ParamSet;
use crate::poly::{NttPoly, Polynomial};

/// Transform engine for one ring
#[derive(Debug, Clone, Copy)]
pub struct NttEngine {
    q: i32,
    n: usize,
    w: &'static [i32],
    r: &'static [i32],
}

impl NttEngine {
    /// Engine for the ring of `params`
    pub fn new(params: &ParamSet) -> Self {
        Self { q: params.q, n: params.n, w: params.w, r: params.r }
    }

    /// Ring dimension
    pub fn n(&self) -> usize {
        self.n
    }

    /// Field modulus
    pub fn q(&self) -> i32 {
        self.q
    }

    /// Forward transform of a normal-domain polynomial
    pub fn forward(&self, input: &[i32]) -> NttPoly {
        debug_assert_eq!(input.len(), self.n);
        let mut out = self.pointwise(input, self.w);
        self.fft(&mut out);
        NttPoly::from_coeffs(out)
    }

    /// Inverse transform back to the normal domain, coefficients in `[0, q)`
    pub fn inverse(&self, input: &NttPoly) -> Polynomial {
        let mut tmp = input.coeffs().to_vec();
        self.fft(&mut tmp);
        let mut out = self.pointwise(&tmp, self.r);
        self.flip(&mut out);
        Polynomial::from_coeffs(out)
    }

    /// Pointwise product of two transforms
    pub fn product(&self, lhs: &NttPoly, rhs: &NttPoly) -> NttPoly {
        NttPoly::from_coeffs(self.pointwise(lhs.coeffs(), rhs.coeffs()))
    }

    /// Coefficientwise `-p mod q`
    pub fn negate(&self, p: &[i32]) -> Polynomial {
        let q = self.q;
        let out = p
            .iter()
            .map(|&t| {
                let x = t.wrapping_neg() % q;
                x + ((x >> 31) & q)
            })
            .collect();
        Polynomial::from_coeffs(out)
    }

    /// Transform of the inverse of `p`, or `None` if `p` is not a unit
    pub fn invert(&self, p: &[i32]) -> Option<NttPoly> {
        let mut t = self.forward(p);
        let q = self.q;
        for x in t.coeffs_mut() {
            if *x == 0 {
                return None;
            }
            *x = pow_mod(*x, q - 2, q);
        }
        Some(t)
    }

    /// `lhs * rhs` where `rhs` is already transformed
    pub fn multiply(&self, lhs: &[i32], rhs: &NttPoly) -> Polynomial {
        let t = self.forward(lhs);
        self.inverse(&self.product(&t, rhs))
    }

    fn pointwise(&self, t: &[i32], u: &[i32]) -> Vec<i32> {
        let q = self.q;
        let out: Vec<i32> = t
            .iter()
            .zip(u)
            .map(|(&a, &b)| {
                let x = (a * b) % q;
                x + ((x >> 31) & q)
            })
            .collect();
        debug_assert!(in_range(&out, q), "pointwise product left [0, q)");
        out
    }

    fn fft(&self, v: &mut [i32]) {
        let n = self.n;
        let q = self.q;
        debug_assert!(in_range(v, q), "FFT input outside [0, q)");

        // bit-reversal permutation; 00..0 and 11..1 stay in place
        let mut j = n >> 1;
        for i in 1..n - 1 {
            if i < j {
                v.swap(i, j);
            }
            let mut k = n;
            loop {
                k >>= 1;
                j ^= k;
                if j & k != 0 {
                    break;
                }
            }
        }

        let mut l = n;
        let mut i = 1;
        while i < n {
            for k in (0..n).step_by(2 * i) {
                let x = v[k + i];
                v[k + i] = sub_mod(v[k], x, q);
                v[k] = add_mod(v[k], x, q);
            }
            for j in 1..i {
                let y = self.w[j * l];
                for k in (j..n).step_by(2 * i) {
                    let x = (v[k + i] * y) % q;
                    v[k + i] = sub_mod(v[k], x, q);
                    v[k] = add_mod(v[k], x, q);
                }
            }
            l >>= 1;
            i <<= 1;
        }

        debug_assert!(in_range(v, q), "FFT output outside [0, q)");
    }

    fn flip(&self, v: &mut [i32]) {
        v[1..].reverse();
        if v[0] > 0 {
            v[0] = self.q - v[0];
        }
        debug_assert!(in_range(v, self.q), "flip left [0, q)");
    }
}

/// `x mod q` in `[0, q)`
pub fn smodq(x: i32, q: i32) -> i32 {
    debug_assert!(q > 0);
    let y = x % q;
    y + ((y >> 31) & q)
}

fn sub_mod(x: i32, y: i32, q: i32) -> i32 {
    let x = x - y;
    x + ((x >> 31) & q)
}

fn add_mod(x: i32, y: i32, q: i32) -> i32 {
    let x = x + y - q;
    x + ((x >> 31) & q)
}

fn pow_mod(mut x: i32, mut e: i32, q: i32) -> i32 {
    let mut y = if e & 1 == 1 { x } else { 1 };
    e >>= 1;
    while e > 0 {
        x = (x * x) % q;
        if e & 1 == 1 {
            y = (x * y) % q;
        }
        e >>= 1;
    }
    y
}

fn in_range(v: &[i32], q: i32) -> bool {
    v.iter().all(|&x| (0..q).contains(&x))
}
