//! Polynomial containers and vector helpers
//!
//! [`Polynomial`] holds coefficients in the normal domain, [`NttPoly`] in the
//! transform domain. Converting between them always goes through
//! [`NttEngine`](crate::ntt::NttEngine).

use core::ops::{Deref, DerefMut};
use zeroize::Zeroize;

/// Polynomial in `Z[x]/(x^n + 1)`, normal domain
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial(Vec<i32>);

impl Polynomial {
    /// Wrap a coefficient vector
    pub fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self(coeffs)
    }

    /// All-zero polynomial with `n` coefficients
    pub fn zero(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// Coefficients in order of increasing degree
    pub fn coeffs(&self) -> &[i32] {
        &self.0
    }

    /// Unwrap into the coefficient vector
    pub fn into_coeffs(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for Polynomial {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl DerefMut for Polynomial {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.0
    }
}

/// Polynomial in the NTT domain, coefficients in `[0, q)`
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct NttPoly(Vec<i32>);

impl NttPoly {
    pub(crate) fn from_coeffs(coeffs: Vec<i32>) -> Self {
        Self(coeffs)
    }

    /// Transform-domain coefficients
    pub fn coeffs(&self) -> &[i32] {
        &self.0
    }

    pub(crate) fn coeffs_mut(&mut self) -> &mut [i32] {
        &mut self.0
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the polynomial has no coefficients
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Largest absolute coefficient
pub fn max_norm(v: &[i32]) -> i64 {
    v.iter().map(|&x| i64::from(x).abs()).max().unwrap_or(0)
}

/// Squared Euclidean norm
pub fn norm_squared(v: &[i32]) -> i64 {
    v.iter().map(|&x| i64::from(x) * i64::from(x)).sum()
}

/// Largest absolute coefficient of `v * 2^d`
pub fn max_norm_scaled(v: &[i32], d: u32) -> i64 {
    max_norm(v) << d
}

/// Squared Euclidean norm of `v * 2^d`
pub fn norm_squared_scaled(v: &[i32], d: u32) -> i64 {
    v.iter()
        .map(|&x| {
            let x = i64::from(x) << d;
            x * x
        })
        .sum()
}

/// Inner product with 32-bit wrapping arithmetic
pub fn scalar_product(a: &[i32], b: &[i32]) -> i32 {
    a.iter()
        .zip(b)
        .fold(0i32, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y)))
}

/// Round away the low `d` bits: `(x + 2^(d-1)) / 2^d`
pub fn drop_bits(v: &[i32], d: u32) -> Vec<i32> {
    debug_assert!(d > 0 && d < 31);
    let delta = 1i32 << d;
    let half = delta >> 1;
    v.iter().map(|&x| (x + half) / delta).collect()
}
