//! Secure memory handling for secret intermediates
//!
//! Signing allocates several short-lived secret vectors per attempt. Each
//! of them lives in a [`SecretPoly`] so it is overwritten on every exit
//! path, restarts included.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Coefficient vector that zeros itself on drop
pub struct SecretPoly {
    coeffs: Vec<i32>,
}

impl SecretPoly {
    /// Zero-filled vector of length `n`
    pub fn zero(n: usize) -> Self {
        Self { coeffs: vec![0; n] }
    }

    /// Take ownership of an existing vector
    pub fn new(coeffs: Vec<i32>) -> Self {
        Self { coeffs }
    }

    /// Copy the coefficients out; the copy is no longer protected
    pub fn to_vec(&self) -> Vec<i32> {
        self.coeffs.clone()
    }
}

impl Zeroize for SecretPoly {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl Drop for SecretPoly {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretPoly {}

impl Deref for SecretPoly {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.coeffs
    }
}

impl DerefMut for SecretPoly {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.coeffs
    }
}

impl fmt::Debug for SecretPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretPoly")
            .field("len", &self.coeffs.len())
            .field("coeffs", &"[REDACTED]")
            .finish()
    }
}

/// Wrapper for fixed-size sensitive byte arrays such as seeds
#[derive(Clone)]
pub struct SecureArray<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecureArray<N> {
    /// Wrap `data`
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// All-zero array
    pub fn zero() -> Self {
        Self { data: [0u8; N] }
    }

    /// Borrow the array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> Zeroize for SecureArray<N> {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl<const N: usize> Drop for SecureArray<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> ZeroizeOnDrop for SecureArray<N> {}

impl<const N: usize> fmt::Debug for SecureArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureArray")
            .field("size", &N)
            .field("data", &"[REDACTED]")
            .finish()
    }
}

impl<const N: usize> AsMut<[u8]> for SecureArray<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
