//! Seed sources for key generation and signing
//!
//! Everything BLISS-B draws internally comes from the seeded
//! [`EntropyPool`](crate::entropy::EntropyPool). The types here only supply
//! the 64-byte seeds.

#[cfg(feature = "std")]
use crate::error::{Error, Result};
use crate::traits::SecureRandom;
use core::fmt;
use rand_core::{CryptoRng, RngCore};

/// Operating system RNG
#[cfg(feature = "std")]
pub struct DefaultRng {
    inner: rand_core::OsRng,
}

#[cfg(feature = "std")]
impl Default for DefaultRng {
    fn default() -> Self {
        Self { inner: rand_core::OsRng }
    }
}

#[cfg(feature = "std")]
impl SecureRandom for DefaultRng {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

#[cfg(feature = "std")]
impl fmt::Debug for DefaultRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultRng").field("inner", &"OsRng").finish()
    }
}

/// Adapter for any `RngCore + CryptoRng`
pub struct RngWrapper<R: RngCore + CryptoRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngWrapper<R> {
    /// Wrap `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> SecureRandom for RngWrapper<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

impl<R: RngCore + CryptoRng> fmt::Debug for RngWrapper<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngWrapper").field("rng", &"<RNG>").finish()
    }
}

/// Fill `dest` from the operating system
///
/// # Errors
///
/// Returns [`Error::Randomness`] if the system source fails.
#[cfg(feature = "std")]
pub fn system_random_bytes(dest: &mut [u8]) -> Result<()> {
    getrandom::getrandom(dest).map_err(|err| {
        tracing::error!(%err, "system randomness unavailable");
        Error::Randomness
    })
}

/// Deterministic LCG for tests; not cryptographically secure
#[derive(Debug, Clone)]
pub struct TestRng {
    seed: u64,
}

impl TestRng {
    /// Create a test RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SecureRandom for TestRng {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
            *byte = (self.seed >> 24) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_is_reproducible() {
        let mut a = TestRng::new(12345);
        let mut b = TestRng::new(12345);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_ne!(TestRng::new(1).next_u32(), TestRng::new(2).next_u32());
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_sources_produce_output() {
        let mut buf = [0u8; 64];
        system_random_bytes(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));

        let mut rng = DefaultRng::default();
        let mut other = [0u8; 64];
        rng.fill_bytes(&mut other);
        assert_ne!(buf, other);
    }
}
