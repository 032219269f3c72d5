//! BLISS-B key pairs and key generation
//!
//! The secret key is a pair of sparse polynomials `(s1, s2)` with
//! `s2 = 2g - 1`. The public key is `a = -s2 / s1 mod q`, kept in the NTT
//! domain so signing and verification only need one forward transform.

use crate::config::BlissConfig;
use crate::entropy::{EntropyPool, SEED_BYTES};
use crate::error::{Error, Result};
use crate::ntt::NttEngine;
use crate::params::{Kind, ParamSet};
use crate::poly::{NttPoly, Polynomial};
use crate::secure_memory::SecretPoly;
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Attempts at drawing an invertible `s1` before giving up
const MAX_KEYGEN_ATTEMPTS: u32 = 4;

/// BLISS-B private key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) kind: Kind,
    pub(crate) s1: Polynomial,
    pub(crate) s2: Polynomial,
    pub(crate) a: NttPoly,
}

/// BLISS-B public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) kind: Kind,
    pub(crate) a: NttPoly,
}

impl PrivateKey {
    /// Generate a key pair from a 64-byte seed with the default configuration
    pub fn generate(kind: Kind, seed: &[u8; SEED_BYTES]) -> Result<Self> {
        Self::generate_with_config(kind, seed, &BlissConfig::default())
    }

    /// Generate a key pair from a 64-byte seed
    pub fn generate_with_config(
        kind: Kind,
        seed: &[u8; SEED_BYTES],
        config: &BlissConfig,
    ) -> Result<Self> {
        let mut entropy = EntropyPool::new(seed, config.entropy_hash, config.sampling);
        Self::generate_from_entropy(kind, &mut entropy)
    }

    /// Generate a key pair drawing from an existing entropy pool
    pub fn generate_from_entropy(kind: Kind, entropy: &mut EntropyPool) -> Result<Self> {
        let params = kind.params();
        let ntt = NttEngine::new(params);
        tracing::debug!(%kind, "generating key pair");

        let mut s2 = sparse_poly(params, entropy);
        for c in s2.iter_mut() {
            *c *= 2;
        }
        s2[0] -= 1;
        let mut t = ntt.forward(&s2);

        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            let s1 = sparse_poly(params, entropy);
            let Some(mut u) = ntt.invert(&s1) else {
                tracing::warn!(%kind, attempt, "s1 not invertible, retrying");
                continue;
            };

            let mut quotient = ntt.inverse(&ntt.product(&t, &u));
            let a = ntt.forward(&ntt.negate(&quotient));
            quotient.zeroize();
            t.zeroize();
            u.zeroize();

            tracing::debug!(%kind, attempt, "key pair generated");
            return Ok(Self {
                kind,
                s1: Polynomial::from_coeffs(s1.to_vec()),
                s2: Polynomial::from_coeffs(s2.to_vec()),
                a,
            });
        }

        t.zeroize();
        tracing::error!(%kind, "no invertible s1 found");
        Err(Error::KeyGeneration(MAX_KEYGEN_ATTEMPTS))
    }

    /// Parameter set of this key
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The matching public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey { kind: self.kind, a: self.a.clone() }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("kind", &self.kind)
            .field("s1", &"[REDACTED]")
            .field("s2", &"[REDACTED]")
            .finish()
    }
}

impl PublicKey {
    /// Build a public key from its NTT-domain polynomial
    ///
    /// Every coefficient must lie in `[0, q)`.
    pub fn from_ntt(kind: Kind, a: Vec<i32>) -> Result<Self> {
        let params = kind.params();
        if a.len() != params.n {
            return Err(Error::Malformed("public key has wrong number of coefficients"));
        }
        if a.iter().any(|&x| !(0..params.q).contains(&x)) {
            return Err(Error::OutOfBounds("public key coefficient outside [0, q)"));
        }
        Ok(Self { kind, a: NttPoly::from_coeffs(a) })
    }

    /// Parameter set of this key
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// NTT-domain coefficients of `a`
    pub fn ntt_coeffs(&self) -> &[i32] {
        self.a.coeffs()
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.kind.as_u8().ct_eq(&other.kind.as_u8()) & self.a.coeffs().ct_eq(other.a.coeffs())
    }
}

/// Sparse polynomial with `nz1` entries of `+-1` and `nz2` entries of `+-2`
///
/// Positions come from uniformly random 16-bit draws; a draw that hits an
/// already occupied slot is discarded.
pub(crate) fn sparse_poly(params: &ParamSet, entropy: &mut EntropyPool) -> SecretPoly {
    let n = params.n as u32;
    let mut v = SecretPoly::zero(params.n);
    for (count, magnitude) in [(params.nz1, 1), (params.nz2, 2)] {
        let mut placed = 0;
        while placed < count {
            let x = u32::from(entropy.random_u16());
            let j = ((x >> 1) % n) as usize;
            if v[j] == 0 {
                v[j] = if x & 1 == 1 { magnitude } else { -magnitude };
                placed += 1;
            }
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SamplingMode;
    use crate::hash::HashAlgorithm;

    #[test]
    fn sparse_poly_weights() {
        for kind in Kind::ALL {
            let p = kind.params();
            let mut entropy =
                EntropyPool::new(&[kind.as_u8(); SEED_BYTES], HashAlgorithm::Sha3_512, SamplingMode::Fast);
            let v = sparse_poly(p, &mut entropy);
            assert_eq!(v.iter().filter(|&&c| c.abs() == 1).count(), p.nz1);
            assert_eq!(v.iter().filter(|&&c| c.abs() == 2).count(), p.nz2);
            assert_eq!(v.iter().filter(|&&c| c != 0).count(), p.nz1 + p.nz2);
        }
    }

    #[test]
    fn public_key_times_s1_is_minus_s2() {
        for kind in [Kind::B0, Kind::B3] {
            let sk = PrivateKey::generate(kind, &[0x5a; SEED_BYTES]).unwrap();
            let ntt = NttEngine::new(kind.params());
            let q = kind.params().q;
            // a * s1 = -s2 (mod q)
            let lhs = ntt.multiply(&sk.s1, &sk.a);
            let expected: Vec<i32> = sk.s2.iter().map(|&c| (-c).rem_euclid(q)).collect();
            assert_eq!(lhs.coeffs(), expected.as_slice());
        }
    }

    #[test]
    fn s2_shape() {
        let sk = PrivateKey::generate(Kind::B1, &[1; SEED_BYTES]).unwrap();
        let p = Kind::B1.params();
        assert!(sk.s2[1..].iter().all(|&c| c % 2 == 0 && c.abs() <= 4));
        assert!(sk.s2[0] % 2 != 0);
        assert_eq!(sk.s2.iter().skip(1).filter(|&&c| c != 0).count() + usize::from(sk.s2[0] != -1), p.nz1 + p.nz2);
    }

    #[test]
    fn generation_is_deterministic() {
        let seed = [9u8; SEED_BYTES];
        let a = PrivateKey::generate(Kind::B2, &seed).unwrap();
        let b = PrivateKey::generate(Kind::B2, &seed).unwrap();
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(a.s1, b.s1);
        let c = PrivateKey::generate(Kind::B2, &[10u8; SEED_BYTES]).unwrap();
        assert_ne!(a.public_key(), c.public_key());
    }

    #[test]
    fn public_key_rejects_out_of_range() {
        let n = Kind::B0.params().n;
        assert!(PublicKey::from_ntt(Kind::B0, vec![0; n]).is_ok());
        assert!(PublicKey::from_ntt(Kind::B0, vec![7681; n]).is_err());
        assert!(PublicKey::from_ntt(Kind::B0, vec![0; n - 1]).is_err());
    }

    #[test]
    fn constant_time_equality() {
        let a = PrivateKey::generate(Kind::B0, &[3; SEED_BYTES]).unwrap().public_key();
        let b = PrivateKey::generate(Kind::B0, &[4; SEED_BYTES]).unwrap().public_key();
        assert!(bool::from(a.ct_eq(&a.clone())));
        assert!(!bool::from(a.ct_eq(&b)));
    }

    #[test]
    fn debug_hides_secrets() {
        let sk = PrivateKey::generate(Kind::B0, &[2; SEED_BYTES]).unwrap();
        assert!(format!("{sk:?}").contains("REDACTED"));
    }
}
