//! BLISS-B signing and verification
//!
//! Signing is a rejection loop. Each attempt masks the secret with fresh
//! Gaussian vectors `(y1, y2)`, derives the challenge from the compressed
//! commitment, reduces `S c` greedily and then passes two Bernoulli
//! acceptance checks and the norm bounds. Any failed check restarts from
//! sampling; the loop never recurses. All per-attempt secrets live in
//! [`SecretPoly`] buffers and are wiped when the attempt ends.

use crate::challenge::ChallengeInput;
use crate::config::BlissConfig;
use crate::entropy::{EntropyPool, SEED_BYTES};
use crate::error::{Error, Result, VerificationFailure};
use crate::keys::{PrivateKey, PublicKey};
use crate::ntt::{smodq, NttEngine};
use crate::observability::{RestartReason, SignStage, SignTimer, SigningStats};
use crate::params::{Kind, ParamSet};
use crate::poly::{drop_bits, max_norm, max_norm_scaled, norm_squared, norm_squared_scaled, scalar_product};
use crate::sampler::GaussianSampler;
use crate::secure_memory::{SecretPoly, SecureArray};
use crate::traits::SecureRandom;
use subtle::ConstantTimeEq;

/// BLISS-B signature `(z1, z2, c)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub(crate) kind: Kind,
    pub(crate) z1: Vec<i32>,
    pub(crate) z2: Vec<i32>,
    pub(crate) c: Vec<u32>,
}

impl Signature {
    /// Assemble a signature from its components
    ///
    /// Rejects wrong lengths, challenge indices that repeat or fall outside
    /// `[0, n)`, and `(z1, z2)` outside the norm bounds of `kind`.
    pub fn from_parts(kind: Kind, z1: Vec<i32>, z2: Vec<i32>, c: Vec<u32>) -> Result<Self> {
        let params = kind.params();
        if z1.len() != params.n || z2.len() != params.n {
            return Err(Error::Malformed("signature has wrong number of coefficients"));
        }
        if c.len() != params.kappa {
            return Err(Error::Malformed("challenge has wrong number of indices"));
        }
        let mut seen = [false; 512];
        for &index in &c {
            let index = index as usize;
            if index >= params.n {
                return Err(Error::OutOfBounds("challenge index outside [0, n)"));
            }
            if seen[index] {
                return Err(Error::Malformed("repeated challenge index"));
            }
            seen[index] = true;
        }
        if norm_violation(params, &z1, &z2).is_some() {
            return Err(Error::OutOfBounds("signature exceeds norm bounds"));
        }
        Ok(Self { kind, z1, z2, c })
    }

    /// Parameter set of this signature
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// First response polynomial
    pub fn z1(&self) -> &[i32] {
        &self.z1
    }

    /// Compressed second response polynomial
    pub fn z2(&self) -> &[i32] {
        &self.z2
    }

    /// Challenge indices, in derivation order
    pub fn c(&self) -> &[u32] {
        &self.c
    }
}

impl PrivateKey {
    /// Sign `message` with a fresh seed from the operating system
    #[cfg(feature = "std")]
    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        let mut seed = SecureArray::<SEED_BYTES>::zero();
        crate::random::system_random_bytes(seed.as_mut())?;
        self.sign_with_seed(message, seed.as_array(), &BlissConfig::default())
    }

    /// Sign `message` with a seed drawn from `rng`
    pub fn sign_with_rng<R: SecureRandom>(&self, message: &[u8], rng: &mut R) -> Result<Signature> {
        let mut seed = SecureArray::<SEED_BYTES>::zero();
        rng.fill_bytes(seed.as_mut());
        self.sign_with_seed(message, seed.as_array(), &BlissConfig::default())
    }

    /// Sign `message` deterministically from a 64-byte seed
    pub fn sign_with_seed(
        &self,
        message: &[u8],
        seed: &[u8; SEED_BYTES],
        config: &BlissConfig,
    ) -> Result<Signature> {
        self.sign_with_stats(message, seed, config).map(|(signature, _)| signature)
    }

    /// Like [`sign_with_seed`](Self::sign_with_seed), also reporting how
    /// many attempts the rejection loop needed
    pub fn sign_with_stats(
        &self,
        message: &[u8],
        seed: &[u8; SEED_BYTES],
        config: &BlissConfig,
    ) -> Result<(Signature, SigningStats)> {
        let mut entropy = EntropyPool::new(seed, config.entropy_hash, config.sampling);
        self.sign_with_entropy(message, &mut entropy, config.max_restarts)
    }

    /// Run the signing loop on an existing entropy pool
    ///
    /// With `max_restarts` set, signing fails with [`Error::RestartLimit`]
    /// once that many attempts have been thrown away.
    pub fn sign_with_entropy(
        &self,
        message: &[u8],
        entropy: &mut EntropyPool,
        max_restarts: Option<u64>,
    ) -> Result<(Signature, SigningStats)> {
        let params = self.kind.params();
        let n = params.n;
        let d = params.d;
        let ntt = NttEngine::new(params);
        let mut sampler = GaussianSampler::new(params, entropy)?;
        let mut challenge = ChallengeInput::new(message, n);
        let mut stats = SigningStats::default();
        let timer = SignTimer::start();
        tracing::debug!(kind = %self.kind, message_len = message.len(), "signing");

        let mut y1 = SecretPoly::zero(n);
        let mut y2 = SecretPoly::zero(n);
        let mut z1 = SecretPoly::zero(n);
        let mut z2 = SecretPoly::zero(n);

        loop {
            stats.attempts += 1;
            stats.enter(SignStage::Sample);

            for i in 0..n {
                y1[i] = sampler.gauss();
                y2[i] = sampler.gauss();
            }

            // v = 2 * (a * y1) / (q + 2) + y2 mod 2q
            let mut v = SecretPoly::new(ntt.multiply(&y1, &self.a).into_coeffs());
            for i in 0..n {
                v[i] = smodq(2 * v[i] * params.one_q2 + y2[i], params.q2);
            }
            let dv: Vec<i32> = drop_bits(&v, d).into_iter().map(|x| smodq(x, params.mod_p)).collect();

            let c = challenge.indices(params, &dv).ok_or_else(|| {
                tracing::error!(kind = %self.kind, "challenge derivation exhausted");
                Error::Internal("challenge derivation exhausted its hash iterations")
            })?;

            stats.enter(SignStage::Reduce);
            let (v1, v2) = greedy_sc(&self.s1, &self.s2, &c);

            stats.enter(SignStage::AcceptanceCheck1);

            let norm = norm_squared(&v1) + norm_squared(&v2);
            let big_m = i64::from(params.big_m);
            if norm >= big_m {
                tracing::error!(kind = %self.kind, "||S c||^2 reached M");
                return Err(Error::Internal("||S c||^2 reached the rejection bound M"));
            }
            if !sampler.ber_exp((big_m - norm) as u32) {
                restart(&mut stats, RestartReason::NormRejected, max_restarts)?;
                continue;
            }

            stats.enter(SignStage::SignChoice);
            let subtract = sampler.entropy().random_bit();
            for i in 0..n {
                if subtract {
                    z1[i] = y1[i] - v1[i];
                    z2[i] = y2[i] - v2[i];
                } else {
                    z1[i] = y1[i] + v1[i];
                    z2[i] = y2[i] + v2[i];
                }
            }

            stats.enter(SignStage::AcceptanceCheck2);
            let product = scalar_product(&z1, &v1).wrapping_add(scalar_product(&z2, &v2));
            if !sampler.ber_cosh(product) {
                restart(&mut stats, RestartReason::CoshRejected, max_restarts)?;
                continue;
            }

            // z2 = drop(v) - drop(v - z2), centered mod p
            for i in 0..n {
                y1[i] = smodq(v[i] - z2[i], params.q2);
            }
            let high_v = SecretPoly::new(drop_bits(&v, d));
            let high_y = SecretPoly::new(drop_bits(&y1, d));
            let half = params.mod_p / 2;
            for i in 0..n {
                let mut x = high_v[i] - high_y[i];
                if x < -half {
                    x += params.mod_p;
                } else if x > half {
                    x -= params.mod_p;
                }
                if x < -half || x >= half {
                    tracing::error!(kind = %self.kind, "z2 left [-p/2, p/2)");
                    return Err(Error::Internal("compressed z2 outside [-p/2, p/2)"));
                }
                z2[i] = x;
            }

            stats.enter(SignStage::BoundsCheck);
            if let Some(reason) = norm_violation(params, &z1, &z2) {
                restart(&mut stats, reason, max_restarts)?;
                continue;
            }

            stats.enter(SignStage::Done);
            timer.finish(&mut stats);
            tracing::debug!(
                kind = %self.kind,
                attempts = stats.attempts,
                elapsed_us = stats.elapsed.as_micros() as u64,
                "signature produced"
            );
            let signature = Signature { kind: self.kind, z1: z1.to_vec(), z2: z2.to_vec(), c };
            return Ok((signature, stats));
        }
    }
}

impl PublicKey {
    /// Verify `signature` over `message`
    ///
    /// A signature that does not verify yields
    /// [`Error::VerificationFailed`] with the reason.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<()> {
        let outcome = self.check(signature, message);
        if let Err(Error::VerificationFailed(reason)) = &outcome {
            tracing::debug!(kind = %self.kind, %reason, "signature rejected");
        }
        outcome
    }

    fn check(&self, signature: &Signature, message: &[u8]) -> Result<()> {
        if self.kind != signature.kind {
            return Err(VerificationFailure::KindMismatch.into());
        }
        let params = self.kind.params();
        let n = params.n;
        if signature.z1.len() != n
            || signature.z2.len() != n
            || norm_violation(params, &signature.z1, &signature.z2).is_some()
        {
            return Err(VerificationFailure::NormBound.into());
        }
        if signature.c.len() != params.kappa || signature.c.iter().any(|&i| i as usize >= n) {
            return Err(VerificationFailure::MalformedChallenge.into());
        }

        let ntt = NttEngine::new(params);
        let mut v = ntt.multiply(&signature.z1, &self.a).into_coeffs();
        for x in v.iter_mut() {
            *x = smodq(2 * *x * params.one_q2, params.q2);
        }
        // add q / (q + 2) at every challenge position
        for &index in &signature.c {
            let x = &mut v[index as usize];
            *x = smodq(*x + params.q * params.one_q2, params.q2);
        }
        let dv: Vec<i32> = drop_bits(&v, params.d)
            .into_iter()
            .zip(&signature.z2)
            .map(|(x, &z)| smodq(x + z, params.mod_p))
            .collect();

        let c = ChallengeInput::new(message, n)
            .indices(params, &dv)
            .ok_or(VerificationFailure::ChallengeMismatch)?;
        if bool::from(c.as_slice().ct_eq(signature.c.as_slice())) {
            Ok(())
        } else {
            Err(VerificationFailure::ChallengeMismatch.into())
        }
    }
}

fn restart(stats: &mut SigningStats, reason: RestartReason, limit: Option<u64>) -> Result<()> {
    stats.record_restart(reason);
    match limit {
        Some(limit) if stats.restarts() > limit => {
            tracing::debug!(limit, "signing restart limit reached");
            Err(Error::RestartLimit(limit))
        }
        _ => Ok(()),
    }
}

/// First norm bound `(z1, z2)` violates, if any
///
/// `|z1| < b_inf` is strict; the `z2 * 2^d` and L2 bounds are inclusive.
/// Signatures from implementations that accept `|z1| == b_inf` are
/// rejected here whenever they contain such a coefficient.
pub(crate) fn norm_violation(params: &ParamSet, z1: &[i32], z2: &[i32]) -> Option<RestartReason> {
    let b_inf = i64::from(params.b_inf);
    if max_norm(z1) >= b_inf {
        return Some(RestartReason::Z1InfinityNorm);
    }
    if max_norm_scaled(z2, params.d) > b_inf {
        return Some(RestartReason::Z2InfinityNorm);
    }
    if norm_squared(z1) + norm_squared_scaled(z2, params.d) > params.b_l2 {
        return Some(RestartReason::L2Norm);
    }
    None
}

/// Greedy reduction of `S c`
///
/// For every challenge index the rotated `(s1, s2)` is added or subtracted,
/// whichever keeps the running vector shorter.
pub(crate) fn greedy_sc(s1: &[i32], s2: &[i32], c: &[u32]) -> (SecretPoly, SecretPoly) {
    let n = s1.len();
    let mut v1 = SecretPoly::zero(n);
    let mut v2 = SecretPoly::zero(n);

    for &index in c {
        let index = index as usize;
        let split = n - index;

        // xi = sign(<v, x^index * s>), negacyclic
        let mut xi = 0i32;
        for i in 0..split {
            xi += s1[i] * v1[index + i] + s2[i] * v2[index + i];
        }
        for i in split..n {
            xi -= s1[i] * v1[i - split] + s2[i] * v2[i - split];
        }

        let step = if xi > 0 { -1 } else { 1 };
        for i in 0..split {
            v1[index + i] += step * s1[i];
            v2[index + i] += step * s2[i];
        }
        for i in split..n {
            v1[i - split] -= step * s1[i];
            v2[i - split] -= step * s2[i];
        }
    }
    (v1, v2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(kind: Kind) -> PrivateKey {
        PrivateKey::generate(kind, &[0x11; SEED_BYTES]).unwrap()
    }

    #[test]
    fn greedy_sc_single_index_is_rotation() {
        let s1 = [1, 0, -1, 2];
        let s2 = [0, 2, 0, -2];
        // first index: xi = 0, so v = +x^1 * s
        let (v1, v2) = greedy_sc(&s1, &s2, &[1]);
        assert_eq!(&*v1, &[-2, 1, 0, -1]);
        assert_eq!(&*v2, &[2, 0, 2, 0]);
    }

    #[test]
    fn greedy_sc_stays_below_m() {
        for kind in Kind::ALL {
            let sk = key(kind);
            let p = kind.params();
            let c: Vec<u32> = (0..p.kappa as u32).map(|i| i * 3).collect();
            let (v1, v2) = greedy_sc(&sk.s1, &sk.s2, &c);
            assert!(norm_squared(&v1) + norm_squared(&v2) < i64::from(p.big_m));
        }
    }

    #[test]
    fn sign_and_verify_each_kind() {
        for kind in Kind::ALL {
            let sk = key(kind);
            let pk = sk.public_key();
            let sig = sk
                .sign_with_seed(b"each kind", &[kind.as_u8(); SEED_BYTES], &BlissConfig::default())
                .unwrap();
            assert_eq!(sig.kind(), kind);
            assert_eq!(sig.c().len(), kind.params().kappa);
            pk.verify(&sig, b"each kind").unwrap();
        }
    }

    #[test]
    fn produced_signatures_respect_bounds() {
        let sk = key(Kind::B3);
        let p = Kind::B3.params();
        for seed in 0..4u8 {
            let sig = sk.sign_with_seed(b"bounds", &[seed; SEED_BYTES], &BlissConfig::default()).unwrap();
            assert!(max_norm(sig.z1()) < i64::from(p.b_inf));
            assert!(norm_violation(p, sig.z1(), sig.z2()).is_none());
            let half = p.mod_p / 2;
            assert!(sig.z2().iter().all(|&z| (-half..half).contains(&z)));
        }
    }

    #[test]
    fn wrong_message_fails_with_challenge_mismatch() {
        let sk = key(Kind::B0);
        let sig = sk.sign_with_seed(b"original", &[3; SEED_BYTES], &BlissConfig::default()).unwrap();
        let err = sk.public_key().verify(&sig, b"tampered").unwrap_err();
        assert_eq!(err, Error::VerificationFailed(VerificationFailure::ChallengeMismatch));
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let sig = key(Kind::B0)
            .sign_with_seed(b"m", &[4; SEED_BYTES], &BlissConfig::default())
            .unwrap();
        let err = key(Kind::B1).public_key().verify(&sig, b"m").unwrap_err();
        assert_eq!(err, Error::VerificationFailed(VerificationFailure::KindMismatch));
    }

    #[test]
    fn oversized_z1_is_a_norm_failure() {
        let sk = key(Kind::B2);
        let mut sig = sk.sign_with_seed(b"m", &[5; SEED_BYTES], &BlissConfig::default()).unwrap();
        sig.z1[0] = Kind::B2.params().b_inf;
        let err = sk.public_key().verify(&sig, b"m").unwrap_err();
        assert_eq!(err, Error::VerificationFailed(VerificationFailure::NormBound));
    }

    #[test]
    fn out_of_range_challenge_is_malformed() {
        let sk = key(Kind::B0);
        let mut sig = sk.sign_with_seed(b"m", &[6; SEED_BYTES], &BlissConfig::default()).unwrap();
        sig.c[0] = 256;
        let err = sk.public_key().verify(&sig, b"m").unwrap_err();
        assert_eq!(err, Error::VerificationFailed(VerificationFailure::MalformedChallenge));
    }

    #[test]
    fn stats_count_every_attempt() {
        let sk = key(Kind::B1);
        let (_, stats) = sk
            .sign_with_stats(b"stats", &[7; SEED_BYTES], &BlissConfig::default())
            .unwrap();
        assert!(stats.attempts >= 1);
        assert_eq!(stats.attempts, stats.restarts() + 1);
        assert_eq!(stats.stage(), SignStage::Done);
    }

    #[test]
    fn zero_restart_cap_either_succeeds_first_time_or_errors() {
        let sk = key(Kind::B4);
        let config = BlissConfig::default().with_max_restarts(0);
        for seed in 0..8u8 {
            match sk.sign_with_stats(b"cap", &[seed; SEED_BYTES], &config) {
                Ok((_, stats)) => assert_eq!(stats.attempts, 1),
                Err(err) => assert_eq!(err, Error::RestartLimit(0)),
            }
        }
    }

    #[test]
    fn from_parts_validates() {
        let p = Kind::B0.params();
        let z = vec![0; p.n];
        let c: Vec<u32> = (0..p.kappa as u32).collect();
        assert!(Signature::from_parts(Kind::B0, z.clone(), z.clone(), c.clone()).is_ok());

        let mut dup = c.clone();
        dup[1] = dup[0];
        assert!(matches!(
            Signature::from_parts(Kind::B0, z.clone(), z.clone(), dup),
            Err(Error::Malformed(_))
        ));

        let mut big = z.clone();
        big[0] = p.b_inf;
        assert!(matches!(
            Signature::from_parts(Kind::B0, big, z.clone(), c.clone()),
            Err(Error::OutOfBounds(_))
        ));
        assert!(Signature::from_parts(Kind::B0, z.clone(), z[1..].to_vec(), c.clone()).is_err());
    }

    #[test]
    fn from_parts_checks_z2_and_l2_bounds() {
        let p = Kind::B0.params();
        let z = vec![0; p.n];
        let c: Vec<u32> = (0..p.kappa as u32).collect();

        // 16 * 2^5 = 512 stays within b_inf = 530, 17 * 2^5 does not
        let mut z2 = z.clone();
        z2[0] = p.b_inf >> p.d;
        assert!(Signature::from_parts(Kind::B0, z.clone(), z2.clone(), c.clone()).is_ok());
        z2[0] += 1;
        assert_eq!(
            norm_violation(p, &z, &z2),
            Some(RestartReason::Z2InfinityNorm)
        );
        assert!(matches!(
            Signature::from_parts(Kind::B0, z.clone(), z2, c.clone()),
            Err(Error::OutOfBounds(_))
        ));

        // every |z1| below b_inf, but the sum of squares is far above b_l2
        let wide = vec![p.b_inf - 1; p.n];
        assert_eq!(norm_violation(p, &wide, &z), Some(RestartReason::L2Norm));
        assert!(matches!(
            Signature::from_parts(Kind::B0, wide, z, c),
            Err(Error::OutOfBounds(_))
        ));
    }
}
