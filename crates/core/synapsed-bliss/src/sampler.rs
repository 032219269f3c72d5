//! Discrete Gaussian sampling
//!
//! Bernoulli-based rejection sampler after Ducas, Durmus, Lepoint and
//! Lyubashevsky (algorithms 8 and 10-12). Every call consumes entropy from
//! the pool; none of them can fail, they loop until a candidate is accepted.

pub mod cdt;

use crate::entropy::EntropyPool;
use crate::error::{Error, Result};
use crate::params::ParamSet;
use cdt::CdtTable;

/// Bit groups tried by [`GaussianSampler::positive_binary`] before it
/// settles on 0
const MAX_BINARY_ROUNDS: u32 = 16;

/// Gaussian sampler bound to one entropy pool
#[derive(Debug)]
pub struct GaussianSampler<'a> {
    entropy: &'a mut EntropyPool,
    table: &'static CdtTable,
}

impl<'a> GaussianSampler<'a> {
    /// Sampler for the `sigma` of `params`
    pub fn new(params: &ParamSet, entropy: &'a mut EntropyPool) -> Result<Self> {
        let table = cdt::lookup(params.sigma, params.ell, params.precision)
            .ok_or(Error::Internal("no Bernoulli table for parameter set"))?;
        Ok(Self { entropy, table })
    }

    /// The underlying entropy pool
    pub fn entropy(&mut self) -> &mut EntropyPool {
        self.entropy
    }

    fn columns(&self) -> usize {
        self.table.precision as usize / 8
    }

    /// Bernoulli trial against the big-endian fraction stored in `row`
    pub fn ber(&mut self, row: &[u8]) -> bool {
        for &p in &row[..self.columns()] {
            let uc = self.entropy.random_u8();
            if uc < p {
                return true;
            }
            if uc > p {
                return false;
            }
        }
        true
    }

    /// Bernoulli trial with probability `exp(-x / (2 sigma^2))`
    pub fn ber_exp(&mut self, x: u32) -> bool {
        let cols = self.columns();
        let rows = self.table.rows;
        for i in (0..self.table.ell).rev() {
            if x & (1 << i) != 0 {
                let start = i as usize * cols;
                if !self.ber(&rows[start..start + cols]) {
                    return false;
                }
            }
        }
        true
    }

    /// Bernoulli trial with probability `1 / cosh(x / sigma^2)`
    pub fn ber_cosh(&mut self, x: i32) -> bool {
        let x = x.wrapping_abs().wrapping_shl(1) as u32;
        loop {
            if self.ber_exp(x) {
                return true;
            }
            if !self.entropy.random_bit() && !self.ber_exp(x) {
                return false;
            }
        }
    }

    /// Sample from the binary discrete Gaussian on non-negative integers
    pub fn positive_binary(&mut self) -> u32 {
        'restart: loop {
            if self.entropy.random_bit() {
                return 0;
            }
            for i in 1..=MAX_BINARY_ROUNDS {
                match self.entropy.random_bits(2 * i - 1) {
                    0 => return i,
                    1 => {}
                    _ => continue 'restart,
                }
            }
            return 0;
        }
    }

    /// Sample from the centered discrete Gaussian of width `sigma`
    pub fn gauss(&mut self) -> i32 {
        let k_sigma = u32::from(self.table.k_sigma);
        let k_sigma_bits = u32::from(self.table.k_sigma_bits);
        loop {
            let x = self.positive_binary();
            let y = loop {
                let y = self.entropy.random_bits(k_sigma_bits);
                if y < k_sigma {
                    break y;
                }
            };
            let e = y.wrapping_mul(y.wrapping_add(2u32.wrapping_mul(k_sigma).wrapping_mul(x)));
            let positive = self.entropy.random_bit();
            if (x | y != 0 || positive) && self.ber_exp(e) {
                let magnitude = (k_sigma * x + y) as i32;
                return if positive { magnitude } else { -magnitude };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{SamplingMode, SEED_BYTES};
    use crate::hash::HashAlgorithm;
    use crate::params::Kind;

    fn pool(seed: u8) -> EntropyPool {
        EntropyPool::new(&[seed; SEED_BYTES], HashAlgorithm::Sha3_512, SamplingMode::Fast)
    }

    #[test]
    fn every_kind_has_a_table() {
        for kind in Kind::ALL {
            let p = kind.params();
            let table = cdt::lookup(p.sigma, p.ell, p.precision).expect("table");
            assert_eq!(table.rows.len(), (p.ell * p.precision / 8) as usize);
            assert!(u32::from(table.k_sigma) < 1 << table.k_sigma_bits);
        }
    }

    #[test]
    fn ber_extremes() {
        let mut entropy = pool(1);
        let mut sampler = GaussianSampler::new(Kind::B1.params(), &mut entropy).unwrap();
        assert!((0..100).all(|_| sampler.ber(&[0xff; 8])));
        assert!((0..100).all(|_| !sampler.ber(&[0x00; 8])));
        assert!((0..100).all(|_| sampler.ber_exp(0)));
    }

    #[test]
    fn gaussian_moments_match_sigma() {
        for kind in [Kind::B0, Kind::B1, Kind::B4] {
            let p = kind.params();
            let mut entropy = pool(kind.as_u8());
            let mut sampler = GaussianSampler::new(p, &mut entropy).unwrap();
            let samples: Vec<f64> = (0..20_000).map(|_| f64::from(sampler.gauss())).collect();
            let mean = samples.iter().sum::<f64>() / samples.len() as f64;
            let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
            let sigma = f64::from(p.sigma);
            assert!(mean.abs() < sigma * 0.05, "{kind}: mean {mean}");
            assert!((var.sqrt() / sigma - 1.0).abs() < 0.05, "{kind}: sd {}", var.sqrt());
        }
    }

    #[test]
    fn positive_binary_is_mostly_small() {
        let mut entropy = pool(9);
        let mut sampler = GaussianSampler::new(Kind::B2.params(), &mut entropy).unwrap();
        let draws: Vec<u32> = (0..5_000).map(|_| sampler.positive_binary()).collect();
        let zeros = draws.iter().filter(|&&x| x == 0).count();
        assert!(zeros > 3_000 && zeros < 4_000, "zeros = {zeros}");
        assert!(draws.iter().all(|&x| x <= MAX_BINARY_ROUNDS));
    }

    #[test]
    fn ber_cosh_accepts_zero_often() {
        let mut entropy = pool(5);
        let mut sampler = GaussianSampler::new(Kind::B3.params(), &mut entropy).unwrap();
        assert!((0..50).all(|_| sampler.ber_cosh(0)));
        assert!(sampler.ber_cosh(i32::MIN));
    }
}
