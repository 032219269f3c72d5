//! Challenge derivation
//!
//! The challenge is a set of `kappa` distinct positions in `[0, n)` taken
//! from SHA3-512 output over `H(message) || dv`, where `dv` is the
//! compressed commitment serialized as little-endian 16-bit words. The last
//! byte of the buffer doubles as a retry counter.

use crate::hash::{sha3_512, HASH_BYTES};
use crate::params::ParamSet;

/// Hash iterations before giving up
const MAX_TRIES: usize = 256;

/// Buffer holding `H(message)` followed by room for the commitment
#[derive(Debug, Clone)]
pub(crate) struct ChallengeInput {
    buf: Vec<u8>,
}

impl ChallengeInput {
    /// Hash `message` into a fresh buffer sized for ring dimension `n`
    pub(crate) fn new(message: &[u8], n: usize) -> Self {
        let mut buf = vec![0u8; HASH_BYTES + 2 * n];
        buf[..HASH_BYTES].copy_from_slice(&sha3_512(message));
        Self { buf }
    }

    /// Derive the challenge indices for commitment `dv`
    ///
    /// Returns `None` if 256 hash iterations did not yield `kappa` distinct
    /// indices.
    pub(crate) fn indices(&mut self, params: &ParamSet, dv: &[i32]) -> Option<Vec<u32>> {
        debug_assert_eq!(dv.len(), params.n);
        for (chunk, &x) in self.buf[HASH_BYTES..].chunks_exact_mut(2).zip(dv) {
            chunk.copy_from_slice(&(x as u16).to_le_bytes());
        }

        let kappa = params.kappa;
        let last = self.buf.len() - 1;
        for _ in 0..MAX_TRIES {
            self.buf[last] = self.buf[last].wrapping_add(1);
            let digest = sha3_512(&self.buf);

            let mut taken = [false; 512];
            let mut indices = Vec::with_capacity(kappa);
            let mut take = |index: usize| {
                if !taken[index] {
                    taken[index] = true;
                    indices.push(index as u32);
                }
                indices.len() >= kappa
            };

            let done = if params.n == 256 {
                digest.iter().any(|&b| take(usize::from(b)))
            } else {
                // 9-bit indices: the first byte of each 8-byte block supplies
                // the low bit of the seven indices that follow it
                let mut done = false;
                'blocks: for block in digest.chunks_exact(8) {
                    let mut extra = block[0];
                    for &b in &block[1..] {
                        let index = (usize::from(b) << 1) | usize::from(extra & 1);
                        extra >>= 1;
                        if take(index) {
                            done = true;
                            break 'blocks;
                        }
                    }
                }
                done
            };

            if done {
                return Some(indices);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Kind;

    #[test]
    fn indices_are_distinct_and_in_range() {
        for kind in Kind::ALL {
            let p = kind.params();
            let dv: Vec<i32> = (0..p.n as i32).map(|i| i % p.mod_p).collect();
            let mut input = ChallengeInput::new(b"challenge", p.n);
            let c = input.indices(p, &dv).expect("challenge");
            assert_eq!(c.len(), p.kappa);
            let mut sorted = c.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), p.kappa);
            assert!(c.iter().all(|&i| (i as usize) < p.n));
        }
    }

    #[test]
    fn depends_on_message_and_commitment() {
        let p = Kind::B1.params();
        let dv = vec![3; p.n];
        let base = ChallengeInput::new(b"m", p.n).indices(p, &dv);
        assert_eq!(base, ChallengeInput::new(b"m", p.n).indices(p, &dv));
        assert_ne!(base, ChallengeInput::new(b"n", p.n).indices(p, &dv));
        let mut other = dv.clone();
        other[0] = 4;
        assert_ne!(base, ChallengeInput::new(b"m", p.n).indices(p, &other));
    }

    #[test]
    fn first_try_uses_incremented_counter() {
        let p = Kind::B0.params();
        let dv = vec![0; p.n];
        let mut buf = vec![0u8; HASH_BYTES + 2 * p.n];
        buf[..HASH_BYTES].copy_from_slice(&sha3_512(b"x"));
        *buf.last_mut().unwrap() = 1;
        let digest = sha3_512(&buf);
        let c = ChallengeInput::new(b"x", p.n).indices(p, &dv).unwrap();
        assert_eq!(c[0], u32::from(digest[0]));
    }
}
