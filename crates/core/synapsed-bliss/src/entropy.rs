//! Seeded entropy pool
//!
//! Randomness for key generation and signing comes from hashing a 64-byte
//! seed that is treated as a little-endian counter. Four independent pools
//! (bits, bytes, 16-bit and 64-bit words) are refilled from ten consecutive
//! hashes each; a refill is the only place the seed advances.

use crate::hash::{HashAlgorithm, HASH_BYTES};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed length in bytes
pub const SEED_BYTES: usize = 64;

const HASHES_PER_REFILL: usize = 10;
const BYTE_POOL_LEN: usize = HASH_BYTES * HASHES_PER_REFILL;
const U16_POOL_LEN: usize = BYTE_POOL_LEN / 2;
const U64_POOL_LEN: usize = BYTE_POOL_LEN / 8;

/// How multi-bit draws are taken from the bit pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingMode {
    /// Take `k` bits straight from the 64-bit pool
    #[default]
    Fast,
    /// Draw `k` single bits, most significant first; reproduces the
    /// reference output bit for bit
    Reference,
}

/// Hash-driven random source scoped to one key generation or signature
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EntropyPool {
    seed: [u8; SEED_BYTES],
    bit_pool: u64,
    bit_index: u32,
    byte_pool: [u8; BYTE_POOL_LEN],
    byte_index: usize,
    u16_pool: [u16; U16_POOL_LEN],
    u16_index: usize,
    u64_pool: [u64; U64_POOL_LEN],
    u64_index: usize,
    #[zeroize(skip)]
    hash: HashAlgorithm,
    #[zeroize(skip)]
    mode: SamplingMode,
}

impl EntropyPool {
    /// Create a pool from `seed`, filling every sub-pool once
    pub fn new(seed: &[u8; SEED_BYTES], hash: HashAlgorithm, mode: SamplingMode) -> Self {
        let mut pool = Self {
            seed: *seed,
            bit_pool: 0,
            bit_index: 0,
            byte_pool: [0; BYTE_POOL_LEN],
            byte_index: 0,
            u16_pool: [0; U16_POOL_LEN],
            u16_index: 0,
            u64_pool: [0; U64_POOL_LEN],
            u64_index: 0,
            hash,
            mode,
        };
        pool.refill_bytes();
        pool.refill_u16();
        pool.refill_u64();
        pool.refill_bits();
        pool
    }

    /// Sampling mode this pool was created with
    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    fn increment_seed(&mut self) {
        for byte in self.seed.iter_mut() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
    }

    fn refill(&mut self) -> [u8; BYTE_POOL_LEN] {
        let mut out = [0u8; BYTE_POOL_LEN];
        for chunk in out.chunks_exact_mut(HASH_BYTES) {
            chunk.copy_from_slice(&self.hash.digest(&self.seed));
            self.increment_seed();
        }
        out
    }

    fn refill_bytes(&mut self) {
        let mut fresh = self.refill();
        self.byte_pool.copy_from_slice(&fresh);
        self.byte_index = 0;
        fresh.zeroize();
    }

    fn refill_u16(&mut self) {
        let mut fresh = self.refill();
        for (slot, chunk) in self.u16_pool.iter_mut().zip(fresh.chunks_exact(2)) {
            *slot = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
        self.u16_index = 0;
        fresh.zeroize();
    }

    fn refill_u64(&mut self) {
        let mut fresh = self.refill();
        for (slot, chunk) in self.u64_pool.iter_mut().zip(fresh.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *slot = u64::from_le_bytes(word);
        }
        self.u64_index = 0;
        fresh.zeroize();
    }

    fn refill_bits(&mut self) {
        self.bit_pool = self.random_u64();
        self.bit_index = 0;
    }

    /// Next 64-bit word
    pub fn random_u64(&mut self) -> u64 {
        if self.u64_index >= U64_POOL_LEN {
            self.refill_u64();
        }
        self.u64_index += 1;
        self.u64_pool[self.u64_index - 1]
    }

    /// Next 16-bit word
    pub fn random_u16(&mut self) -> u16 {
        if self.u16_index >= U16_POOL_LEN {
            self.refill_u16();
        }
        self.u16_index += 1;
        self.u16_pool[self.u16_index - 1]
    }

    /// Next byte
    pub fn random_u8(&mut self) -> u8 {
        if self.byte_index >= BYTE_POOL_LEN {
            self.refill_bytes();
        }
        self.byte_index += 1;
        self.byte_pool[self.byte_index - 1]
    }

    /// Next single bit
    pub fn random_bit(&mut self) -> bool {
        if self.bit_index >= 64 {
            self.refill_bits();
        }
        let bit = self.bit_pool & 1;
        self.bit_pool >>= 1;
        self.bit_index += 1;
        bit == 1
    }

    /// `n` random bits in the low-order bits of the result
    ///
    /// # Panics
    ///
    /// Panics if `n > 32`.
    pub fn random_bits(&mut self, n: u32) -> u32 {
        assert!(n <= 32, "at most 32 bits per draw, requested {n}");
        match self.mode {
            SamplingMode::Reference => {
                let mut value = 0u32;
                for _ in 0..n {
                    value = (value << 1) | u32::from(self.random_bit());
                }
                value
            }
            SamplingMode::Fast => {
                if self.bit_index >= 64 - n {
                    self.refill_bits();
                }
                let value = (self.bit_pool & ((1u64 << n) - 1)) as u32;
                self.bit_pool >>= n;
                self.bit_index += n;
                value
            }
        }
    }
}

impl core::fmt::Debug for EntropyPool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntropyPool")
            .field("hash", &self.hash)
            .field("mode", &self.mode)
            .field("seed", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha3_512;

    #[test]
    fn seed_counter_carries() {
        let mut seed = [0u8; SEED_BYTES];
        seed[0] = 0xff;
        seed[1] = 0xff;
        let mut pool = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Fast);
        // 4 refills of 10 hashes each during construction
        assert_eq!(pool.seed[0], 0xff_u8.wrapping_add(40));
        assert_eq!(pool.seed[1], 0);
        assert_eq!(pool.seed[2], 1);
        pool.increment_seed();
        assert_eq!(pool.seed[0], 40);
    }

    #[test]
    fn byte_pool_is_first_hash_block() {
        let seed = [7u8; SEED_BYTES];
        let mut pool = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Fast);
        let expected = sha3_512(&seed);
        let drawn: Vec<u8> = (0..HASH_BYTES).map(|_| pool.random_u8()).collect();
        assert_eq!(drawn, expected.to_vec());
    }

    #[test]
    fn u16_pool_follows_byte_pool() {
        let seed = [0u8; SEED_BYTES];
        let mut pool = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Fast);
        let mut counter = seed;
        counter[0] = HASHES_PER_REFILL as u8;
        let block = sha3_512(&counter);
        assert_eq!(pool.random_u16(), u16::from_le_bytes([block[0], block[1]]));
    }

    #[test]
    fn same_seed_same_stream() {
        let seed = [42u8; SEED_BYTES];
        for mode in [SamplingMode::Fast, SamplingMode::Reference] {
            let mut a = EntropyPool::new(&seed, HashAlgorithm::Blake2b512, mode);
            let mut b = EntropyPool::new(&seed, HashAlgorithm::Blake2b512, mode);
            for width in 1..=32 {
                assert_eq!(a.random_bits(width), b.random_bits(width));
                assert_eq!(a.random_u8(), b.random_u8());
            }
        }
    }

    #[test]
    fn draws_fit_requested_width() {
        let mut pool = EntropyPool::new(&[1u8; SEED_BYTES], HashAlgorithm::Sha3_512, SamplingMode::Fast);
        for _ in 0..1000 {
            assert!(pool.random_bits(5) < 32);
            assert_eq!(pool.random_bits(0), 0);
        }
    }

    #[test]
    fn reference_mode_reads_bits_msb_first() {
        let seed = [3u8; SEED_BYTES];
        let mut bits = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Reference);
        let mut grouped = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Reference);
        let first = u32::from(bits.random_bit());
        let second = u32::from(bits.random_bit());
        assert_eq!(grouped.random_bits(2), (first << 1) | second);
    }

    #[test]
    #[should_panic]
    fn too_many_bits_is_a_misuse() {
        let mut pool = EntropyPool::new(&[0u8; SEED_BYTES], HashAlgorithm::Sha3_512, SamplingMode::Fast);
        pool.random_bits(33);
    }
}
