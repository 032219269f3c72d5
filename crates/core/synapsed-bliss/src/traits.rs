//! Core traits shared across the crate
//!
//! [`SecureRandom`] is the seam for seed sources, [`Serializable`] and
//! [`HexEncodable`] cover the wire formats of keys and signatures.

use crate::error::Result;

/// Source of seed bytes
pub trait SecureRandom {
    /// Fill `dest` with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Next little-endian `u32`
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    /// Next little-endian `u64`
    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }
}

/// Types with a fixed binary wire format
pub trait Serializable: Sized {
    /// Wire form of `self`
    ///
    /// Fails for values the wire layout cannot carry.
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Parse the wire form
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Hex form of the wire format
#[cfg(feature = "std")]
pub trait HexEncodable: Serializable {
    /// Encode to a lowercase hexadecimal string
    fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(self.to_bytes()?))
    }

    /// Decode from a hexadecimal string
    fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| crate::error::Error::Malformed("invalid hex string"))?;
        Self::from_bytes(&bytes)
    }
}
