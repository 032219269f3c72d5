//! Bit-level packing for the wire format
//!
//! Fields are written least-significant bit first and bytes are emitted in
//! order, so the first field lands in the low bits of byte 0. The reader
//! also offers an MSB-first mode used by the Huffman decoder.

use crate::error::{Error, Result};

/// Accumulates bit fields into a byte vector
#[derive(Debug, Default)]
pub struct BitWriter {
    out: Vec<u8>,
    bits: u64,
    n_bits: u32,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bytes` output bytes
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            out: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append the low `width` bits of `value`
    pub fn write(&mut self, value: u64, width: u32) {
        debug_assert!(width <= 57, "bit field too wide: {width}");
        if width == 0 {
            return;
        }
        let mask = (1u64 << width) - 1;
        self.bits |= (value & mask) << self.n_bits;
        self.n_bits += width;
        while self.n_bits >= 8 {
            self.out.push(self.bits as u8);
            self.bits >>= 8;
            self.n_bits -= 8;
        }
    }

    /// Append whole bytes as 8-bit fields
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write(u64::from(b), 8);
        }
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.out.len() * 8 + self.n_bits as usize
    }

    /// Flush the partial byte (zero padded) and return the output
    pub fn finish(mut self) -> Vec<u8> {
        if self.n_bits > 0 {
            self.out.push(self.bits as u8);
        }
        self.out
    }
}

/// Reads bit fields back out of a byte slice
#[derive(Debug)]
pub struct BitReader<'a> {
    input: &'a [u8],
    pos: usize,
    bits: u64,
    n_bits: u32,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `input`
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, bits: 0, n_bits: 0 }
    }

    fn next_byte(&mut self) -> Result<u8> {
        let byte = self
            .input
            .get(self.pos)
            .copied()
            .ok_or(Error::Malformed("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a `width`-bit field, least-significant bit first
    pub fn read(&mut self, width: u32) -> Result<u64> {
        debug_assert!(width <= 56, "bit field too wide: {width}");
        while self.n_bits < width {
            let byte = self.next_byte()?;
            self.bits |= u64::from(byte) << self.n_bits;
            self.n_bits += 8;
        }
        let value = self.bits & ((1u64 << width) - 1);
        self.bits >>= width;
        self.n_bits -= width;
        Ok(value)
    }

    /// Read a `width`-bit field, most-significant bit first
    ///
    /// Must not be mixed with [`BitReader::read`] on the same reader.
    pub fn read_msb(&mut self, width: u32) -> Result<u32> {
        debug_assert!(width <= 32, "bit field too wide: {width}");
        if width == 0 {
            return Ok(0);
        }
        while self.n_bits < width {
            let byte = self.next_byte()?;
            self.bits |= u64::from(byte) << (64 - 8 - self.n_bits);
            self.n_bits += 8;
        }
        let value = (self.bits >> (64 - width)) as u32;
        self.bits <<= width;
        self.n_bits -= width;
        Ok(value)
    }

    /// Read `len` whole bytes as 8-bit fields
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        (0..len).map(|_| self.read(8).map(|b| b as u8)).collect()
    }

    /// Whether every bit not yet consumed is zero (LSB-first mode)
    pub fn remaining_bits_are_zero(&self) -> bool {
        self.bits == 0 && self.input[self.pos..].iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_pack_lsb_first() {
        let mut w = BitWriter::new();
        w.write(0b101, 3);
        w.write(0x1ff, 9);
        w.write(0, 1);
        let bytes = w.finish();
        assert_eq!(bytes, vec![0b1111_1101, 0b0000_1111]);

        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read(3).unwrap(), 0b101);
        assert_eq!(r.read(9).unwrap(), 0x1ff);
        assert!(r.remaining_bits_are_zero());
    }

    #[test]
    fn msb_reads_walk_from_the_top() {
        let bytes = [0b1010_0000u8, 0xff];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read_msb(0).unwrap(), 0);
        assert_eq!(r.read_msb(1).unwrap(), 1);
        assert_eq!(r.read_msb(1).unwrap(), 0);
        assert_eq!(r.read_msb(2).unwrap(), 0b10);
        assert_eq!(r.read_msb(8).unwrap(), 0x0f);
        assert_eq!(r.read_msb(4).unwrap(), 0x0f);
        assert!(r.read_msb(1).is_err());
    }

    #[test]
    fn reading_past_the_end_fails() {
        let mut r = BitReader::new(&[0xaa]);
        assert_eq!(r.read_bytes(1).unwrap(), vec![0xaa]);
        assert_eq!(r.read(1), Err(Error::Malformed("unexpected end of input")));
    }

    #[test]
    fn bit_len_tracks_partial_bytes() {
        let mut w = BitWriter::with_capacity(4);
        w.write_bytes(&[1, 2]);
        w.write(1, 5);
        assert_eq!(w.bit_len(), 21);
        assert_eq!(w.finish().len(), 3);
    }
}
