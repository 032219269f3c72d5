//! Static Huffman coding of signature coefficients
//!
//! Each coefficient pair is coded as one joint symbol
//! `(|z1| >> 8, z2)` with a fixed prefix code per parameter set. Codewords
//! are packed LSB-first and the byte order is reversed at the end, so the
//! decoder sees the last symbol first and reads every codeword MSB-first.
//!
//! Besides the symbol-level API there is a byte-level one where each byte
//! carries `z1_high` in its high nibble and `z2` in its low nibble as sign
//! and magnitude (bit 3 is the sign).

mod tables;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::params::Kind;

/// One coded coefficient pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointSymbol {
    /// `|z1| >> 8`
    pub z1_high: u8,
    /// Compressed `z2` coefficient
    pub z2: i32,
}

struct Code {
    encode: &'static [(u64, u32)],
    decode: &'static [[i16; 3]],
    z2_max: i32,
    row: i32,
    n: usize,
}

impl Code {
    fn for_kind(kind: Kind) -> Self {
        let (encode, decode): (&'static [(u64, u32)], &'static [[i16; 3]]) = match kind {
            Kind::B0 => (&tables::ENCODE_B0, &tables::DECODE_B0),
            Kind::B1 => (&tables::ENCODE_B1, &tables::DECODE_B1),
            Kind::B2 => (&tables::ENCODE_B2, &tables::DECODE_B2),
            Kind::B3 => (&tables::ENCODE_B3, &tables::DECODE_B3),
            Kind::B4 => (&tables::ENCODE_B4, &tables::DECODE_B4),
        };
        let params = kind.params();
        let z2_max = params.z2_max();
        Self { encode, decode, z2_max, row: 2 * z2_max + 1, n: params.n }
    }

    fn index(&self, symbol: JointSymbol) -> Result<usize> {
        if symbol.z2.abs() > self.z2_max {
            return Err(Error::OutOfBounds("z2 outside the Huffman alphabet"));
        }
        let index = (i32::from(symbol.z1_high) * self.row + symbol.z2 + self.z2_max) as usize;
        if index >= self.encode.len() {
            return Err(Error::OutOfBounds("z1 high bits outside the Huffman alphabet"));
        }
        Ok(index)
    }

    fn symbol(&self, value: i16) -> JointSymbol {
        let value = i32::from(value);
        JointSymbol {
            z1_high: (value / self.row) as u8,
            z2: value % self.row - self.z2_max,
        }
    }
}

/// Encode `symbols`; returns the packed bytes and the exact bit length
pub fn encode(kind: Kind, symbols: &[JointSymbol]) -> Result<(Vec<u8>, usize)> {
    let code = Code::for_kind(kind);
    let mut writer = BitWriter::with_capacity(symbols.len());
    let mut bit_len = 0;
    for &symbol in symbols {
        let (word, width) = code.encode[code.index(symbol)?];
        writer.write(word, width);
        bit_len += width as usize;
    }
    let mut bytes = writer.finish();
    bytes.reverse();
    Ok((bytes, bit_len))
}

/// Decode exactly `n` symbols from a payload of `bit_len` bits
pub fn decode(kind: Kind, bytes: &[u8], bit_len: usize) -> Result<Vec<JointSymbol>> {
    let code = Code::for_kind(kind);
    let total = bytes.len() * 8;
    if bit_len > total {
        return Err(Error::HuffmanCorrupt("bit length exceeds payload"));
    }
    let padding = total - bit_len;
    if padding > 32 {
        return Err(Error::HuffmanCorrupt("payload longer than its bit length"));
    }

    let mut reader = BitReader::new(bytes);
    if reader.read_msb(padding as u32)? != 0 {
        return Err(Error::HuffmanCorrupt("nonzero padding before the first codeword"));
    }

    let mut out = Vec::with_capacity(code.n);
    let mut state = 0usize;
    let mut consumed = padding;
    while consumed < total && out.len() < code.n {
        let bit = reader.read_msb(1)? as usize;
        consumed += 1;
        let next = code.decode[state][bit];
        state = usize::try_from(next)
            .ok()
            .filter(|&s| s < code.decode.len())
            .ok_or(Error::HuffmanCorrupt("tree edge out of range"))?;
        let leaf = code.decode[state][2];
        if leaf != -1 {
            out.push(code.symbol(leaf));
            state = 0;
        }
    }

    if total - consumed > 8 {
        return Err(Error::HuffmanCorrupt("trailing bits after the last symbol"));
    }
    if state != 0 {
        return Err(Error::HuffmanCorrupt("stream ends inside a codeword"));
    }
    if out.len() != code.n {
        return Err(Error::HuffmanCorrupt("wrong number of symbols"));
    }
    out.reverse();
    Ok(out)
}

/// Encode nibble-packed symbol bytes
pub fn encode_bytes(kind: Kind, input: &[u8]) -> Result<(Vec<u8>, usize)> {
    let symbols: Vec<JointSymbol> = input.iter().map(|&b| symbol_from_byte(b)).collect();
    encode(kind, &symbols)
}

/// Decode into nibble-packed symbol bytes
///
/// `z2` values that need more than three magnitude bits (only possible for
/// BLISS-B0) do not survive the nibble packing.
pub fn decode_bytes(kind: Kind, bytes: &[u8], bit_len: usize) -> Result<Vec<u8>> {
    Ok(decode(kind, bytes, bit_len)?.into_iter().map(symbol_to_byte).collect())
}

fn symbol_from_byte(b: u8) -> JointSymbol {
    let low = i32::from(b & 0x0f);
    let z2 = if low & 0x08 != 0 { -(low & 0x07) } else { low };
    JointSymbol { z1_high: b >> 4, z2 }
}

fn symbol_to_byte(symbol: JointSymbol) -> u8 {
    let low = if symbol.z2 < 0 { (-symbol.z2) | 0x08 } else { symbol.z2 };
    ((symbol.z1_high & 0x0f) << 4) | (low & 0x0f) as u8
}
