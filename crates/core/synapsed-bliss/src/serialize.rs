//! Wire format of public keys and signatures
//!
//! Both formats are bit-packed LSB-first with a 3-bit kind tag first and
//! zero padding up to a fixed per-kind size.
//!
//! Public key: `kind` ‖ `n` normal-domain coefficients of `a`, `q_bits`
//! each.
//!
//! Signature: `kind` ‖ payload bit length (`n_bits + 3`) ‖ Huffman payload
//! ‖ per coefficient the sign bit and low eight bits of `|z1|` ‖ `kappa`
//! challenge indices of `n_bits` each. The payload carries `|z1| >> 8`
//! together with `z2`.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::huffman::{self, JointSymbol};
use crate::keys::PublicKey;
use crate::ntt::NttEngine;
use crate::params::{Kind, ParamSet};
use crate::signature::Signature;
use crate::traits::Serializable;

const KIND_BITS: u32 = 3;

/// Serialize a public key into exactly `pk_size(kind)` bytes
pub fn encode_public_key(pk: &PublicKey) -> Vec<u8> {
    let params = pk.kind.params();
    let a = NttEngine::new(params).inverse(&pk.a);

    let mut writer = BitWriter::with_capacity(params.pk_size());
    writer.write(u64::from(pk.kind.as_u8()), KIND_BITS);
    for &x in a.iter() {
        writer.write(x as u64, params.q_bits);
    }
    let mut out = writer.finish();
    out.resize(params.pk_size(), 0);
    out
}

/// Parse a public key
pub fn decode_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let kind = peek_kind(bytes)?;
    let params = kind.params();
    expect_len(bytes, params.pk_size())?;

    let mut reader = BitReader::new(bytes);
    reader.read(KIND_BITS)?;
    let mut a = Vec::with_capacity(params.n);
    for _ in 0..params.n {
        let x = reader.read(params.q_bits)? as i32;
        if x >= params.q {
            return Err(Error::OutOfBounds("public key coefficient not below q"));
        }
        a.push(x);
    }
    if !reader.remaining_bits_are_zero() {
        return Err(Error::Malformed("nonzero padding after public key"));
    }

    let a = NttEngine::new(params).forward(&a);
    Ok(PublicKey { kind, a })
}

/// Serialize a signature into exactly `sig_size(kind)` bytes
///
/// # Errors
///
/// [`Error::SignatureTooLarge`] if the compressed coefficients exceed the
/// room in the layout, [`Error::Malformed`] if they hit one of the Huffman
/// codewords that cannot be decoded back.
pub fn encode_signature(sig: &Signature) -> Result<Vec<u8>> {
    let kind = sig.kind;
    let params = kind.params();

    let symbols: Vec<JointSymbol> = sig
        .z1
        .iter()
        .zip(&sig.z2)
        .map(|(&z1, &z2)| JointSymbol { z1_high: (z1.unsigned_abs() >> 8) as u8, z2 })
        .collect();
    let (payload, bit_len) = huffman::encode(kind, &symbols)?;

    let limit = payload_limit(params);
    if bit_len > limit {
        tracing::debug!(%kind, bit_len, limit, "compressed signature too large");
        return Err(Error::SignatureTooLarge { bits: bit_len, limit });
    }
    if huffman::decode(kind, &payload, bit_len).ok().as_deref() != Some(symbols.as_slice()) {
        tracing::warn!(%kind, "signature hits an undecodable Huffman codeword");
        return Err(Error::Malformed("signature coefficients have no decodable Huffman code"));
    }

    let mut writer = BitWriter::with_capacity(params.sig_size());
    writer.write(u64::from(kind.as_u8()), KIND_BITS);
    writer.write(bit_len as u64, params.n_bits + 3);
    writer.write_bytes(&payload);
    for &z1 in &sig.z1 {
        writer.write(u64::from(z1 < 0), 1);
        writer.write(u64::from(z1.unsigned_abs() & 0xff), 8);
    }
    for &c in &sig.c {
        writer.write(u64::from(c), params.n_bits);
    }
    let mut out = writer.finish();
    debug_assert!(out.len() <= params.sig_size());
    out.resize(params.sig_size(), 0);
    Ok(out)
}

/// Parse a signature
///
/// Besides the layout this checks that the challenge indices are distinct
/// and below `n` and that `(z1, z2)` satisfy the norm bounds.
pub fn decode_signature(bytes: &[u8]) -> Result<Signature> {
    let kind = peek_kind(bytes)?;
    let params = kind.params();
    expect_len(bytes, params.sig_size())?;

    let mut reader = BitReader::new(bytes);
    reader.read(KIND_BITS)?;
    let bit_len = reader.read(params.n_bits + 3)? as usize;
    if bit_len > payload_limit(params) {
        return Err(Error::Malformed("declared payload length exceeds the layout"));
    }
    let payload = reader.read_bytes((bit_len + 7) / 8)?;
    let symbols = huffman::decode(kind, &payload, bit_len)?;

    let mut z1 = Vec::with_capacity(params.n);
    let mut z2 = Vec::with_capacity(params.n);
    for symbol in &symbols {
        let negative = reader.read(1)? == 1;
        let low = reader.read(8)? as i32;
        let magnitude = (i32::from(symbol.z1_high) << 8) | low;
        if negative && magnitude == 0 {
            return Err(Error::Malformed("negative zero in z1"));
        }
        z1.push(if negative { -magnitude } else { magnitude });
        z2.push(symbol.z2);
    }

    let mut c = Vec::with_capacity(params.kappa);
    for _ in 0..params.kappa {
        c.push(reader.read(params.n_bits)? as u32);
    }
    if !reader.remaining_bits_are_zero() {
        return Err(Error::Malformed("nonzero padding after signature"));
    }

    Signature::from_parts(kind, z1, z2, c)
}

/// Largest Huffman payload, in bits, the signature layout can carry
///
/// Bounded by the width of the length field and by the bytes left in
/// `sig_size` after the fixed-width fields.
pub fn payload_limit(params: &ParamSet) -> usize {
    let fixed = KIND_BITS as usize
        + (params.n_bits + 3) as usize
        + 9 * params.n
        + params.kappa * params.n_bits as usize;
    let room = (params.sig_size() * 8).saturating_sub(fixed) / 8 * 8;
    let field = (1usize << (params.n_bits + 3)) - 1;
    room.min(field)
}

fn peek_kind(bytes: &[u8]) -> Result<Kind> {
    let first = bytes.first().ok_or(Error::Malformed("empty input"))?;
    Kind::try_from(first & 0x07)
}

fn expect_len(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(Error::InvalidLength { expected, actual: bytes.len() });
    }
    Ok(())
}

impl Serializable for PublicKey {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(encode_public_key(self))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_public_key(bytes)
    }
}

impl Serializable for Signature {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        encode_signature(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_signature(bytes)
    }
}

#[cfg(feature = "std")]
impl crate::traits::HexEncodable for PublicKey {}

#[cfg(feature = "std")]
impl crate::traits::HexEncodable for Signature {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlissConfig;
    use crate::entropy::SEED_BYTES;
    use crate::keys::PrivateKey;

    #[test]
    fn payload_limits() {
        assert_eq!(payload_limit(Kind::B0.params()), 2047);
        for kind in Kind::ALL {
            let p = kind.params();
            let limit = payload_limit(p);
            assert!(limit > 4 * p.n, "{kind}: {limit}");
            assert!(limit < 1 << (p.n_bits + 3));
        }
    }

    #[test]
    fn public_key_layout() {
        let sk = PrivateKey::generate(Kind::B2, &[8; SEED_BYTES]).unwrap();
        let pk = sk.public_key();
        let bytes = encode_public_key(&pk);
        assert_eq!(bytes.len(), Kind::B2.params().pk_size());
        assert_eq!(bytes[0] & 0x07, 2);
        assert_eq!(decode_public_key(&bytes).unwrap(), pk);
    }

    #[test]
    fn public_key_rejects_padding_and_range() {
        let sk = PrivateKey::generate(Kind::B0, &[8; SEED_BYTES]).unwrap();
        let mut bytes = encode_public_key(&sk.public_key());
        // 3 + 256 * 13 bits leave five padding bits in the last byte
        *bytes.last_mut().unwrap() |= 0x80;
        assert_eq!(decode_public_key(&bytes), Err(Error::Malformed("nonzero padding after public key")));

        let mut bytes = vec![0u8; Kind::B0.params().pk_size()];
        // first coefficient = 8191 >= q
        bytes[0] = 0xf8;
        bytes[1] = 0xff;
        assert!(matches!(decode_public_key(&bytes), Err(Error::OutOfBounds(_))));
    }

    #[test]
    fn signature_layout_round_trip() {
        for kind in [Kind::B0, Kind::B2, Kind::B4] {
            let sk = PrivateKey::generate(kind, &[kind.as_u8() + 20; SEED_BYTES]).unwrap();
            let sig = sk.sign_with_seed(b"layout", &[1; SEED_BYTES], &BlissConfig::default()).unwrap();
            let bytes = encode_signature(&sig).unwrap();
            assert_eq!(bytes.len(), kind.params().sig_size());
            assert_eq!(decode_signature(&bytes).unwrap(), sig);
        }
    }

    #[test]
    fn truncated_codeword_is_not_emitted() {
        // (|z1| >> 8, z2) = (2, 16) is a truncated B0 codeword
        let p = Kind::B0.params();
        let mut z1 = vec![0; p.n];
        let mut z2 = vec![0; p.n];
        z1[10] = 512;
        z2[10] = 16;
        let c: Vec<u32> = (0..p.kappa as u32).collect();
        let sig = Signature::from_parts(Kind::B0, z1, z2, c).unwrap();
        assert!(matches!(encode_signature(&sig), Err(Error::Malformed(_))));
    }

    #[test]
    fn wrong_length_and_kind() {
        assert_eq!(decode_signature(&[]), Err(Error::Malformed("empty input")));
        assert_eq!(decode_signature(&[0x07; 10]), Err(Error::InvalidKind(7)));
        assert_eq!(
            decode_signature(&[0x01; 10]),
            Err(Error::InvalidLength { expected: Kind::B1.params().sig_size(), actual: 10 })
        );
        assert!(matches!(decode_public_key(&[0x05]), Err(Error::InvalidKind(5))));
    }

    #[test]
    fn negative_zero_is_rejected() {
        let p = Kind::B2.params();
        let z = vec![0; p.n];
        let c: Vec<u32> = (0..p.kappa as u32).collect();
        let sig = Signature::from_parts(Kind::B2, z.clone(), z, c).unwrap();
        let mut bytes = encode_signature(&sig).unwrap();
        assert_eq!(decode_signature(&bytes).unwrap(), sig);

        let bit_len = BitReader::new(&bytes).read(3 + p.n_bits + 3).unwrap() >> 3;
        let sign_bit = 3 + (p.n_bits + 3) as usize + ((bit_len as usize + 7) / 8) * 8;
        bytes[sign_bit / 8] |= 1 << (sign_bit % 8);
        assert_eq!(decode_signature(&bytes), Err(Error::Malformed("negative zero in z1")));
    }
}
