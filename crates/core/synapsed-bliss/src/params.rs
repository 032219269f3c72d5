//! BLISS-B parameter sets
//!
//! Five fixed variants. B0 works in `Z_7681[x]/(x^256 + 1)` and is meant for
//! testing only; B1 through B4 work in `Z_12289[x]/(x^512 + 1)` and trade
//! signature size against security and repetition rate.

pub mod roots;

use crate::error::{Error, Result};
use core::fmt;

/// Parameter set selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Kind {
    /// Toy parameters, `n = 256`, `q = 7681`
    B0 = 0,
    /// 128-bit security, smallest repetition rate
    B1 = 1,
    /// 128-bit security, smaller signatures
    B2 = 2,
    /// 160-bit security
    B3 = 3,
    /// 192-bit security
    B4 = 4,
}

impl Kind {
    /// All parameter sets in kind order
    pub const ALL: [Kind; 5] = [Kind::B0, Kind::B1, Kind::B2, Kind::B3, Kind::B4];

    /// The parameter record for this kind
    pub fn params(self) -> &'static ParamSet {
        ParamSet::get(self)
    }

    /// Wire value of this kind
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Kind::B0),
            1 => Ok(Kind::B1),
            2 => Ok(Kind::B2),
            3 => Ok(Kind::B3),
            4 => Ok(Kind::B4),
            other => Err(Error::InvalidKind(other)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BLISS-B{}", self.as_u8())
    }
}

/// Immutable parameter record of one BLISS-B variant
#[derive(Debug, Clone, Copy)]
pub struct ParamSet {
    /// Variant this record describes
    pub kind: Kind,
    /// Field modulus
    pub q: i32,
    /// Bits needed for a coefficient in `[0, q)`
    pub q_bits: u32,
    /// Ring dimension
    pub n: usize,
    /// `log2(n)`
    pub n_bits: u32,
    /// Bits dropped from `v` when compressing
    pub d: u32,
    /// Modulus of the compressed vector, `floor(2q / 2^d)`
    pub mod_p: i32,
    /// `2q`
    pub q2: i32,
    /// `1 / (q + 2) mod 2q`
    pub one_q2: i32,
    /// Number of challenge indices
    pub kappa: usize,
    /// Infinity-norm bound on `z1` and `z2 * 2^d`
    pub b_inf: i32,
    /// Bits of a sign-magnitude `z1` coefficient
    pub b_bits: u32,
    /// Squared L2-norm bound
    pub b_l2: i64,
    /// Number of `+-1` coefficients in a secret polynomial
    pub nz1: usize,
    /// Number of `+-2` coefficients in a secret polynomial
    pub nz2: usize,
    /// Standard deviation of the Gaussian sampler
    pub sigma: u32,
    /// Rejection bound on `||S c||^2`
    pub big_m: u32,
    /// Expected number of signing attempts
    pub repetition_rate: f64,
    /// NTT forward twiddles
    pub w: &'static [i32],
    /// NTT inverse scaling factors
    pub r: &'static [i32],
    /// Rows of the Bernoulli table
    pub ell: u32,
    /// Bits of precision per Bernoulli table row
    pub precision: u32,
}

static PARAMS: [ParamSet; 5] = [
    ParamSet {
        kind: Kind::B0,
        q: 7681,
        q_bits: 13,
        n: 256,
        n_bits: 8,
        d: 5,
        mod_p: 480,
        q2: 15362,
        one_q2: 3841,
        kappa: 12,
        b_inf: 530,
        b_bits: 11,
        b_l2: 2492 * 2492,
        nz1: 141,
        nz2: 39,
        sigma: 100,
        big_m: 17928,
        repetition_rate: 2.44,
        w: &roots::W_7681_256,
        r: &roots::R_7681_256,
        ell: 19,
        precision: 64,
    },
    ParamSet {
        kind: Kind::B1,
        q: 12289,
        q_bits: 14,
        n: 512,
        n_bits: 9,
        d: 10,
        mod_p: 24,
        q2: 24578,
        one_q2: 6145,
        kappa: 23,
        b_inf: 2100,
        b_bits: 13,
        b_l2: 12872 * 12872,
        nz1: 154,
        nz2: 0,
        sigma: 215,
        big_m: 17825,
        repetition_rate: 1.21,
        w: &roots::W_12289_512,
        r: &roots::R_12289_512,
        ell: 21,
        precision: 64,
    },
    ParamSet {
        kind: Kind::B2,
        q: 12289,
        q_bits: 14,
        n: 512,
        n_bits: 9,
        d: 10,
        mod_p: 24,
        q2: 24578,
        one_q2: 6145,
        kappa: 23,
        b_inf: 1563,
        b_bits: 12,
        b_l2: 11074 * 11074,
        nz1: 154,
        nz2: 0,
        sigma: 107,
        big_m: 17825,
        repetition_rate: 2.18,
        w: &roots::W_12289_512,
        r: &roots::R_12289_512,
        ell: 19,
        precision: 64,
    },
    ParamSet {
        kind: Kind::B3,
        q: 12289,
        q_bits: 14,
        n: 512,
        n_bits: 9,
        d: 9,
        mod_p: 48,
        q2: 24578,
        one_q2: 6145,
        kappa: 30,
        b_inf: 1760,
        b_bits: 12,
        b_l2: 10206 * 10206,
        nz1: 216,
        nz2: 16,
        sigma: 250,
        big_m: 42270,
        repetition_rate: 1.40,
        w: &roots::W_12289_512,
        r: &roots::R_12289_512,
        ell: 21,
        precision: 64,
    },
    ParamSet {
        kind: Kind::B4,
        q: 12289,
        q_bits: 14,
        n: 512,
        n_bits: 9,
        d: 8,
        mod_p: 96,
        q2: 24578,
        one_q2: 6145,
        kappa: 39,
        b_inf: 1613,
        b_bits: 12,
        b_l2: 9901 * 9901,
        nz1: 231,
        nz2: 31,
        sigma: 271,
        big_m: 69576,
        repetition_rate: 1.61,
        w: &roots::W_12289_512,
        r: &roots::R_12289_512,
        ell: 22,
        precision: 64,
    },
];

impl ParamSet {
    /// Parameter record for `kind`
    pub fn get(kind: Kind) -> &'static ParamSet {
        &PARAMS[kind as usize]
    }

    /// Bits of a sign-magnitude `z2` coefficient
    pub fn z2_bits(&self) -> u32 {
        self.b_bits - self.d
    }

    /// Largest `|z2|` allowed by the infinity-norm bound
    pub fn z2_max(&self) -> i32 {
        self.b_inf >> self.d
    }

    /// Serialized public key length in bytes
    pub fn pk_size(&self) -> usize {
        self.q_bits as usize * self.n / 8 + 1
    }

    /// Serialized signature length in bytes
    pub fn sig_size(&self) -> usize {
        let nbits = self.b_bits as usize * self.n
            + self.z2_bits() as usize * self.n
            + self.kappa * self.n_bits as usize
            + 3;
        if nbits % 8 == 0 {
            nbits / 8 + 1
        } else {
            nbits / 8 + 2
        }
    }
}

/// Serialized public key length for `kind`
pub fn pk_size(kind: Kind) -> usize {
    kind.params().pk_size()
}

/// Serialized signature length for `kind`
pub fn sig_size(kind: Kind) -> usize {
    kind.params().sig_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_match_ring_dimension() {
        for kind in Kind::ALL {
            let p = kind.params();
            assert_eq!(p.kind, kind);
            assert_eq!(p.w.len(), p.n);
            assert_eq!(p.r.len(), p.n);
            assert_eq!(1usize << p.n_bits, p.n);
            assert!(p.d > 0 && p.d < 31);
            assert_eq!(p.q2, 2 * p.q);
            assert_eq!(p.mod_p, p.q2 >> p.d);
            assert_eq!((p.one_q2 as i64 * (p.q as i64 + 2)) % p.q2 as i64, 1);
            assert!(p.w.iter().chain(p.r.iter()).all(|&x| (0..p.q).contains(&x)));
        }
    }

    #[test]
    fn wire_sizes() {
        assert_eq!(pk_size(Kind::B0), 417);
        assert_eq!(pk_size(Kind::B1), 897);
        assert_eq!(sig_size(Kind::B0), 558);
        assert_eq!(sig_size(Kind::B1), 1052);
        assert_eq!(sig_size(Kind::B2), 924);
        assert_eq!(sig_size(Kind::B3), 996);
        assert_eq!(sig_size(Kind::B4), 1070);
    }

    #[test]
    fn kind_from_wire_value() {
        assert_eq!(Kind::try_from(3).ok(), Some(Kind::B3));
        assert_eq!(Kind::try_from(5), Err(Error::InvalidKind(5)));
        assert_eq!(Kind::B2.to_string(), "BLISS-B2");
    }
}
