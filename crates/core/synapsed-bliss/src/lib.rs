//! # Synapsed BLISS
//!
//! BLISS-B lattice-based signatures over `Z_q[x]/(x^n + 1)` with NTT
//! arithmetic, a discrete Gaussian sampler and a compact Huffman-coded
//! wire format.
//!
//! ## Overview
//!
//! BLISS-B (Bimodal Lattice Signature Scheme, variant B) signs by masking
//! a sparse secret with Gaussian noise and rejection sampling the result so
//! the signature distribution does not depend on the key. Five parameter
//! sets are supported:
//!
//! | Kind | n | q | Purpose |
//! |------|-----|-------|---------|
//! | B0 | 256 | 7681 | Toy parameters for testing |
//! | B1 | 512 | 12289 | 128-bit security, fastest |
//! | B2 | 512 | 12289 | 128-bit security, smallest signatures |
//! | B3 | 512 | 12289 | 160-bit security |
//! | B4 | 512 | 12289 | 192-bit security |
//!
//! ## Features
//!
//! - **Deterministic from a seed**: key generation and signing draw all
//!   randomness from a 64-byte seed through a hash-based entropy pool
//! - **Typed failures**: malformed input and failed verification are
//!   separate error variants
//! - **Secret hygiene**: secret polynomials and per-attempt intermediates
//!   are zeroized on drop
//! - **Pure Rust**: no unsafe code, no C dependencies
//!
//! ## Quick Start
//!
//! ```no_run
//! use synapsed_bliss::prelude::*;
//!
//! # fn main() -> std::result::Result<(), synapsed_bliss::Error> {
//! let (private_key, public_key) = generate_key(Kind::B1, &[42u8; 64])?;
//!
//! let message = b"Quantum-safe message";
//! let signature = sign(&private_key, message)?;
//! assert!(verify(&public_key, &signature, message)?);
//!
//! let wire = serialize_signature(&signature)?;
//! assert_eq!(wire.len(), Kind::B1.params().sig_size());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`api`]: free functions for the whole life cycle
//! - [`keys`]: key pairs and key generation
//! - [`signature`]: the signing loop and verification
//! - [`serialize`]: public key and signature wire formats
//! - [`params`]: the five parameter sets
//! - [`ntt`], [`sampler`], [`entropy`], [`huffman`]: building blocks
//!
//! ## Cargo Features
//!
//! - `std` (default): operating system randomness for
//!   [`PrivateKey::sign`](keys::PrivateKey::sign) and hex encoding helpers,
//!   plus the `std` features of the hash and RNG crates. The crate itself
//!   always links the standard library; signing statistics are timed with
//!   `std::time` whether or not this feature is on.
//! - `serde`: `Serialize`/`Deserialize` for [`params::Kind`] and
//!   [`config::BlissConfig`]
//!
//! ## Security Warning
//!
//! BLISS-B is known to be vulnerable to side-channel attacks on the
//! Gaussian sampler and on the rejection steps. This crate does not claim
//! constant-time behavior and has not been audited.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub use crate::error::{Error, Result};
pub use crate::keys::{PrivateKey, PublicKey};
pub use crate::signature::Signature;
pub use crate::traits::{SecureRandom, Serializable};

// Core modules
pub mod error;
pub mod params;
pub mod config;
pub mod traits;
pub mod secure_memory;
pub mod observability;

// Arithmetic and randomness
pub mod bitstream;
pub mod hash;
pub mod entropy;
pub mod sampler;
pub mod ntt;
pub mod poly;
pub mod random;

// Scheme
pub mod keys;
mod challenge;
pub mod signature;
pub mod huffman;
pub mod serialize;

// High-level API
pub mod api;

pub mod prelude {
    //! Common imports
    //!
    //! ```
    //! use synapsed_bliss::prelude::*;
    //! ```

    pub use crate::{
        api::{
            deserialize_public_key, deserialize_signature, generate_key, serialize_public_key,
            serialize_signature, sign_with_seed, verify,
        },
        config::BlissConfig,
        params::{pk_size, sig_size, Kind},
        Error, PrivateKey, PublicKey, Result, SecureRandom, Serializable, Signature,
    };

    #[cfg(feature = "std")]
    pub use crate::{api::sign, traits::HexEncodable};
}
