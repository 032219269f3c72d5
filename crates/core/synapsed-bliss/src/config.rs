//! Run-time configuration for key generation and signing

use crate::entropy::SamplingMode;
use crate::hash::HashAlgorithm;

/// Entropy and restart settings
///
/// The default uses BLAKE2b-512 with fast bit sampling and never gives up
/// on a signature. [`BlissConfig::reference`] switches to SHA3-512 with
/// bit-by-bit sampling, which is the mode whose output is reproducible
/// across implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlissConfig {
    /// Hash driving the entropy pool
    pub entropy_hash: HashAlgorithm,
    /// How multi-bit draws are taken from the pool
    pub sampling: SamplingMode,
    /// Give up signing after this many restarts
    pub max_restarts: Option<u64>,
}

impl BlissConfig {
    /// SHA3-512 entropy with reference bit sampling
    pub fn reference() -> Self {
        Self {
            entropy_hash: HashAlgorithm::Sha3_512,
            sampling: SamplingMode::Reference,
            max_restarts: None,
        }
    }

    /// Cap the number of signing restarts
    pub fn with_max_restarts(mut self, limit: u64) -> Self {
        self.max_restarts = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BlissConfig::default();
        assert_eq!(config.entropy_hash, HashAlgorithm::Blake2b512);
        assert_eq!(config.sampling, SamplingMode::Fast);
        assert_eq!(config.max_restarts, None);
        assert_eq!(BlissConfig::reference().with_max_restarts(3).max_restarts, Some(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let config: BlissConfig = serde_json::from_str(r#"{"sampling":"Reference"}"#).unwrap();
        assert_eq!(config.sampling, SamplingMode::Reference);
        assert_eq!(config.entropy_hash, HashAlgorithm::Blake2b512);
    }
}
