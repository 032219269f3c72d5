//! Observability for the signing loop
//!
//! Signing is a rejection loop whose cost depends on how often candidates
//! get thrown away. [`SigningStats`] records that per call and every restart
//! is traced with its [`RestartReason`]. Timing uses `std::time` and is
//! not tied to the `std` feature.

use core::fmt;
use std::time::{Duration, Instant};

/// Stage of the signing state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignStage {
    /// Drawing the Gaussian masking vectors `y1`, `y2`
    #[default]
    Sample,
    /// Reducing `S c` with the greedy heuristic
    Reduce,
    /// Rejection on `||S c||^2`
    AcceptanceCheck1,
    /// Choosing the sign of `S c`
    SignChoice,
    /// Rejection on `<z, S c>`
    AcceptanceCheck2,
    /// Infinity and L2 norm bounds on `(z1, z2)`
    BoundsCheck,
    /// Signature accepted
    Done,
}

impl fmt::Display for SignStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignStage::Sample => "sample",
            SignStage::Reduce => "reduce",
            SignStage::AcceptanceCheck1 => "acceptance-1",
            SignStage::SignChoice => "sign-choice",
            SignStage::AcceptanceCheck2 => "acceptance-2",
            SignStage::BoundsCheck => "bounds",
            SignStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Why a signing attempt was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestartReason {
    /// `ber_exp(M - ||S c||^2)` rejected
    NormRejected,
    /// `ber_cosh(<z, S c>)` rejected
    CoshRejected,
    /// `max |z1|` reached `b_inf`
    Z1InfinityNorm,
    /// `max |z2 * 2^d|` exceeded `b_inf`
    Z2InfinityNorm,
    /// `||z1||^2 + ||z2 * 2^d||^2` exceeded `b_l2`
    L2Norm,
}

impl RestartReason {
    /// Stage that triggered this restart
    pub fn stage(self) -> SignStage {
        match self {
            RestartReason::NormRejected => SignStage::AcceptanceCheck1,
            RestartReason::CoshRejected => SignStage::AcceptanceCheck2,
            RestartReason::Z1InfinityNorm | RestartReason::Z2InfinityNorm | RestartReason::L2Norm => {
                SignStage::BoundsCheck
            }
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Per-call signing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningStats {
    /// Attempts made, including the accepted one
    pub attempts: u64,
    restarts: [u64; 5],
    stage: SignStage,
    /// Wall-clock time spent in the signing loop
    pub elapsed: Duration,
}

impl SigningStats {
    /// Total restarts
    pub fn restarts(&self) -> u64 {
        self.restarts.iter().sum()
    }

    /// Restarts attributed to `reason`
    pub fn restarts_for(&self, reason: RestartReason) -> u64 {
        self.restarts[reason.slot()]
    }

    /// Last stage the signing loop entered; [`SignStage::Done`] once a
    /// signature has been produced
    pub fn stage(&self) -> SignStage {
        self.stage
    }

    pub(crate) fn enter(&mut self, stage: SignStage) {
        self.stage = stage;
        tracing::trace!(attempt = self.attempts, %stage, "signing stage");
    }

    pub(crate) fn record_restart(&mut self, reason: RestartReason) {
        self.restarts[reason.slot()] += 1;
        tracing::trace!(
            attempt = self.attempts,
            stage = %reason.stage(),
            ?reason,
            "signing attempt rejected"
        );
    }
}

/// Times one signing call
#[derive(Debug)]
pub(crate) struct SignTimer {
    start: Instant,
}

impl SignTimer {
    pub(crate) fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub(crate) fn finish(self, stats: &mut SigningStats) {
        stats.elapsed = self.start.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restarts_are_tallied_per_reason() {
        let mut stats = SigningStats::default();
        stats.record_restart(RestartReason::CoshRejected);
        stats.record_restart(RestartReason::CoshRejected);
        stats.record_restart(RestartReason::L2Norm);
        assert_eq!(stats.restarts(), 3);
        assert_eq!(stats.restarts_for(RestartReason::CoshRejected), 2);
        assert_eq!(stats.restarts_for(RestartReason::NormRejected), 0);
    }

    #[test]
    fn entering_a_stage_is_remembered() {
        let mut stats = SigningStats::default();
        assert_eq!(stats.stage(), SignStage::Sample);
        stats.attempts = 1;
        for stage in [SignStage::Reduce, SignStage::SignChoice, SignStage::Done] {
            stats.enter(stage);
            assert_eq!(stats.stage(), stage);
        }
        assert_eq!(stats.restarts(), 0);
    }

    #[test]
    fn reasons_map_to_stages() {
        assert_eq!(RestartReason::NormRejected.stage(), SignStage::AcceptanceCheck1);
        assert_eq!(RestartReason::Z2InfinityNorm.stage(), SignStage::BoundsCheck);
        assert_eq!(SignStage::AcceptanceCheck2.to_string(), "acceptance-2");
    }
}
