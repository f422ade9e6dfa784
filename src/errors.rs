//! Error types for monitoring queries.
//!
//! Distinguishes failures of the underlying query transport from
//! identity-resolution failures, so callers can treat a failed poll
//! cycle differently from a misconfigured validator set.

use thiserror::Error;

/// Errors produced by the monitoring core.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The underlying query capability failed: network, deserialization,
    /// or a cancelled request. Never retried here.
    #[error("{op} query failed")]
    Transport {
        /// Name of the operation that failed.
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A monitored node identity has no vote account in the snapshot.
    #[error("no vote account found for node {identity}")]
    UnresolvedVoteAccount {
        /// The node identity that could not be resolved.
        identity: String,
    },
}

impl MonitorError {
    pub(crate) fn transport(op: &'static str, source: anyhow::Error) -> Self {
        MonitorError::Transport { op, source }
    }

    /// Returns whether the error came from the query transport rather
    /// than from the data itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, MonitorError::Transport { .. })
    }
}
