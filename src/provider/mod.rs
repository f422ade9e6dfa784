//! Query capability consumed by the monitoring core.
//!
//! The [`Provider`] trait abstracts the handful of RPC queries the core
//! issues, so production code can run against a real node
//! ([`RpcProvider`]) while tests use deterministic in-memory doubles.

mod rpc;
#[cfg(test)]
pub(crate) mod stub;

pub use rpc::RpcProvider;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

/// Type alias for slot numbers.
pub type Slot = u64;

/// Raw leader schedule as served by an RPC node: node identity ->
/// slot indices relative to the epoch's first slot.
pub type LeaderSchedule = HashMap<String, Vec<Slot>>;

/// Leader schedule keyed the same way, holding absolute slot numbers.
pub type AbsoluteSlotSchedule = HashMap<String, Vec<Slot>>;

/// Account address -> balance in SOL.
pub type BalanceMap = HashMap<String, f64>;

/// Consistency level at which a query result is considered valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commitment {
    /// Observed by the node, may still be rolled back.
    Processed,
    /// Voted on by a supermajority of the cluster.
    Confirmed,
    /// Rooted and irreversible.
    Finalized,
}

/// A single vote account entry from the cluster snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteAccount {
    /// Identity of the validator's consensus-participating node.
    pub node_pubkey: String,
    /// Identity of the account the validator votes with.
    pub vote_pubkey: String,
}

/// Snapshot of the cluster's vote accounts, split into voting and
/// delinquent halves.
#[derive(Debug, Clone, Default)]
pub struct VoteAccountSet {
    pub current: Vec<VoteAccount>,
    pub delinquent: Vec<VoteAccount>,
}

/// Epoch progress as reported by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochInfo {
    pub epoch: u64,
    /// Current absolute slot.
    pub absolute_slot: Slot,
    /// Position of the current slot within the epoch.
    pub slot_index: Slot,
    pub slots_in_epoch: Slot,
}

impl EpochInfo {
    /// First absolute slot of the epoch.
    pub fn first_slot(&self) -> Slot {
        self.absolute_slot - self.slot_index
    }

    /// Last absolute slot of the epoch.
    pub fn last_slot(&self) -> Slot {
        self.first_slot() + self.slots_in_epoch - 1
    }
}

/// The RPC queries the monitoring core issues.
///
/// Each method is a single network round trip. A request is cancelled by
/// dropping the returned future; no timeouts are applied here, deadline
/// policy belongs to whoever owns the provider.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetches epoch progress for the cluster.
    async fn get_epoch_info(&self, commitment: Commitment) -> Result<EpochInfo>;

    /// Fetches the full leader schedule for the epoch containing `slot`.
    async fn get_leader_schedule(&self, commitment: Commitment, slot: Slot)
        -> Result<LeaderSchedule>;

    /// Fetches the vote-account snapshot, optionally filtered to a single
    /// vote account.
    async fn get_vote_accounts(
        &self,
        commitment: Commitment,
        vote_pubkey: Option<&str>,
    ) -> Result<VoteAccountSet>;

    /// Fetches an account balance in SOL.
    async fn get_balance(&self, commitment: Commitment, address: &str) -> Result<f64>;
}
