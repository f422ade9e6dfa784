//! Deterministic in-memory [`Provider`] for tests.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::{Commitment, EpochInfo, LeaderSchedule, Provider, Slot, VoteAccountSet};

/// Canned responses for each query. A missing entry makes the
/// corresponding call fail the way a transport error would.
#[derive(Default)]
pub(crate) struct StubProvider {
    pub epoch_info: Option<EpochInfo>,
    pub leader_schedule: Option<LeaderSchedule>,
    pub vote_accounts: Option<VoteAccountSet>,
    pub balances: HashMap<String, f64>,
}

#[async_trait]
impl Provider for StubProvider {
    async fn get_epoch_info(&self, _commitment: Commitment) -> Result<EpochInfo> {
        self.epoch_info.ok_or_else(|| anyhow!("stub: no epoch info"))
    }

    async fn get_leader_schedule(
        &self,
        _commitment: Commitment,
        _slot: Slot,
    ) -> Result<LeaderSchedule> {
        self.leader_schedule
            .clone()
            .ok_or_else(|| anyhow!("stub: no leader schedule"))
    }

    async fn get_vote_accounts(
        &self,
        _commitment: Commitment,
        _vote_pubkey: Option<&str>,
    ) -> Result<VoteAccountSet> {
        self.vote_accounts
            .clone()
            .ok_or_else(|| anyhow!("stub: no vote accounts"))
    }

    async fn get_balance(&self, _commitment: Commitment, address: &str) -> Result<f64> {
        self.balances
            .get(address)
            .copied()
            .ok_or_else(|| anyhow!("stub: no balance for {address}"))
    }
}
