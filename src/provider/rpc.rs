//! Production [`Provider`] backed by a Solana JSON-RPC node.

use anyhow::{Context, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcGetVoteAccountsConfig;
use solana_client::rpc_response::RpcVoteAccountInfo;
use solana_commitment_config::CommitmentConfig;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;

use super::{Commitment, EpochInfo, LeaderSchedule, Provider, Slot, VoteAccount, VoteAccountSet};

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

/// [`Provider`] implementation over the nonblocking Solana RPC client.
pub struct RpcProvider {
    client: RpcClient,
}

impl RpcProvider {
    /// Creates a provider for the given RPC endpoint URL.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            client: RpcClient::new(rpc_url.into()),
        }
    }

    /// Wraps an already configured RPC client.
    pub fn from_client(client: RpcClient) -> Self {
        Self { client }
    }
}

fn to_vote_accounts(accounts: Vec<RpcVoteAccountInfo>) -> Vec<VoteAccount> {
    accounts
        .into_iter()
        .map(|account| VoteAccount {
            node_pubkey: account.node_pubkey,
            vote_pubkey: account.vote_pubkey,
        })
        .collect()
}

#[async_trait]
impl Provider for RpcProvider {
    async fn get_epoch_info(&self, commitment: Commitment) -> Result<EpochInfo> {
        let info = self
            .client
            .get_epoch_info_with_commitment(commitment.into())
            .await
            .context("getEpochInfo RPC request failed")?;

        Ok(EpochInfo {
            epoch: info.epoch,
            absolute_slot: info.absolute_slot,
            slot_index: info.slot_index,
            slots_in_epoch: info.slots_in_epoch,
        })
    }

    async fn get_leader_schedule(
        &self,
        commitment: Commitment,
        slot: Slot,
    ) -> Result<LeaderSchedule> {
        let schedule = self
            .client
            .get_leader_schedule_with_commitment(Some(slot), commitment.into())
            .await
            .context("getLeaderSchedule RPC request failed")?
            .with_context(|| format!("no leader schedule available for slot {slot}"))?;

        // Convert from the RPC index type to our slot type.
        Ok(schedule
            .into_iter()
            .map(|(identity, indices)| {
                let indices = indices.into_iter().map(|index| index as Slot).collect();
                (identity, indices)
            })
            .collect())
    }

    async fn get_vote_accounts(
        &self,
        commitment: Commitment,
        vote_pubkey: Option<&str>,
    ) -> Result<VoteAccountSet> {
        let config = RpcGetVoteAccountsConfig {
            vote_pubkey: vote_pubkey.map(str::to_string),
            commitment: Some(commitment.into()),
            ..RpcGetVoteAccountsConfig::default()
        };

        let status = self
            .client
            .get_vote_accounts_with_config(config)
            .await
            .context("getVoteAccounts RPC request failed")?;

        Ok(VoteAccountSet {
            current: to_vote_accounts(status.current),
            delinquent: to_vote_accounts(status.delinquent),
        })
    }

    async fn get_balance(&self, commitment: Commitment, address: &str) -> Result<f64> {
        let pubkey: Pubkey = address
            .parse()
            .with_context(|| format!("invalid account address {address}"))?;

        let lamports = self
            .client
            .get_balance_with_commitment(&pubkey, commitment.into())
            .await
            .context("getBalance RPC request failed")?
            .value;

        Ok(lamports as f64 / LAMPORTS_PER_SOL as f64)
    }
}
