//! solwatch
//!
//! Core leader-schedule and identity-resolution logic for Solana
//! validator monitoring. Turns the raw, index-based leader schedule and
//! the unfiltered vote-account snapshot into validator-keyed,
//! absolute-slot data for the identities being monitored.
//!
//! ## Features
//!
//! - Leader schedule trimming to the monitored validator set, with
//!   epoch-relative slot indices converted to absolute slots
//! - Inclusive slot-range selection over a schedule
//! - Node identity -> vote identity resolution from the cluster's
//!   vote-account snapshot
//! - Account balance collection in SOL
//! - Order-preserving set union for building identity lists
//!
//! All queries go through the [`Provider`] trait, so production code runs
//! against a real RPC node while tests use deterministic doubles.
//!
//! ## Usage
//!
//! ```no_run
//! use solwatch::{fetch_trimmed_leader_schedule, Commitment, Provider, RpcProvider};
//!
//! # async fn upcoming_slots() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = RpcProvider::new("https://api.mainnet-beta.solana.com");
//! let epoch = provider.get_epoch_info(Commitment::Confirmed).await?;
//! let identities = vec!["7Np41oeYqPefeNQEHSv1UDhYrehxin3NStELsSKCT4K2".to_string()];
//!
//! let schedule = fetch_trimmed_leader_schedule(
//!     &provider,
//!     &identities,
//!     epoch.absolute_slot,
//!     epoch.first_slot(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]

mod errors;
pub mod monitor;
pub mod provider;

// Re-export main types
pub use errors::MonitorError;
pub use monitor::{
    combine_unique, fetch_balances, fetch_trimmed_leader_schedule, resolve_vote_identities,
    select_in_range,
};
pub use provider::{
    AbsoluteSlotSchedule, BalanceMap, Commitment, EpochInfo, LeaderSchedule, Provider,
    RpcProvider, Slot, VoteAccount, VoteAccountSet,
};
