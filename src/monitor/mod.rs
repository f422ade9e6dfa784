//! Per-cycle monitoring queries.
//!
//! Turns the raw, index-based leader schedule and the unfiltered
//! vote-account snapshot into validator-keyed data for the identities
//! being monitored. Each function issues its queries through a
//! [`Provider`](crate::provider::Provider) and composes with the others
//! at the call site; nothing here caches between calls.

mod accounts;
mod collect;
mod schedule;

pub use accounts::{fetch_balances, resolve_vote_identities};
pub use collect::combine_unique;
pub use schedule::{fetch_trimmed_leader_schedule, select_in_range};
