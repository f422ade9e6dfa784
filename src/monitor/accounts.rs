//! Vote-account resolution and balance collection.

use crate::errors::MonitorError;
use crate::provider::{BalanceMap, Commitment, Provider};
use std::collections::HashMap;

/// Resolves the vote identity for each of the given node identities.
///
/// The vote-account snapshot is fetched once and both halves are indexed
/// by node identity; if a node shows up as both current and delinquent,
/// the current entry wins. Vote identities come back in input order,
/// one per requested node.
///
/// # Errors
///
/// Returns [`MonitorError::Transport`] if the snapshot query fails, and
/// [`MonitorError::UnresolvedVoteAccount`] for the first node identity
/// with no usable vote account. Every monitored validator is expected to
/// have exactly one vote account, so an unresolved identity is a
/// configuration problem for the caller to surface, not something to
/// skip over.
pub async fn resolve_vote_identities(
    provider: &dyn Provider,
    commitment: Commitment,
    node_identities: &[String],
) -> Result<Vec<String>, MonitorError> {
    let vote_accounts = provider
        .get_vote_accounts(commitment, None)
        .await
        .map_err(|source| MonitorError::transport("get_vote_accounts", source))?;

    // Delinquent entries first, so that a current entry overwrites when
    // a node appears in both halves of the snapshot.
    let mut by_node: HashMap<&str, &str> = HashMap::new();
    for account in vote_accounts
        .delinquent
        .iter()
        .chain(&vote_accounts.current)
    {
        by_node.insert(&account.node_pubkey, &account.vote_pubkey);
    }

    let mut vote_identities = Vec::with_capacity(node_identities.len());
    for identity in node_identities {
        match by_node.get(identity.as_str()) {
            Some(vote_pubkey) if !vote_pubkey.is_empty() => {
                vote_identities.push((*vote_pubkey).to_string());
            }
            _ => {
                return Err(MonitorError::UnresolvedVoteAccount {
                    identity: identity.clone(),
                })
            }
        }
    }

    Ok(vote_identities)
}

/// Fetches the SOL balance of each address, one query per address in
/// input order.
///
/// # Errors
///
/// Returns [`MonitorError::Transport`] on the first failed query; no
/// partial map is returned.
pub async fn fetch_balances(
    provider: &dyn Provider,
    addresses: &[String],
) -> Result<BalanceMap, MonitorError> {
    let mut balances = BalanceMap::with_capacity(addresses.len());
    for address in addresses {
        let balance = provider
            .get_balance(Commitment::Confirmed, address)
            .await
            .map_err(|source| MonitorError::transport("get_balance", source))?;
        balances.insert(address.clone(), balance);
    }

    Ok(balances)
}
