//! Leader-schedule trimming and absolute-slot conversion.

use log::warn;

use crate::errors::MonitorError;
use crate::provider::{AbsoluteSlotSchedule, Commitment, LeaderSchedule, Provider, Slot};

/// Restricts a schedule to the slots within `[start_slot, end_slot]`.
///
/// Every key of the input is retained, so callers can tell a validator
/// with no slots in range apart from one missing from the schedule
/// entirely. Per-key order is preserved. A reversed range yields an
/// empty sequence for every key, not an error.
pub fn select_in_range(
    schedule: &LeaderSchedule,
    start_slot: Slot,
    end_slot: Slot,
) -> LeaderSchedule {
    schedule
        .iter()
        .map(|(identity, slots)| {
            let selected = slots
                .iter()
                .copied()
                .filter(|slot| (start_slot..=end_slot).contains(slot))
                .collect();
            (identity.clone(), selected)
        })
        .collect()
}

/// Fetches the leader schedule, trimmed to the given identities and
/// adjusted to absolute slots.
///
/// The raw schedule holds slot indices relative to the epoch's first
/// slot; each index is shifted by `epoch_first_slot`, keeping the raw
/// order. The schedule is queried once, at `slot`, under confirmed
/// commitment. An identity without an entry in the raw schedule is
/// logged and omitted from the result; it has simply not been assigned
/// leader slots this epoch.
///
/// # Errors
///
/// Returns [`MonitorError::Transport`] if the schedule query fails.
pub async fn fetch_trimmed_leader_schedule(
    provider: &dyn Provider,
    identities: &[String],
    slot: Slot,
    epoch_first_slot: Slot,
) -> Result<AbsoluteSlotSchedule, MonitorError> {
    let schedule = provider
        .get_leader_schedule(Commitment::Confirmed, slot)
        .await
        .map_err(|source| MonitorError::transport("get_leader_schedule", source))?;

    let mut trimmed = AbsoluteSlotSchedule::with_capacity(identities.len());
    for identity in identities {
        match schedule.get(identity) {
            Some(indices) => {
                let absolute_slots = indices
                    .iter()
                    .map(|index| index + epoch_first_slot)
                    .collect();
                trimmed.insert(identity.clone(), absolute_slots);
            }
            None => warn!("no leader slots found for {identity}"),
        }
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::stub::StubProvider;

    fn schedule(entries: &[(&str, &[Slot])]) -> LeaderSchedule {
        entries
            .iter()
            .map(|(identity, slots)| (identity.to_string(), slots.to_vec()))
            .collect()
    }

    #[test]
    fn test_select_keeps_only_slots_in_range() {
        let input = schedule(&[("V1", &[10, 20, 30]), ("V2", &[15, 40])]);

        let selected = select_in_range(&input, 15, 30);

        assert_eq!(selected["V1"], vec![20, 30]);
        assert_eq!(selected["V2"], vec![15]);
    }

    #[test]
    fn test_select_retains_keys_with_no_slots_in_range() {
        let input = schedule(&[("V1", &[10]), ("V2", &[40])]);

        let selected = select_in_range(&input, 20, 30);

        assert_eq!(selected.len(), 2);
        assert!(selected["V1"].is_empty());
        assert!(selected["V2"].is_empty());
    }

    #[test]
    fn test_select_with_reversed_range_empties_every_key() {
        let input = schedule(&[("V1", &[10, 20]), ("V2", &[30])]);

        let selected = select_in_range(&input, 25, 5);

        assert_eq!(selected.len(), 2);
        assert!(selected.values().all(|slots| slots.is_empty()));
    }

    #[test]
    fn test_select_with_covering_range_is_identity() {
        let input = schedule(&[("V1", &[10, 20, 30]), ("V2", &[15])]);

        let selected = select_in_range(&input, 10, 30);

        assert_eq!(selected, input);
    }

    #[test]
    fn test_select_is_idempotent() {
        let input = schedule(&[("V1", &[10, 20, 30]), ("V2", &[15, 40])]);

        let once = select_in_range(&input, 12, 35);
        let twice = select_in_range(&once, 12, 35);

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_trims_to_monitored_identities_and_offsets_slots() {
        let provider = StubProvider {
            leader_schedule: Some(schedule(&[("V1", &[2, 5]), ("V2", &[10])])),
            ..Default::default()
        };
        let identities = vec!["V1".to_string(), "V3".to_string()];

        let trimmed = fetch_trimmed_leader_schedule(&provider, &identities, 1_000, 1_000)
            .await
            .unwrap();

        // V2 is not monitored and V3 has no slots this epoch; neither is
        // an error.
        assert_eq!(trimmed, schedule(&[("V1", &[1_002, 1_005])]));
    }

    #[tokio::test]
    async fn test_offsets_preserve_raw_index_order() {
        let provider = StubProvider {
            leader_schedule: Some(schedule(&[("V1", &[7, 3, 11])])),
            ..Default::default()
        };
        let identities = vec!["V1".to_string()];

        let trimmed = fetch_trimmed_leader_schedule(&provider, &identities, 500, 100)
            .await
            .unwrap();

        assert_eq!(trimmed["V1"], vec![107, 103, 111]);
    }

    #[tokio::test]
    async fn test_schedule_query_failure_is_a_transport_error() {
        let provider = StubProvider::default();
        let identities = vec!["V1".to_string()];

        let err = fetch_trimmed_leader_schedule(&provider, &identities, 1_000, 1_000)
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
