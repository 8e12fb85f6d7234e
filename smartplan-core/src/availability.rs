//! Common free slots for a group of team members.
//!
//! Given a roster and the ids of the selected members, [`find_common_slots`]
//! returns every (day, time) pair at which all of them are free at once.
//! Days and times are compared as plain labels: "10:00" and "10:00 " are
//! different slots, and no time-zone or format normalization happens.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::selection::MemberSelection;
use crate::team::{Roster, TeamMember};

/// A (day, time) pair at which every selected member is free.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub day: String,
    pub time: String,
}

impl SlotSuggestion {
    pub fn new(day: &str, time: &str) -> Self {
        SlotSuggestion {
            day: day.to_string(),
            time: time.to_string(),
        }
    }
}

impl fmt::Display for SlotSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Compute the slots shared by every selected member.
///
/// Days are visited in the order they first appear across the selected
/// members (roster order), and times within a day in the order of the first
/// selected member's list. A member with no entry for a day contributes an
/// empty slot list, so that day drops out.
///
/// An empty selection is [`PlanError::NoSelection`]; a selection with nothing
/// in common is `Ok` with an empty vector.
pub fn find_common_slots(
    roster: &Roster,
    selected: &MemberSelection,
) -> PlanResult<Vec<SlotSuggestion>> {
    if selected.is_empty() {
        return Err(PlanError::NoSelection);
    }

    if let Some(missing) = selected.iter().find(|id| roster.get(id).is_none()) {
        return Err(PlanError::UnknownMember(missing.to_string()));
    }

    let members: Vec<&TeamMember> = roster.iter().filter(|m| selected.contains(&m.id)).collect();

    let mut days: Vec<&str> = Vec::new();
    for day in members.iter().flat_map(|m| m.availability.iter().map(|a| a.day.as_str())) {
        if !days.contains(&day) {
            days.push(day);
        }
    }

    let mut suggestions = Vec::new();
    for day in days {
        let (first, rest) = match members.split_first() {
            Some(split) => split,
            None => break,
        };

        let others: Vec<HashSet<&str>> = rest
            .iter()
            .map(|m| m.slots_on(day).iter().map(String::as_str).collect())
            .collect();

        let mut seen = HashSet::new();
        for time in first.slots_on(day) {
            if others.iter().all(|slots| slots.contains(time.as_str())) && seen.insert(time) {
                suggestions.push(SlotSuggestion::new(day, time));
            }
        }
    }

    tracing::debug!(
        selected = selected.len(),
        found = suggestions.len(),
        "computed common slots"
    );

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::DayAvailability;

    fn member(id: &str, availability: Vec<DayAvailability>) -> TeamMember {
        TeamMember {
            id: id.into(),
            name: format!("Member {id}"),
            initials: id.to_uppercase(),
            availability,
        }
    }

    fn select(ids: &[&str]) -> MemberSelection {
        ids.iter().copied().collect()
    }

    fn pairs(slots: &[SlotSuggestion]) -> Vec<(&str, &str)> {
        slots.iter().map(|s| (s.day.as_str(), s.time.as_str())).collect()
    }

    #[test]
    fn empty_selection_is_an_error() {
        let err = find_common_slots(&Roster::seed(), &MemberSelection::new()).unwrap_err();
        assert!(matches!(err, PlanError::NoSelection));
    }

    #[test]
    fn empty_selection_is_an_error_even_for_empty_roster() {
        let err = find_common_slots(&Roster::default(), &MemberSelection::new()).unwrap_err();
        assert!(matches!(err, PlanError::NoSelection));
    }

    #[test]
    fn unknown_member_is_rejected() {
        let err = find_common_slots(&Roster::seed(), &select(&["1", "42"])).unwrap_err();
        assert!(matches!(err, PlanError::UnknownMember(id) if id == "42"));
    }

    #[test]
    fn shared_afternoon_slot() {
        let roster = Roster::new(vec![
            member("a", vec![DayAvailability::new("16 янв", ["10:00", "14:00"])]),
            member("b", vec![DayAvailability::new("16 янв", ["14:00", "16:00"])]),
        ]);

        let slots = find_common_slots(&roster, &select(&["a", "b"])).unwrap();
        assert_eq!(pairs(&slots), [("16 янв", "14:00")]);
    }

    #[test]
    fn no_shared_day_yields_nothing() {
        let roster = Roster::new(vec![
            member("a", vec![DayAvailability::new("16 янв", ["10:00"])]),
            member("b", vec![DayAvailability::new("17 янв", ["10:00"])]),
        ]);

        let slots = find_common_slots(&roster, &select(&["a", "b"])).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn single_member_gets_full_availability() {
        let roster = Roster::seed();
        let slots = find_common_slots(&roster, &select(&["2"])).unwrap();
        assert_eq!(
            pairs(&slots),
            [
                ("16 янв", "10:00"),
                ("16 янв", "11:00"),
                ("16 янв", "14:00"),
                ("17 янв", "10:00"),
                ("17 янв", "14:00"),
                ("17 янв", "16:00"),
            ]
        );
    }

    #[test]
    fn seed_team_all_three() {
        let slots = find_common_slots(&Roster::seed(), &select(&["1", "2", "3"])).unwrap();
        assert_eq!(pairs(&slots), [("16 янв", "10:00"), ("16 янв", "14:00")]);
    }

    #[test]
    fn seed_team_anna_and_elena() {
        let slots = find_common_slots(&Roster::seed(), &select(&["1", "3"])).unwrap();
        assert_eq!(
            pairs(&slots),
            [
                ("16 янв", "10:00"),
                ("16 янв", "14:00"),
                ("17 янв", "11:00"),
                ("17 янв", "15:00"),
            ]
        );
    }

    #[test]
    fn duplicate_slots_reported_once() {
        let roster = Roster::new(vec![
            member("a", vec![DayAvailability::new("Mon", ["09:00", "09:00", "10:00"])]),
            member("b", vec![DayAvailability::new("Mon", ["09:00", "09:00"])]),
        ]);

        let slots = find_common_slots(&roster, &select(&["a", "b"])).unwrap();
        assert_eq!(pairs(&slots), [("Mon", "09:00")]);
    }

    #[test]
    fn labels_match_exactly() {
        let roster = Roster::new(vec![
            member("a", vec![DayAvailability::new("Mon", ["9:00", "10:00"])]),
            member("b", vec![DayAvailability::new("Mon", ["09:00", "10:00"])]),
        ]);

        let slots = find_common_slots(&roster, &select(&["a", "b"])).unwrap();
        assert_eq!(pairs(&slots), [("Mon", "10:00")]);
    }

    #[test]
    fn missing_day_excludes_it() {
        let roster = Roster::new(vec![
            member(
                "a",
                vec![
                    DayAvailability::new("Mon", ["09:00"]),
                    DayAvailability::new("Tue", ["09:00"]),
                ],
            ),
            member("b", vec![DayAvailability::new("Tue", ["09:00"])]),
        ]);

        let slots = find_common_slots(&roster, &select(&["a", "b"])).unwrap();
        assert_eq!(pairs(&slots), [("Tue", "09:00")]);
    }

    #[test]
    fn every_result_is_free_for_every_member() {
        let roster = Roster::seed();
        for ids in [&["1", "2"][..], &["2", "3"][..], &["1", "2", "3"][..], &["1"][..]] {
            let selection = select(ids);
            let slots = find_common_slots(&roster, &selection).unwrap();

            for slot in &slots {
                for id in selection.iter() {
                    let member = roster.get(id).unwrap();
                    assert!(member.slots_on(&slot.day).contains(&slot.time));
                }
            }

            let unique: HashSet<_> = slots.iter().collect();
            assert_eq!(unique.len(), slots.len());
        }
    }

    #[test]
    fn same_input_same_output() {
        let roster = Roster::seed();
        let selection = select(&["1", "2"]);
        let first = find_common_slots(&roster, &selection).unwrap();
        let second = find_common_slots(&roster, &selection).unwrap();
        assert_eq!(first, second);
    }
}
