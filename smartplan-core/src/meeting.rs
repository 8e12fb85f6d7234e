//! Scheduled team meetings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::availability::SlotSuggestion;
use crate::error::{PlanError, PlanResult};
use crate::selection::MemberSelection;

/// How a meeting's time was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedBy {
    /// Picked from the common-slot suggestions
    Ai,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    /// Day label, same form as in member availability
    pub day: String,
    pub time: String,
    pub participants: Vec<String>,
    pub suggested_by: SuggestedBy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingBook {
    #[serde(default)]
    meetings: Vec<Meeting>,
}

impl MeetingBook {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        MeetingBook { meetings }
    }

    /// Book a meeting at a suggested common slot.
    pub fn book(
        &mut self,
        title: &str,
        slot: &SlotSuggestion,
        participants: &MemberSelection,
    ) -> PlanResult<&Meeting> {
        self.push(title, &slot.day, &slot.time, participants, SuggestedBy::Ai)
    }

    /// Add a meeting at a time chosen by hand.
    pub fn add_manual(
        &mut self,
        title: &str,
        day: &str,
        time: &str,
        participants: &MemberSelection,
    ) -> PlanResult<&Meeting> {
        self.push(title, day, time, participants, SuggestedBy::Manual)
    }

    fn push(
        &mut self,
        title: &str,
        day: &str,
        time: &str,
        participants: &MemberSelection,
        suggested_by: SuggestedBy,
    ) -> PlanResult<&Meeting> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlanError::Validation("Meeting title cannot be empty".into()));
        }
        if participants.is_empty() {
            return Err(PlanError::NoSelection);
        }

        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            day: day.to_string(),
            time: time.to_string(),
            participants: participants.iter().map(str::to_string).collect(),
            suggested_by,
        };

        tracing::info!(title = %meeting.title, day = %meeting.day, time = %meeting.time, "booked meeting");
        self.meetings.push(meeting);
        Ok(&self.meetings[self.meetings.len() - 1])
    }

    pub fn for_day<'a>(&'a self, day: &'a str) -> impl Iterator<Item = &'a Meeting> + 'a {
        self.meetings.iter().filter(move |m| m.day == day)
    }

    pub fn all(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    pub fn seed() -> Self {
        MeetingBook::new(vec![
            Meeting {
                id: "1".into(),
                title: "Планирование спринта".into(),
                day: "16 янв".into(),
                time: "10:00".into(),
                participants: vec!["1".into(), "2".into(), "3".into()],
                suggested_by: SuggestedBy::Ai,
            },
            Meeting {
                id: "2".into(),
                title: "Обсуждение дизайна".into(),
                day: "17 янв".into(),
                time: "15:00".into(),
                participants: vec!["1".into(), "3".into()],
                suggested_by: SuggestedBy::Manual,
            },
        ])
    }
}
