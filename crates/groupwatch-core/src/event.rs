//! Event domain types and the status classification rule.
//!
//! A group's most recent event carries an end time and a review window.
//! Classification against the current instant is a pure function:
//!
//! ```text
//! now <= end_time                    -> Active
//! now <= end_time + review window    -> InReview
//! otherwise                          -> Done
//! ```
//!
//! Both comparisons are inclusive. An instant exactly equal to the end time
//! is still Active; an instant exactly equal to the review deadline is still
//! InReview.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a group's most recent event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// The event's end time has not yet passed.
    Active,
    /// The event ended but its review window is still open.
    InReview,
    /// The review window elapsed, or the group has no event at all.
    Done,
}

impl EventStatus {
    /// Get string representation for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::InReview => "in_review",
            EventStatus::Done => "done",
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EventStatus::Active),
            "in_review" => Ok(EventStatus::InReview),
            "done" => Ok(EventStatus::Done),
            _ => Err(format!("Unknown event status: {}", s)),
        }
    }
}

/// The most recent event recorded for a group, as seen by the classifier.
///
/// Produced by a [`crate::lookup::LastEventLookup`] collaborator; the core
/// only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastEvent {
    /// When the event ends (or ended).
    pub end_time: DateTime<Utc>,
    /// Length of the review window in hours. May be fractional; must be
    /// non-negative.
    #[serde(default)]
    pub review_duration_hours: f64,
}

impl LastEvent {
    /// Review window length in milliseconds, rounded to the nearest
    /// millisecond.
    pub fn review_duration_ms(&self) -> i64 {
        (self.review_duration_hours * 3_600_000.0).round() as i64
    }

    /// The instant the review window closes.
    pub fn review_deadline(&self) -> DateTime<Utc> {
        self.end_time + Duration::milliseconds(self.review_duration_ms())
    }
}

/// Classify a group's last event against `now`.
///
/// Pure function of its inputs; the same `now` and event always yield the
/// same status. `None` means the group has no recorded event and is `Done`.
pub fn classify(now: DateTime<Utc>, event: Option<&LastEvent>) -> EventStatus {
    let Some(event) = event else {
        return EventStatus::Done;
    };
    if now <= event.end_time {
        EventStatus::Active
    } else if now <= event.review_deadline() {
        EventStatus::InReview
    } else {
        EventStatus::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn base() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn event_ending_at(end_time: DateTime<Utc>, hours: f64) -> LastEvent {
        LastEvent {
            end_time,
            review_duration_hours: hours,
        }
    }

    #[test]
    fn no_event_is_done() {
        assert_eq!(classify(base(), None), EventStatus::Done);
    }

    #[test]
    fn before_end_time_is_active() {
        let event = event_ending_at(base() + Duration::milliseconds(1), 1.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::Active);
    }

    #[test]
    fn exactly_at_end_time_is_active() {
        let event = event_ending_at(base(), 1.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::Active);
    }

    #[test]
    fn just_past_end_time_is_in_review() {
        let event = event_ending_at(base() - Duration::milliseconds(1), 1.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::InReview);
    }

    #[test]
    fn exactly_at_review_deadline_is_in_review() {
        let event = event_ending_at(base() - Duration::milliseconds(3_600_000), 1.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::InReview);
    }

    #[test]
    fn just_past_review_deadline_is_done() {
        let event = event_ending_at(base() - Duration::milliseconds(3_600_001), 1.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::Done);
    }

    #[test]
    fn zero_review_window_skips_in_review() {
        let event = event_ending_at(base(), 0.0);
        assert_eq!(classify(base(), Some(&event)), EventStatus::Active);
        assert_eq!(
            classify(base() + Duration::milliseconds(1), Some(&event)),
            EventStatus::Done
        );
    }

    #[test]
    fn fractional_review_window_converts_exactly() {
        let event = event_ending_at(base(), 0.5);
        assert_eq!(event.review_duration_ms(), 1_800_000);
        assert_eq!(
            event.review_deadline(),
            base() + Duration::milliseconds(1_800_000)
        );
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [EventStatus::Active, EventStatus::InReview, EventStatus::Done] {
            assert_eq!(EventStatus::from_str(status.as_str()).unwrap(), status);
        }
        assert!(EventStatus::from_str("archived").is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EventStatus::InReview).unwrap(),
            "\"in_review\""
        );
    }

    fn rank(status: EventStatus) -> u8 {
        match status {
            EventStatus::Active => 0,
            EventStatus::InReview => 1,
            EventStatus::Done => 2,
        }
    }

    proptest! {
        #[test]
        fn boundaries_are_inclusive(
            end_offset_ms in -1_000_000i64..1_000_000,
            review_ms in 1i64..100_000_000,
        ) {
            let end_time = base() + Duration::milliseconds(end_offset_ms);
            let event = event_ending_at(end_time, review_ms as f64 / 3_600_000.0);
            prop_assert_eq!(event.review_duration_ms(), review_ms);

            prop_assert_eq!(classify(end_time, Some(&event)), EventStatus::Active);
            prop_assert_eq!(
                classify(end_time + Duration::milliseconds(1), Some(&event)),
                EventStatus::InReview
            );

            let deadline = event.review_deadline();
            prop_assert_eq!(classify(deadline, Some(&event)), EventStatus::InReview);
            prop_assert_eq!(
                classify(deadline + Duration::milliseconds(1), Some(&event)),
                EventStatus::Done
            );
        }

        #[test]
        fn status_never_reverses_as_time_advances(
            now_offset_ms in -10_000_000i64..10_000_000,
            step_ms in 0i64..10_000_000,
            review_hours in 0.0f64..48.0,
        ) {
            let event = event_ending_at(base(), review_hours);
            let earlier = base() + Duration::milliseconds(now_offset_ms);
            let later = earlier + Duration::milliseconds(step_ms);
            prop_assert!(
                rank(classify(earlier, Some(&event))) <= rank(classify(later, Some(&event)))
            );
        }
    }
}
