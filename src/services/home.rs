// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home page view: a portal bundle partitioned around "now" and rendered
//! for display.

use crate::models::{Appointment, Profile, TrainingSession};
use crate::services::format::{format_date_time, format_day_time_range, format_duration};
use crate::services::portal::PortalBundle;
use crate::services::timeline::{Scheduled, Timeline};
use chrono::NaiveDateTime;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Placeholder for absent profile fields.
const MISSING: &str = "-";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HomeView {
    pub profile: ProfileCard,
    pub past_sessions: Vec<SessionLine>,
    pub upcoming_appointments: Vec<AppointmentLine>,
}

/// Profile fields ready for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileCard {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    pub center_name: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionLine {
    pub id: String,
    pub when: String,
    pub started_at: String,
    pub duration: String,
    pub trainer_name: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AppointmentLine {
    pub id: String,
    pub when: String,
    pub starts_at: String,
    pub duration: String,
    pub trainer_name: String,
}

impl HomeView {
    pub fn compose(bundle: &PortalBundle, now: NaiveDateTime) -> Self {
        let timeline = Timeline::build(&bundle.training_sessions, &bundle.appointments, now);

        Self {
            profile: ProfileCard::from(&bundle.profile),
            past_sessions: timeline
                .past_sessions
                .into_iter()
                .map(SessionLine::from)
                .collect(),
            upcoming_appointments: timeline
                .upcoming_appointments
                .into_iter()
                .map(AppointmentLine::from)
                .collect(),
        }
    }
}

fn or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

impl From<&Profile> for ProfileCard {
    fn from(p: &Profile) -> Self {
        Self {
            email: p.email.clone(),
            name: p.full_name(),
            phone: or_missing(p.phone.as_deref()),
            gender: or_missing(p.gender.as_deref()),
            date_of_birth: or_missing(p.dob.as_deref()),
            center_name: or_missing(p.center_name.as_deref()),
            created_at: p
                .created_at
                .map(format_date_time)
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

/// Display strings shared by every scheduled record.
pub(crate) struct SlotText {
    pub when: String,
    pub starts_at: String,
    pub duration: String,
}

impl SlotText {
    pub(crate) fn of<T: Scheduled>(record: &T) -> Self {
        let start = record.start_time();
        let end = record.end_time();
        Self {
            when: format_day_time_range(start, end),
            starts_at: format_date_time(start),
            duration: end
                .map(|end| format_duration(start, end))
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

impl From<&TrainingSession> for SessionLine {
    fn from(s: &TrainingSession) -> Self {
        let text = SlotText::of(s);
        Self {
            id: s.id.clone(),
            when: text.when,
            started_at: text.starts_at,
            duration: text.duration,
            trainer_name: s.trainer_name.clone(),
            score: s.score,
        }
    }
}

impl From<&Appointment> for AppointmentLine {
    fn from(a: &Appointment) -> Self {
        let text = SlotText::of(a);
        Self {
            id: a.id.clone(),
            when: text.when,
            starts_at: text.starts_at,
            duration: text.duration,
            trainer_name: a.trainer_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_utils::parse_timestamp;
    use serde_json::json;

    fn bundle() -> PortalBundle {
        PortalBundle {
            profile: serde_json::from_value(json!({
                "id": "p1", "email": "maya@example.com", "firstName": "Maya", "lastName": "Ortiz",
                "phone": "555-0101", "gender": "", "createdAt": "2023-02-14T16:20:00"
            }))
            .unwrap(),
            training_sessions: serde_json::from_value(json!([
                {"id": "old", "playerId": "p1", "startTime": "2024-05-01T10:00:00", "endTime": "2024-05-01T11:30:00",
                 "trainerName": "Sam", "score": 70, "numberOfGoals": 5, "bestStreak": 3, "numberOfBalls": 80,
                 "avgSpeedOfPlay": 2.4, "numberOfExercises": 6},
                {"id": "at_now", "playerId": "p1", "startTime": "2024-06-01T12:00:00", "endTime": "2024-06-01T13:00:00",
                 "trainerName": "Sam", "score": 72, "numberOfGoals": 6, "bestStreak": 3, "numberOfBalls": 82,
                 "avgSpeedOfPlay": 2.3, "numberOfExercises": 6},
                {"id": "recent", "playerId": "p1", "startTime": "2024-05-28T17:05:00", "endTime": "2024-05-28T17:50:00",
                 "trainerName": "Ines", "score": 88.5, "numberOfGoals": 9, "bestStreak": 5, "numberOfBalls": 90,
                 "avgSpeedOfPlay": 2.1, "numberOfExercises": 7}
            ]))
            .unwrap(),
            appointments: serde_json::from_value(json!([
                {"id": "later", "playerId": "p1", "startTime": "2024-06-09T09:00:00", "endTime": "2024-06-09T10:00:00", "trainerName": "Sam"},
                {"id": "now", "playerId": "p1", "startTime": "2024-06-01T12:00:00", "endTime": "2024-06-01T12:45:00", "trainerName": "Ines"},
                {"id": "gone", "playerId": "p1", "startTime": "2024-05-01T09:00:00", "endTime": "2024-05-01T10:00:00", "trainerName": "Sam"}
            ]))
            .unwrap(),
        }
    }

    #[test]
    fn test_compose_partitions_and_formats() {
        let now = parse_timestamp("2024-06-01T12:00:00").unwrap();
        let view = HomeView::compose(&bundle(), now);

        let past: Vec<&str> = view.past_sessions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(past, ["recent", "old"]);

        let upcoming: Vec<&str> = view
            .upcoming_appointments
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(upcoming, ["now", "later"]);

        let recent = &view.past_sessions[0];
        assert_eq!(recent.when, "Tue 5/28 5:05pm - 5:50pm");
        assert_eq!(recent.duration, "45m");
        assert_eq!(recent.started_at, "May 28, 2024, 5:05 PM");
        assert_eq!(view.past_sessions[1].duration, "1h 30m");
        assert_eq!(view.upcoming_appointments[1].when, "Sun 6/9 9:00am - 10:00am");
        assert_eq!(view.upcoming_appointments[1].duration, "1h");
    }

    struct OpenEnded(NaiveDateTime);

    impl Scheduled for OpenEnded {
        fn start_time(&self) -> NaiveDateTime {
            self.0
        }
    }

    #[test]
    fn test_slot_text_without_end_time() {
        let text = SlotText::of(&OpenEnded(parse_timestamp("2024-06-02T09:05:00").unwrap()));

        assert_eq!(text.when, "Sun 6/2 9:05am");
        assert_eq!(text.starts_at, "Jun 2, 2024, 9:05 AM");
        assert_eq!(text.duration, "-");
    }

    #[test]
    fn test_slot_text_uses_record_end_time() {
        let bundle = bundle();
        let text = SlotText::of(&bundle.appointments[1]);

        assert_eq!(text.when, "Sat 6/1 12:00pm - 12:45pm");
        assert_eq!(text.duration, "45m");
    }

    #[test]
    fn test_profile_card_placeholders() {
        let card = ProfileCard::from(&bundle().profile);

        assert_eq!(card.name, "Maya Ortiz");
        assert_eq!(card.phone, "555-0101");
        assert_eq!(card.gender, "-");
        assert_eq!(card.date_of_birth, "-");
        assert_eq!(card.center_name, "-");
        assert_eq!(card.created_at, "Feb 14, 2023, 4:20 PM");
    }
}
