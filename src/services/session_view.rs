// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session detail page: one training session rendered for display.

use crate::models::TrainingSession;
use crate::services::format::format_date_time;
use crate::services::home::SlotText;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionDetailView {
    pub id: String,
    pub trainer_name: String,
    pub when: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    /// Performance metrics in display order
    pub stats: Vec<StatLine>,
}

#[derive(Debug, Serialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

fn stat(label: &str, value: impl ToString) -> StatLine {
    StatLine {
        label: label.to_string(),
        value: value.to_string(),
    }
}

impl From<&TrainingSession> for SessionDetailView {
    fn from(s: &TrainingSession) -> Self {
        let text = SlotText::of(s);
        Self {
            id: s.id.clone(),
            trainer_name: s.trainer_name.clone(),
            when: text.when,
            start: text.starts_at,
            end: format_date_time(s.end_time),
            duration: text.duration,
            stats: vec![
                stat("Score", s.score),
                stat("Goals", s.number_of_goals),
                stat("Best streak", s.best_streak),
                stat("Balls", s.number_of_balls),
                stat("Avg speed of play", s.avg_speed_of_play),
                stat("Exercises", s.number_of_exercises),
            ],
        }
    }
}
