// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training session model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A completed coaching session with its performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrainingSession {
    pub id: String,
    /// Owning player (`Profile::id`)
    pub player_id: String,
    #[serde(with = "crate::time_utils::timestamp")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub start_time: NaiveDateTime,
    #[serde(with = "crate::time_utils::timestamp")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub end_time: NaiveDateTime,
    pub trainer_name: String,
    pub score: f64,
    pub number_of_goals: u32,
    pub best_streak: u32,
    pub number_of_balls: u32,
    /// Average speed of play (seconds per ball)
    pub avg_speed_of_play: f64,
    pub number_of_exercises: u32,
}
