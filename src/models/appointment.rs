// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Appointment model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A booked coaching slot. Carries no performance metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Appointment {
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
}
