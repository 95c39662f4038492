// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Player profile model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A player's account record, as stored in `profiles.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    /// Unique player identifier
    pub id: String,
    /// Sign-in email (matched case-insensitively)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Date of birth, kept verbatim
    #[serde(default)]
    pub dob: Option<String>,
    /// Training center the player belongs to
    #[serde(default)]
    pub center_name: Option<String>,
    /// When the profile was created
    #[serde(default, with = "crate::time_utils::timestamp::option")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub created_at: Option<NaiveDateTime>,
}

impl Profile {
    /// Display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether this profile signs in with `normalized_email`.
    ///
    /// The argument must already be trimmed and lower-cased.
    pub fn has_email(&self, normalized_email: &str) -> bool {
        self.email.to_lowercase() == normalized_email
    }
}
