// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record lookups over a loaded snapshot.

use crate::db::Snapshot;
use crate::error::{AppError, Result};
use crate::models::{Appointment, PlayerEmail, Profile, TrainingSession};

/// Read-only queries against one [`Snapshot`].
pub struct Lookup<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> Lookup<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Find the profile that signs in with `email` (case-insensitive).
    pub fn find_profile_by_email(&self, email: &PlayerEmail) -> Result<&'a Profile> {
        self.snapshot
            .profiles
            .iter()
            .find(|p| p.has_email(email.as_str()))
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// All sessions owned by `player_id`, in stored order.
    pub fn find_sessions_for_player(&self, player_id: &str) -> Vec<&'a TrainingSession> {
        self.snapshot
            .training_sessions
            .iter()
            .filter(|s| s.player_id == player_id)
            .collect()
    }

    /// All appointments owned by `player_id`, in stored order.
    pub fn find_appointments_for_player(&self, player_id: &str) -> Vec<&'a Appointment> {
        self.snapshot
            .appointments
            .iter()
            .filter(|a| a.player_id == player_id)
            .collect()
    }

    /// Exact-id session lookup.
    pub fn find_session_by_id(&self, id: &str) -> Result<&'a TrainingSession> {
        self.snapshot
            .training_sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))
    }
}
