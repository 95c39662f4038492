// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portal aggregation: one player's profile joined with their records.

use crate::db::{RecordStore, Snapshot};
use crate::error::Result;
use crate::models::{Appointment, PlayerEmail, Profile, TrainingSession};
use crate::services::lookup::Lookup;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Result of a successful sign-in lookup.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SignInResult {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub email: PlayerEmail,
    pub profile: Profile,
}

/// A player's profile plus every session and appointment they own.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PortalBundle {
    pub profile: Profile,
    pub training_sessions: Vec<TrainingSession>,
    pub appointments: Vec<Appointment>,
}

/// Build the bundle for `email` from an already-loaded snapshot.
///
/// Fails only when no profile matches; a player with no sessions or
/// appointments gets empty lists.
pub fn get_portal_bundle(snapshot: &Snapshot, email: &PlayerEmail) -> Result<PortalBundle> {
    let lookup = Lookup::new(snapshot);
    let profile = lookup.find_profile_by_email(email)?;

    Ok(PortalBundle {
        profile: profile.clone(),
        training_sessions: lookup
            .find_sessions_for_player(&profile.id)
            .into_iter()
            .cloned()
            .collect(),
        appointments: lookup
            .find_appointments_for_player(&profile.id)
            .into_iter()
            .cloned()
            .collect(),
    })
}

/// Request-level entry point: every call reads the store afresh.
#[derive(Clone)]
pub struct PortalService {
    store: RecordStore,
}

impl PortalService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Resolve the profile a player signs in with.
    pub async fn sign_in(&self, email: PlayerEmail) -> Result<SignInResult> {
        let snapshot = self.store.load().await?;
        let profile = Lookup::new(&snapshot).find_profile_by_email(&email)?.clone();

        tracing::info!(player_id = %profile.id, "Player signed in");
        Ok(SignInResult { email, profile })
    }

    pub async fn bundle(&self, email: &PlayerEmail) -> Result<PortalBundle> {
        let snapshot = self.store.load().await?;
        let bundle = get_portal_bundle(&snapshot, email)?;

        tracing::debug!(
            player_id = %bundle.profile.id,
            training_sessions = bundle.training_sessions.len(),
            appointments = bundle.appointments.len(),
            "Built portal bundle"
        );
        Ok(bundle)
    }

    pub async fn session(&self, id: &str) -> Result<TrainingSession> {
        let snapshot = self.store.load().await?;
        let session = Lookup::new(&snapshot).find_session_by_id(id)?.clone();
        Ok(session)
    }
}
