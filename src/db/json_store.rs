// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat-file record store.
//!
//! Every call to [`RecordStore::load`] reads all three collections from disk
//! and decodes them into typed records. Nothing is cached between calls, so
//! edits to the data files are visible on the next request.

use crate::db::collections;
use crate::models::{Appointment, Profile, TrainingSession};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One consistent read of all three collections.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub profiles: Vec<Profile>,
    pub training_sessions: Vec<TrainingSession>,
    pub appointments: Vec<Appointment>,
}

impl Snapshot {
    /// Describe every duplicate identifier and dangling `playerId`.
    ///
    /// An empty result means the collections are referentially sound.
    pub fn integrity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let mut profile_ids = HashSet::new();
        for profile in &self.profiles {
            if !profile_ids.insert(profile.id.as_str()) {
                issues.push(format!("duplicate profile id '{}'", profile.id));
            }
        }

        let mut seen = HashSet::new();
        for session in &self.training_sessions {
            if !seen.insert(session.id.as_str()) {
                issues.push(format!("duplicate training session id '{}'", session.id));
            }
            if !profile_ids.contains(session.player_id.as_str()) {
                issues.push(format!(
                    "training session '{}' references unknown player '{}'",
                    session.id, session.player_id
                ));
            }
        }

        seen.clear();
        for appointment in &self.appointments {
            if !seen.insert(appointment.id.as_str()) {
                issues.push(format!("duplicate appointment id '{}'", appointment.id));
            }
            if !profile_ids.contains(appointment.player_id.as_str()) {
                issues.push(format!(
                    "appointment '{}' references unknown player '{}'",
                    appointment.id, appointment.player_id
                ));
            }
        }

        issues
    }
}

#[derive(Clone)]
enum Source {
    Directory(PathBuf),
    Memory(Arc<Snapshot>),
}

/// Read-only access to the portal's record collections.
#[derive(Clone)]
pub struct RecordStore {
    source: Source,
}

impl RecordStore {
    /// Store backed by `profiles.json`, `trainingSessions.json` and
    /// `appointments.json` inside `data_dir`.
    pub fn from_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            source: Source::Directory(data_dir.as_ref().to_path_buf()),
        }
    }

    /// Store serving a fixed snapshot (offline / tests).
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            source: Source::Memory(Arc::new(snapshot)),
        }
    }

    /// Load all collections.
    pub async fn load(&self) -> Result<Snapshot, StoreError> {
        let snapshot = match &self.source {
            Source::Directory(dir) => {
                let profiles_path = dir.join(collections::PROFILES);
                let sessions_path = dir.join(collections::TRAINING_SESSIONS);
                let appointments_path = dir.join(collections::APPOINTMENTS);

                let (profiles, training_sessions, appointments) = tokio::try_join!(
                    read_collection::<Profile>(&profiles_path),
                    read_collection::<TrainingSession>(&sessions_path),
                    read_collection::<Appointment>(&appointments_path),
                )?;
                Snapshot {
                    profiles,
                    training_sessions,
                    appointments,
                }
            }
            Source::Memory(snapshot) => snapshot.as_ref().clone(),
        };

        for issue in snapshot.integrity_issues() {
            tracing::warn!(issue = %issue, "Record store integrity problem");
        }

        tracing::debug!(
            profiles = snapshot.profiles.len(),
            training_sessions = snapshot.training_sessions.len(),
            appointments = snapshot.appointments.len(),
            "Loaded record store"
        );

        Ok(snapshot)
    }
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Errors from reading the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
