// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record store (read-only JSON collections).

pub mod json_store;

pub use json_store::{RecordStore, Snapshot, StoreError};

/// Collection file names inside the data directory.
pub mod collections {
    pub const PROFILES: &str = "profiles.json";
    pub const TRAINING_SESSIONS: &str = "trainingSessions.json";
    pub const APPOINTMENTS: &str = "appointments.json";
}
