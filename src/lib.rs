// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Player portal: serves player profiles, training sessions and
//! appointments from flat JSON collections.
//!
//! The backing files are re-read on every request; there is no write path.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::PortalService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub portal: PortalService,
}
