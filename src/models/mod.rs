// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod appointment;
pub mod email;
pub mod profile;
pub mod session;

pub use appointment::Appointment;
pub use email::PlayerEmail;
pub use profile::Profile;
pub use session::TrainingSession;
