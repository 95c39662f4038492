// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod format;
pub mod home;
pub mod lookup;
pub mod portal;
pub mod session_view;
pub mod timeline;

pub use home::HomeView;
pub use lookup::Lookup;
pub use portal::{get_portal_bundle, PortalBundle, PortalService, SignInResult};
pub use session_view::SessionDetailView;
pub use timeline::{Scheduled, Timeline};
