// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized sign-in email.

use crate::error::AppError;
use serde::Serialize;
use std::fmt;

/// The email a player is signed in with: trimmed, lower-cased and non-empty.
///
/// This is the session context handed to lookups; there is no ambient
/// "current user" anywhere else in the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerEmail(String);

impl PlayerEmail {
    /// Normalize raw user input. Empty (or all-whitespace) input is rejected.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AppError::Validation("Email required".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let email = PlayerEmail::parse("  Jordan.Lee@Example.COM \n").unwrap();
        assert_eq!(email.as_str(), "jordan.lee@example.com");
    }

    #[test]
    fn test_parse_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            let err = PlayerEmail::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "input {:?}", raw);
        }
    }
}
