//! Failure classification for backend calls
//!
//! Each call ends in one of three states: success, a not-found fallback to
//! mock data, or a typed failure. The decision only depends on the HTTP
//! status (if any) and the configured [`Environment`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const NOT_FOUND: u16 = 404;
/// Status reported when a failure carries none (connection refused, bad body, ...)
pub const INTERNAL_ERROR: u16 = 500;

/// Execution context of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local UI work: a missing backend endpoint is replaced by mock data
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn allows_mock_fallback(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "Invalid environment: {other}. Valid values: development, production"
            )),
        }
    }
}

/// What to do with a failed backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// Substitute deterministic mock data
    UseMock,
    /// Report the resource as missing
    NotFound,
    /// Surface the failure with this status
    Fail { status: u16 },
}

/// Decide how a failed call is reported
///
/// `status` is `None` when no HTTP response was received or its body could
/// not be decoded.
pub fn classify_failure(status: Option<u16>, environment: Environment) -> FailureAction {
    match status {
        Some(NOT_FOUND) if environment.allows_mock_fallback() => FailureAction::UseMock,
        Some(NOT_FOUND) => FailureAction::NotFound,
        Some(status) => FailureAction::Fail { status },
        None => FailureAction::Fail {
            status: INTERNAL_ERROR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_in_development_uses_mock() {
        assert_eq!(
            classify_failure(Some(404), Environment::Development),
            FailureAction::UseMock
        );
    }

    #[test]
    fn test_not_found_in_production_is_reported() {
        assert_eq!(
            classify_failure(Some(404), Environment::Production),
            FailureAction::NotFound
        );
    }

    #[test]
    fn test_other_statuses_fail_in_every_environment() {
        for environment in [Environment::Development, Environment::Production] {
            assert_eq!(
                classify_failure(Some(500), environment),
                FailureAction::Fail { status: 500 }
            );
            assert_eq!(
                classify_failure(Some(403), environment),
                FailureAction::Fail { status: 403 }
            );
        }
    }

    #[test]
    fn test_missing_status_reports_500() {
        assert_eq!(
            classify_failure(None, Environment::Development),
            FailureAction::Fail { status: 500 }
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "development".parse::<Environment>(),
            Ok(Environment::Development)
        );
        assert_eq!(" Prod ".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default(), Environment::Production);
    }
}
