//! Connection settings resolved from the environment.
//!
//! The settings value is constructed once at startup and passed by
//! reference into the session factory and the pipeline; business logic
//! never reads the environment piecemeal. Tests resolve settings
//! through [`Settings::from_lookup`] and leave the process environment
//! alone.

use std::env;
use std::fmt;

use thiserror::Error;

pub const DEFAULT_ROLE: &str = "ACCOUNTADMIN";
pub const DEFAULT_WAREHOUSE: &str = "EQUITY_WH";
pub const DEFAULT_DATABASE: &str = "EQUITY_DB";

/// One or more required settings were absent or empty.
#[derive(Debug, Error)]
#[error("missing required settings: {}", missing.join(", "))]
pub struct ConfigurationError {
    pub missing: Vec<&'static str>,
}

/// A secret that must never appear in logs or debug output.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    /// Get the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Resolved warehouse connection settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub account: String,
    pub user: String,
    pub credential: Credential,
    pub role: String,
    pub warehouse: String,
    pub database: String,
}

impl Settings {
    /// Resolve settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] listing every required setting
    /// that is absent or empty.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve settings through an arbitrary lookup function.
    ///
    /// `ACCOUNT`, `USER`, and `CREDENTIAL` are required. `ROLE`,
    /// `WAREHOUSE`, and `DATABASE` default when absent, but an
    /// explicitly empty `WAREHOUSE` or `DATABASE` is an error rather
    /// than silently falling back.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] listing every missing key.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let mut missing = Vec::new();

        let mut required = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let account = required("ACCOUNT");
        let user = required("USER");
        let credential = required("CREDENTIAL");

        let role = lookup("ROLE")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let warehouse = lookup("WAREHOUSE").unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string());
        let database = lookup("DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        if warehouse.is_empty() {
            missing.push("WAREHOUSE");
        }
        if database.is_empty() {
            missing.push("DATABASE");
        }

        if !missing.is_empty() {
            return Err(ConfigurationError { missing });
        }

        Ok(Self {
            account,
            user,
            credential: Credential::new(credential),
            role,
            warehouse,
            database,
        })
    }
}
