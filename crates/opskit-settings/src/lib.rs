//! Settings binding for opskit services
//!
//! A thin layer over the `config` crate: each settings type names its own
//! configuration section and binds from whatever sources the application
//! composed (files, environment, overrides). A missing section is not an
//! error — the defaults apply; a malformed section is.
//!
//! ```
//! use config::Config;
//! use opskit_settings::{load_settings, Settings};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct DatabaseSettings {
//!     url: String,
//!     pool_size: u32,
//! }
//!
//! impl Settings for DatabaseSettings {
//!     fn configuration_name() -> &'static str {
//!         "Database"
//!     }
//! }
//!
//! let config = Config::builder()
//!     .set_override("Database.url", "postgres://localhost")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let settings: DatabaseSettings = load_settings(&config).unwrap();
//! assert_eq!(settings.url, "postgres://localhost");
//! ```

use config::{Config, ConfigError};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Result type alias using SettingsError
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while binding or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The section exists but could not be deserialized into the settings type
    #[error("Settings section '{section}' could not be bound: {source}")]
    Bind {
        section: &'static str,
        #[source]
        source: ConfigError,
    },

    /// A required setting has no value
    #[error(
        "Required setting '{property}' of '{settings}' is not defined. \
         Add '{settings}:{property}' to the application configuration."
    )]
    Undefined {
        settings: &'static str,
        property: &'static str,
    },
}

/// Capability for types that bind from a named configuration section
pub trait Settings: DeserializeOwned + Default {
    /// The configuration section this type binds from
    fn configuration_name() -> &'static str;
}

/// Bind a settings type from its configuration section
///
/// A missing section yields `T::default()`; a present but malformed section
/// yields [`SettingsError::Bind`].
pub fn load_settings<T: Settings>(config: &Config) -> Result<T> {
    match config.get::<T>(T::configuration_name()) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::NotFound(_)) => Ok(T::default()),
        Err(source) => Err(SettingsError::Bind {
            section: T::configuration_name(),
            source,
        }),
    }
}

/// Enforce that a required setting carries a value
///
/// `None`, empty and whitespace-only values count as undefined. On success
/// the trimmed-of-nothing original value is returned, so call sites can chain
/// the check into their constructors.
pub fn require_defined<T: Settings>(
    value: Option<&str>,
    property: &'static str,
) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(SettingsError::Undefined {
            settings: T::configuration_name(),
            property,
        }),
    }
}
