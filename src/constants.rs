//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "DesignKit";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "designkit";

/// Directory name under the platform config dir.
pub const APP_DATA_DIR: &str = "designkit";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "DESIGNKIT_CONFIG_DIR";

/// User agent sent with upstream completion requests.
pub const USER_AGENT: &str = concat!("designkit/", env!("CARGO_PKG_VERSION"));
