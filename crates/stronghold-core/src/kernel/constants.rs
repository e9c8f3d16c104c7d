/// Application name
pub const APP_NAME: &str = "Stronghold";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current kernel API version, checked against every module's declared
/// compatible ranges at registration time
pub const API_VERSION: &str = "0.1.0";

/// Default host configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "stronghold.toml";
