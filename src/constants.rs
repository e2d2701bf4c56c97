//! Centralized defaults, environment variable names, and display markers.

/// Default mysqldump executable, resolved through `PATH`.
pub const DEFAULT_MYSQLDUMP_PATH: &str = "mysqldump";

/// Default compression executable, resolved through `PATH`.
pub const DEFAULT_GZIP_PATH: &str = "gzip";

/// Extension gzip appends to the file it compresses.
pub const GZIP_EXTENSION: &str = "gz";

/// Environment variable consulted for the MySQL password.
pub const PASSWORD_ENV: &str = "MYSQLDUMP_RUNNER_PASSWORD";

/// Environment variable pointing at a TOML profile.
pub const CONFIG_ENV: &str = "MYSQLDUMP_RUNNER_CONFIG";

/// Environment variable that disables interactive prompts.
pub const NON_INTERACTIVE_ENV: &str = "MYSQLDUMP_RUNNER_NON_INTERACTIVE";

/// Replacement shown wherever a password would be printed.
pub const REDACTED: &str = "****";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
