//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values count as unset.
//! - Resolution never fails; invalid values surface later at use sites
//!   (`init_logging` rejects unknown levels).

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "FITTRACK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "FITTRACK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FITTRACK_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "fittrack.sqlite3";

/// Where the document lives and how logging is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `FITTRACK_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: non_blank(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let vars = HashMap::from([(ENV_DB_PATH, "   "), (ENV_LOG_DIR, "")]);
        let config = CoreConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config, CoreConfig::default());
        assert!(config.db_path.ends_with("fittrack.sqlite3"));
    }

    #[test]
    fn explicit_values_are_trimmed_and_used() {
        let vars = HashMap::from([
            (ENV_DB_PATH, " /data/fit.db "),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "/var/log/fittrack"),
        ]);
        let config = CoreConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.db_path, PathBuf::from("/data/fit.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/fittrack")));
    }
}
