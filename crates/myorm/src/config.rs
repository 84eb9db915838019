//! Connection and bootstrap settings

use std::env;
use std::path::PathBuf;

use crate::error::{DbError, DbResult};

/// How reported errors are rendered.
///
/// `Development` keeps the full driver error text; `Production` reduces
/// output to a (code, message, timestamp) record. The mode travels inside
/// [`DbConfig`] and is handed to the reporter at construction time, so two
/// instances in one process can run in different modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    Development,
    Production,
}

/// Settings for [`crate::bootstrap::init`].
///
/// `schema_dir` is the directory whose `*.sql` files are applied after the
/// database is created and selected; it defaults to `./sql`.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub schema_dir: PathBuf,
    pub mode: ReportMode,
}

impl DbConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: 3306,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            schema_dir: PathBuf::from("./sql"),
            mode: ReportMode::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_schema_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = dir.into();
        self
    }

    pub fn with_mode(mut self, mode: ReportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build a config from the process environment.
    ///
    /// Reads `DB_HOST` (default `localhost`), `DB_PORT` (default 3306),
    /// `DB_USER`, `DB_PASSWORD` (default empty), `DB_NAME`, `DB_SCHEMA_DIR`
    /// (default `./sql`) and `DB_ENV` (`production` switches the report
    /// mode). `DB_USER` and `DB_NAME` are required.
    pub fn from_env() -> DbResult<Self> {
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = match env::var("DB_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| DbError::Config(format!("DB_PORT is not a port number: {raw}")))?,
            Err(_) => 3306,
        };
        let user =
            env::var("DB_USER").map_err(|_| DbError::Config("DB_USER is not set".to_string()))?;
        let password = env::var("DB_PASSWORD").unwrap_or_default();
        let database =
            env::var("DB_NAME").map_err(|_| DbError::Config("DB_NAME is not set".to_string()))?;
        let schema_dir = env::var("DB_SCHEMA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./sql"));
        let mode = match env::var("DB_ENV").as_deref() {
            Ok("production") => ReportMode::Production,
            _ => ReportMode::Development,
        };

        Ok(Self {
            host,
            port,
            user,
            password,
            database,
            schema_dir,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DbConfig::new("localhost", "root", "root", "accounts");
        assert_eq!(cfg.port, 3306);
        assert_eq!(cfg.schema_dir, PathBuf::from("./sql"));
        assert_eq!(cfg.mode, ReportMode::Development);
    }

    #[test]
    fn test_builder_overrides() {
        let cfg = DbConfig::new("db", "app", "secret", "shop")
            .with_port(3307)
            .with_schema_dir("./schema")
            .with_mode(ReportMode::Production);
        assert_eq!(cfg.port, 3307);
        assert_eq!(cfg.schema_dir, PathBuf::from("./schema"));
        assert_eq!(cfg.mode, ReportMode::Production);
    }

    // Sets and clears the DB_* variables itself; keep it the only test that
    // touches the environment so parallel runs stay deterministic.
    #[test]
    fn test_from_env_round_trip() {
        unsafe {
            env::remove_var("DB_USER");
            env::remove_var("DB_NAME");
        }
        let missing = DbConfig::from_env().unwrap_err();
        assert!(missing.is_config());

        unsafe {
            env::set_var("DB_HOST", "db.internal");
            env::set_var("DB_PORT", "3307");
            env::set_var("DB_USER", "app");
            env::set_var("DB_PASSWORD", "secret");
            env::set_var("DB_NAME", "shop");
            env::set_var("DB_SCHEMA_DIR", "./schema");
            env::set_var("DB_ENV", "production");
        }

        let cfg = DbConfig::from_env().unwrap();
        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.port, 3307);
        assert_eq!(cfg.user, "app");
        assert_eq!(cfg.password, "secret");
        assert_eq!(cfg.database, "shop");
        assert_eq!(cfg.schema_dir, PathBuf::from("./schema"));
        assert_eq!(cfg.mode, ReportMode::Production);

        unsafe {
            env::set_var("DB_PORT", "not-a-port");
        }
        let bad_port = DbConfig::from_env().unwrap_err();
        assert!(bad_port.is_config());

        unsafe {
            for key in [
                "DB_HOST",
                "DB_PORT",
                "DB_USER",
                "DB_PASSWORD",
                "DB_NAME",
                "DB_SCHEMA_DIR",
                "DB_ENV",
            ] {
                env::remove_var(key);
            }
        }
    }
}
