//! Error reporting shared by bootstrap and the executor
//!
//! One reporter instance is injected into both halves of the crate, so an
//! application decides once where database failures go. Reporting never
//! replaces propagation: every reported error is still returned as `Err`.

use std::fmt;

use chrono::{DateTime, Local};

use crate::config::ReportMode;
use crate::error::DbError;

/// What a reporter records about a failure: the server error code when one
/// exists, the rendered message and the local wall-clock time.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub code: Option<u16>,
    pub message: String,
    pub at: DateTime<Local>,
}

impl ErrorReport {
    pub fn of(err: &DbError) -> Self {
        Self {
            code: err.server_code(),
            message: err.to_string(),
            at: Local::now(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self.code {
            Some(code) => code.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "[ {} ]: {} : {}",
            self.at.format("%m-%d-%Y %H:%M:%S"),
            code,
            self.message
        )
    }
}

/// Sink for database failures.
pub trait ErrorReporter: Send + Sync {
    /// A failure that aborts bootstrap.
    fn fatal(&self, err: &DbError);

    /// A failed statement during normal operation.
    fn failure(&self, err: &DbError) {
        tracing::warn!(error = %err, "statement failed");
    }
}

/// Discards every report. Useful in tests and when the embedding
/// application already observes errors on the `Result` path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn fatal(&self, _err: &DbError) {}
    fn failure(&self, _err: &DbError) {}
}

/// Emits reports through `tracing`, shaped by [`ReportMode`].
///
/// Development mode logs the full error text; production mode logs the
/// (code, message, timestamp) record and nothing more.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter {
    mode: ReportMode,
}

impl TracingReporter {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }
}

impl ErrorReporter for TracingReporter {
    fn fatal(&self, err: &DbError) {
        match self.mode {
            ReportMode::Development => {
                tracing::error!(error = %err, "database error");
            }
            ReportMode::Production => {
                let report = ErrorReport::of(err);
                tracing::error!(
                    code = report.code,
                    message = %report.message,
                    at = %report.at.format("%m-%d-%Y %H:%M:%S"),
                    "database error"
                );
            }
        }
    }

    fn failure(&self, err: &DbError) {
        match self.mode {
            ReportMode::Development => {
                tracing::warn!(error = %err, "statement failed");
            }
            ReportMode::Production => {
                let report = ErrorReport::of(err);
                tracing::warn!(code = report.code, message = %report.message, "statement failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_captures_server_code() {
        let server = mysql_async::ServerError {
            code: 1045,
            message: "Access denied".to_string(),
            state: "28000".to_string(),
        };
        let err = DbError::Execute(mysql_async::Error::Server(server));
        let report = ErrorReport::of(&err);
        assert_eq!(report.code, Some(1045));
        assert!(report.message.contains("Access denied"));
    }

    #[test]
    fn test_report_display_shape() {
        let err = DbError::Config("DB_NAME is not set".to_string());
        let line = ErrorReport::of(&err).to_string();
        assert!(line.starts_with("[ "));
        assert!(line.contains(" ]: - : Config error: DB_NAME is not set"));
    }
}
