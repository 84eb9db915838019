//! Error types for myorm

use thiserror::Error;

/// Result type alias for myorm operations
pub type DbResult<T> = Result<T, DbError>;

/// Error types for bootstrap and query execution
#[derive(Debug, Error)]
pub enum DbError {
    /// TCP connect or handshake failure
    #[error("Connection error: [{code}] {message}")]
    Connection { code: u16, message: String },

    /// Database provisioning or schema script failure
    #[error("Schema error in {context}: {message}")]
    Schema { context: String, message: String },

    /// Statement rejected at prepare time
    #[error("Prepare error: {0}")]
    Prepare(#[source] mysql_async::Error),

    /// Statement failed during execution
    #[error("Execute error: {0}")]
    Execute(#[source] mysql_async::Error),

    /// Insert or update called with no column assignments
    #[error("Empty payload: {0} needs at least one column assignment")]
    EmptyPayload(&'static str),

    /// JSON encoding for a column assignment failed
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Invalid or missing configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl DbError {
    /// Create a connection error from a driver error, keeping the server
    /// code when one exists
    pub(crate) fn connection(err: mysql_async::Error) -> Self {
        match &err {
            mysql_async::Error::Server(server) => Self::Connection {
                code: server.code,
                message: server.message.clone(),
            },
            other => Self::Connection {
                code: 0,
                message: other.to_string(),
            },
        }
    }

    /// Create a schema error naming the database or script it came from
    pub(crate) fn schema(context: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self::Schema {
            context: context.to_string(),
            message: message.into(),
        }
    }

    /// MySQL server error code, when the failure came from the server
    pub fn server_code(&self) -> Option<u16> {
        match self {
            Self::Connection { code, .. } if *code != 0 => Some(*code),
            Self::Prepare(mysql_async::Error::Server(server))
            | Self::Execute(mysql_async::Error::Server(server)) => Some(server.code),
            _ => None,
        }
    }

    /// Check if this is an empty payload error
    pub fn is_empty_payload(&self) -> bool {
        matches!(self, Self::EmptyPayload(_))
    }

    /// Check if this is a database provisioning or schema script error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shapes() {
        let err = DbError::Connection {
            code: 1045,
            message: "Access denied".to_string(),
        };
        assert_eq!(err.to_string(), "Connection error: [1045] Access denied");

        let err = DbError::EmptyPayload("insert");
        assert_eq!(
            err.to_string(),
            "Empty payload: insert needs at least one column assignment"
        );
        assert!(err.is_empty_payload());
    }

    #[test]
    fn test_schema_helper_carries_context() {
        let err = DbError::schema("sql/users.sql", "boom");
        assert!(err.is_schema());
        assert_eq!(err.to_string(), "Schema error in sql/users.sql: boom");
    }

    #[test]
    fn test_server_code_extraction() {
        let server = mysql_async::ServerError {
            code: 1064,
            message: "syntax".to_string(),
            state: "42000".to_string(),
        };
        let err = DbError::Execute(mysql_async::Error::Server(server));
        assert_eq!(err.server_code(), Some(1064));

        let err = DbError::Config("DB_USER is not set".to_string());
        assert_eq!(err.server_code(), None);
    }
}
