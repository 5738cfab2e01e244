// Error handling framework
// Domain failures are a tagged (kind, message) pair mapped to an HTTP
// response in exactly one place; infrastructure failures get their own
// enums and never leak into the domain taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// The five generic failure kinds, each bound to a fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
}

impl ErrorKind {
    /// Transport status code bound to this kind.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
        }
    }

    /// Stable machine-readable code for response bodies.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
        }
    }
}

/// A domain error raised at the point of detection and propagated unmodified
/// up to the framework boundary.
///
/// Constructors never fail. Per-domain constructors supply the default
/// message; `with_message` lets the failure site override it without
/// changing the kind.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Replace the default message, keeping the kind and status code.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    // Generic kinds with their default messages

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Resource not found")
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden, "Access forbidden")
    }

    pub fn bad_request() -> Self {
        Self::new(ErrorKind::BadRequest, "Bad request")
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, "Unauthorized")
    }

    pub fn conflict() -> Self {
        Self::new(ErrorKind::Conflict, "Resource conflict")
    }

    // User domain

    pub fn user_not_found() -> Self {
        Self::new(ErrorKind::NotFound, "User not found")
    }

    pub fn user_not_found_by_id(user_id: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("User with id '{user_id}' not found"),
        )
    }

    pub fn user_already_exists() -> Self {
        Self::new(ErrorKind::Conflict, "User already exists")
    }

    // Forum domain

    pub fn forum_not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Forum not found")
    }

    pub fn forum_not_found_by_id(forum_id: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Forum with id '{forum_id}' not found"),
        )
    }

    // Post domain

    pub fn post_not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Post not found")
    }

    pub fn post_not_found_by_id(post_id: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Post with id '{post_id}' not found"),
        )
    }

    // Room domain

    pub fn room_not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Room not found")
    }

    pub fn room_not_found_by_id(room_id: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Room with id '{room_id}' not found"),
        )
    }

    pub fn room_full() -> Self {
        Self::new(ErrorKind::BadRequest, "Room is full")
    }

    // Webhook domain

    pub fn webhook_verification_failed() -> Self {
        Self::new(ErrorKind::BadRequest, "Webhook verification failed")
    }

    pub fn webhook_handler_failed() -> Self {
        Self::new(ErrorKind::BadRequest, "Webhook handler error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "code": self.kind.code(),
            "message": self.message,
        });
        (self.kind.status(), Json(body)).into_response()
    }
}

/// Database-specific errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Database health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate key violation: {0}")]
    DuplicateKey(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateKey(db_err.message().to_string()),
                        "23503" => DatabaseError::ForeignKeyViolation(db_err.message().to_string()),
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}
