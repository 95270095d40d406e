//! Error types for Libdesk server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 3,
    BadValue = 18,
    NoSuchData = 20,
    BookExists = 30,
    NoSuchBook = 31,
    OutOfBooks = 32,
    ReturnFirst = 33,
    NoSuchSubject = 34,
    NoSuchBorrow = 35,
    AlreadyReturned = 36,
}

/// Lending outcomes that reject an operation without anything having gone wrong.
///
/// Each one is a precondition the caller violated; they are meant to be shown to
/// the librarian, never treated as a server fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LendingError {
    #[error("That book is already added")]
    BookExists,

    #[error("No book with that title")]
    BookNotFound,

    #[error("Out of that book")]
    OutOfBooks,

    #[error("Return the book you last borrowed")]
    ReturnFirst,

    #[error("No such subject")]
    SubjectNotFound,

    #[error("No such borrow record")]
    BorrowNotFound,

    #[error("That book was already returned")]
    AlreadyReturned,
}

impl LendingError {
    fn status_and_code(self) -> (StatusCode, ErrorCode) {
        match self {
            LendingError::BookExists => (StatusCode::CONFLICT, ErrorCode::BookExists),
            LendingError::BookNotFound => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook),
            LendingError::OutOfBooks => (StatusCode::CONFLICT, ErrorCode::OutOfBooks),
            LendingError::ReturnFirst => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::ReturnFirst)
            }
            LendingError::SubjectNotFound => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NoSuchSubject)
            }
            LendingError::BorrowNotFound => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBorrow),
            LendingError::AlreadyReturned => (StatusCode::CONFLICT, ErrorCode::AlreadyReturned),
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Lending(#[from] LendingError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    /// True for outcomes the caller is expected to handle and display.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AppError::Lending(_) | AppError::NotFound(_) | AppError::Validation(_)
        )
    }

    /// The lending outcome, if this error is one.
    pub fn lending(&self) -> Option<LendingError> {
        match self {
            AppError::Lending(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Lending(e) => {
                let (status, code) = e.status_and_code();
                (status, code, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
