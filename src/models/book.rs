//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    /// Normalized title, unique across the catalog
    pub title: String,
    pub subject: String,
    pub author: String,
    /// Copies currently on the shelf. Can go negative after a holdings
    /// correction below the number of outstanding loans.
    pub count: i64,
    /// Copies owned
    pub total_count: i64,
}

/// Catalog listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub count: i64,
    pub author: String,
}

/// Add book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Copies owned; re-adding an existing title with a different count corrects its holdings
    #[validate(range(min = 0, message = "Count cannot be negative"))]
    pub count: i64,
    pub subject: String,
    #[serde(default)]
    pub author: String,
}

/// What an add-book call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AddBookOutcome {
    Created { id: i64 },
    Updated { id: i64, count: i64, total_count: i64 },
}

impl AddBookOutcome {
    pub fn id(&self) -> i64 {
        match self {
            AddBookOutcome::Created { id } | AddBookOutcome::Updated { id, .. } => *id,
        }
    }
}

/// Catalog filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Exact subject to filter on
    pub subject: Option<String>,
    /// Only books with at least one copy on the shelf
    pub only_available: Option<bool>,
}
