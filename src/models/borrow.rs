//! Borrow (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Borrow ledger entry from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrow {
    pub id: i64,
    pub borrower: String,
    pub borrower_class: String,
    pub book_title: String,
    pub librarian: String,
    pub borrow_date: NaiveDate,
    /// Date the book is due back
    pub return_date: NaiveDate,
    pub is_returned: bool,
    /// Set by the overdue sweep once `return_date` has passed while unreturned
    pub is_due: bool,
}

/// Borrow request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBorrow {
    #[validate(length(min = 1, message = "Book title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Borrower name is required"))]
    pub borrower: String,
    /// Due date (YYYY-MM-DD). Defaults to today plus the configured loan length.
    pub return_date: Option<NaiveDate>,
    /// At most 4 characters once trimmed
    #[serde(default)]
    pub borrower_class: String,
    #[serde(default)]
    pub librarian: String,
}

/// Normalized row about to be inserted
#[derive(Debug, Clone)]
pub struct NewBorrow {
    pub borrower: String,
    pub borrower_class: String,
    pub book_title: String,
    pub librarian: String,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Ledger filters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BorrowQuery {
    /// Only loans not yet returned
    pub only_unreturned: Option<bool>,
    /// Only loans flagged overdue
    pub only_overdue: Option<bool>,
}
