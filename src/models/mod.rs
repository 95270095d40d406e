//! Data models for Libdesk

pub mod book;
pub mod borrow;
pub mod subject;

// Re-export commonly used types
pub use book::{AddBookOutcome, Book, BookQuery, BookSummary, CreateBook};
pub use borrow::{Borrow, BorrowQuery, CreateBorrow, NewBorrow};
pub use subject::Subject;
