//! Catalog queries

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, BookSummary},
        subject::Subject,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the seeded subjects
    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.repository.subjects.list().await
    }

    /// List books matching the subject and availability filters
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        self.repository.books.list(query).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }
}
