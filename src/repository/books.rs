//! Books repository for database operations

use sqlx::{Pool, QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, BookSummary},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, subject, author, count, total_count FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books filtered by subject and availability
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let mut builder =
            QueryBuilder::<Sqlite>::new("SELECT id, title, subject, count, author FROM books WHERE 1=1");

        if let Some(subject) = query.subject.as_deref().filter(|s| !s.is_empty()) {
            builder.push(" AND subject = ").push_bind(subject.to_string());
        }

        if query.only_available.unwrap_or(false) {
            builder.push(" AND count > 0");
        }

        builder.push(" ORDER BY id");

        let books = builder
            .build_query_as::<BookSummary>()
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// No-op write on the title's row, used to open a transaction that reads
    /// before it writes. SQLite hands out the write lock on the first write
    /// statement, matched rows or not, and the busy timeout applies to it.
    pub async fn lock_title(&self, conn: &mut SqliteConnection, title: &str) -> AppResult<()> {
        sqlx::query("UPDATE books SET total_count = total_count WHERE title = ?")
            .bind(title)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Find a book by its normalized title
    pub async fn find_by_title(
        &self,
        conn: &mut SqliteConnection,
        title: &str,
    ) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, subject, author, count, total_count FROM books WHERE title = ?",
        )
        .bind(title)
        .fetch_optional(conn)
        .await?;
        Ok(book)
    }

    /// Create a book with every owned copy on the shelf
    pub async fn create(
        &self,
        conn: &mut SqliteConnection,
        title: &str,
        subject: &str,
        author: &str,
        count: i64,
    ) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (title, subject, author, count, total_count)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(subject)
        .bind(author)
        .bind(count)
        .bind(count)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Overwrite shelf and owned counts
    pub async fn set_counts(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
        count: i64,
        total_count: i64,
    ) -> AppResult<()> {
        sqlx::query("UPDATE books SET count = ?, total_count = ? WHERE id = ?")
            .bind(count)
            .bind(total_count)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Take one copy off the shelf.
    ///
    /// Returns the book id, or `None` when the title is unknown or no copy is left.
    /// The guard lives in the statement, so the count never drops below zero.
    pub async fn take_copy(
        &self,
        conn: &mut SqliteConnection,
        title: &str,
    ) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            "UPDATE books SET count = count - 1 WHERE title = ? AND count > 0 RETURNING id",
        )
        .bind(title)
        .fetch_optional(conn)
        .await?;
        Ok(id)
    }

    /// Put one copy back on the shelf
    pub async fn put_back_copy(&self, conn: &mut SqliteConnection, title: &str) -> AppResult<()> {
        sqlx::query("UPDATE books SET count = count + 1 WHERE title = ?")
            .bind(title)
            .execute(conn)
            .await?;
        Ok(())
    }
}
