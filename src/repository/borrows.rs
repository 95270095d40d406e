//! Borrow ledger repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, QueryBuilder, Sqlite, SqliteConnection};

use crate::{
    error::{AppError, AppResult},
    models::borrow::{Borrow, BorrowQuery, NewBorrow},
};

const BORROW_COLUMNS: &str = "id, borrower, borrower_class, book_title, librarian, \
                              borrow_date, return_date, is_returned, is_due";

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Sqlite>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get borrow by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrow> {
        sqlx::query_as::<_, Borrow>(&format!("SELECT {} FROM borrows WHERE id = ?", BORROW_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrow with id {} not found", id)))
    }

    /// List ledger entries, oldest first
    pub async fn list(&self, query: &BorrowQuery) -> AppResult<Vec<Borrow>> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {} FROM borrows WHERE 1=1",
            BORROW_COLUMNS
        ));

        if query.only_unreturned.unwrap_or(false) {
            builder.push(" AND is_returned = 0");
        }

        if query.only_overdue.unwrap_or(false) {
            builder.push(" AND is_due = 1 AND is_returned = 0");
        }

        builder.push(" ORDER BY id");

        let borrows = builder
            .build_query_as::<Borrow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(borrows)
    }

    /// Find a borrow inside a transaction
    pub async fn find(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<Option<Borrow>> {
        let borrow =
            sqlx::query_as::<_, Borrow>(&format!("SELECT {} FROM borrows WHERE id = ?", BORROW_COLUMNS))
                .bind(id)
                .fetch_optional(conn)
                .await?;
        Ok(borrow)
    }

    /// Most recent ledger entry for a borrower
    pub async fn latest_for_borrower(
        &self,
        conn: &mut SqliteConnection,
        borrower: &str,
    ) -> AppResult<Option<Borrow>> {
        let borrow = sqlx::query_as::<_, Borrow>(&format!(
            "SELECT {} FROM borrows WHERE borrower = ? ORDER BY id DESC LIMIT 1",
            BORROW_COLUMNS
        ))
        .bind(borrower)
        .fetch_optional(conn)
        .await?;
        Ok(borrow)
    }

    /// Count loans of a title that have not come back
    pub async fn count_outstanding(
        &self,
        conn: &mut SqliteConnection,
        book_title: &str,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM borrows WHERE book_title = ? AND is_returned = 0",
        )
        .bind(book_title)
        .fetch_one(conn)
        .await?;
        Ok(count)
    }

    /// Record a new, unreturned loan
    pub async fn create(&self, conn: &mut SqliteConnection, borrow: &NewBorrow) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO borrows (borrower, borrower_class, book_title, librarian,
                                 borrow_date, return_date, is_returned, is_due)
            VALUES (?, ?, ?, ?, ?, ?, 0, 0)
            RETURNING id
            "#,
        )
        .bind(&borrow.borrower)
        .bind(&borrow.borrower_class)
        .bind(&borrow.book_title)
        .bind(&borrow.librarian)
        .bind(borrow.borrow_date)
        .bind(borrow.return_date)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// Flip an outstanding loan to returned.
    ///
    /// Returns the borrowed title, or `None` when the id is unknown or the loan
    /// was already returned.
    pub async fn mark_returned(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<String>> {
        let title = sqlx::query_scalar::<_, String>(
            "UPDATE borrows SET is_returned = 1 WHERE id = ? AND is_returned = 0 RETURNING book_title",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(title)
    }

    /// Flag every outstanding loan due on or before `today`. Never clears the flag.
    pub async fn mark_overdue(&self, today: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE borrows SET is_due = 1 WHERE is_returned = 0 AND is_due = 0 AND return_date <= ?",
        )
        .bind(today)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
