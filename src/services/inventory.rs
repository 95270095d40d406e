//! Inventory transactions: adding books, lending and taking them back.
//!
//! Every operation runs its read-check-write sequence inside one database
//! transaction that opens with a write, so the SQLite write lock is held before
//! anything is read. Borrow and return open with their guarded write; adding a
//! book opens with a no-op write on the title. Concurrent calls then queue on
//! the busy timeout instead of trusting a stale count or failing to upgrade.

use chrono::{Days, Local};

use crate::{
    config::LendingConfig,
    error::{AppError, AppResult, LendingError},
    models::{
        book::{AddBookOutcome, CreateBook},
        borrow::{CreateBorrow, NewBorrow},
    },
    normalize::normalize_name,
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
    lending: LendingConfig,
}

impl InventoryService {
    pub fn new(repository: Repository, lending: LendingConfig) -> Self {
        Self { repository, lending }
    }

    /// Add a title to the catalog, or correct the holdings of one already there.
    ///
    /// Re-adding an existing title with a different `count` sets `total_count`
    /// to it and recomputes the shelf count as `count - outstanding loans`.
    /// Re-adding with the same count is rejected as a duplicate.
    pub async fn add_book(&self, data: &CreateBook) -> AppResult<AddBookOutcome> {
        let title = normalize_name(&data.title);
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if data.count < 0 {
            return Err(AppError::Validation("Count cannot be negative".to_string()));
        }

        let mut tx = self.repository.begin().await?;

        self.repository.books.lock_title(&mut *tx, &title).await?;
        let existing = self.repository.books.find_by_title(&mut *tx, &title).await?;

        let outcome = match existing {
            None => {
                if !self.repository.subjects.exists(&mut *tx, &data.subject).await? {
                    return Err(LendingError::SubjectNotFound.into());
                }

                let id = self
                    .repository
                    .books
                    .create(&mut *tx, &title, &data.subject, data.author.trim(), data.count)
                    .await?;

                tracing::info!("Added book id={} \"{}\" ({} copies)", id, title, data.count);
                AddBookOutcome::Created { id }
            }
            Some(book) if book.total_count != data.count => {
                let outstanding = self
                    .repository
                    .borrows
                    .count_outstanding(&mut *tx, &book.title)
                    .await?;
                let count = data.count - outstanding;

                if count < 0 {
                    tracing::warn!(
                        "Book id={} now owns {} copies but {} are on loan; shelf count is {}",
                        book.id, data.count, outstanding, count
                    );
                }

                self.repository
                    .books
                    .set_counts(&mut *tx, book.id, count, data.count)
                    .await?;

                tracing::info!(
                    "Corrected holdings of book id={}: total {} -> {}",
                    book.id, book.total_count, data.count
                );
                AddBookOutcome::Updated {
                    id: book.id,
                    count,
                    total_count: data.count,
                }
            }
            Some(_) => return Err(LendingError::BookExists.into()),
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Lend a copy of a book.
    ///
    /// Fails with `BookNotFound`, then `OutOfBooks`, then `ReturnFirst` when the
    /// borrower's latest loan is still out.
    pub async fn borrow_book(&self, data: &CreateBorrow) -> AppResult<i64> {
        let title = normalize_name(&data.title);
        let borrower = normalize_name(&data.borrower);
        let librarian = normalize_name(&data.librarian);

        if borrower.is_empty() {
            return Err(AppError::Validation("Borrower name is required".to_string()));
        }

        let borrower_class = data.borrower_class.trim();
        if borrower_class.chars().count() > 4 {
            return Err(AppError::Validation(
                "Class must be at most 4 characters".to_string(),
            ));
        }

        let today = Local::now().date_naive();
        let return_date = match data.return_date {
            Some(date) => date,
            None => today
                .checked_add_days(Days::new(u64::from(self.lending.max_loan_days)))
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "Loan length of {} days is out of range",
                        self.lending.max_loan_days
                    ))
                })?,
        };

        let mut tx = self.repository.begin().await?;

        if self.repository.books.take_copy(&mut *tx, &title).await?.is_none() {
            let missing = self
                .repository
                .books
                .find_by_title(&mut *tx, &title)
                .await?
                .is_none();
            return Err(if missing {
                LendingError::BookNotFound
            } else {
                LendingError::OutOfBooks
            }
            .into());
        }

        let latest = self
            .repository
            .borrows
            .latest_for_borrower(&mut *tx, &borrower)
            .await?;
        if latest.is_some_and(|b| !b.is_returned) {
            // Dropping the transaction puts the copy back.
            return Err(LendingError::ReturnFirst.into());
        }

        let borrow = NewBorrow {
            borrower,
            borrower_class: borrower_class.to_string(),
            book_title: title,
            librarian,
            borrow_date: today,
            return_date,
        };
        let id = self.repository.borrows.create(&mut *tx, &borrow).await?;

        tx.commit().await?;

        tracing::info!(
            "Borrow id={}: \"{}\" lent to {} until {}",
            id, borrow.book_title, borrow.borrower, borrow.return_date
        );
        Ok(id)
    }

    /// Take a book back. A second return of the same loan fails with
    /// `AlreadyReturned` and leaves the shelf count alone.
    pub async fn return_book(&self, borrow_id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;

        let Some(title) = self
            .repository
            .borrows
            .mark_returned(&mut *tx, borrow_id)
            .await?
        else {
            let known = self.repository.borrows.find(&mut *tx, borrow_id).await?.is_some();
            return Err(if known {
                LendingError::AlreadyReturned
            } else {
                LendingError::BorrowNotFound
            }
            .into());
        };

        self.repository.books.put_back_copy(&mut *tx, &title).await?;

        tx.commit().await?;

        tracing::info!("Borrow id={}: \"{}\" returned", borrow_id, title);
        Ok(())
    }
}
