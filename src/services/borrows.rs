//! Borrow ledger views and the overdue sweep

use chrono::{Local, NaiveDate};

use crate::{
    error::AppResult,
    models::borrow::{Borrow, BorrowQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the ledger. Overdue flags are refreshed first, so the listing is
    /// always current as of today.
    pub async fn list_borrows(&self, query: &BorrowQuery) -> AppResult<Vec<Borrow>> {
        self.sweep_overdue(Local::now().date_naive()).await?;
        self.repository.borrows.list(query).await
    }

    /// Get borrow by ID
    pub async fn get_borrow(&self, id: i64) -> AppResult<Borrow> {
        self.repository.borrows.get_by_id(id).await
    }

    /// Mark unreturned loans due on or before `today` as overdue.
    ///
    /// Monotonic: the flag is only ever set, so repeated sweeps converge.
    pub async fn sweep_overdue(&self, today: NaiveDate) -> AppResult<u64> {
        let flagged = self.repository.borrows.mark_overdue(today).await?;
        if flagged > 0 {
            tracing::debug!("Overdue sweep flagged {} loan(s) as of {}", flagged, today);
        }
        Ok(flagged)
    }
}
