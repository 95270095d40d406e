//! Shared fixtures: a migrated SQLite database in a temporary directory.

#![allow(dead_code)]

use chrono::NaiveDate;
use libdesk_server::{
    config::{AppConfig, DatabaseConfig, LendingConfig},
    models::{CreateBook, CreateBorrow},
    repository::{self, Repository},
    services::Services,
    AppState,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// Keeps the temporary directory alive for as long as the services are used.
pub struct TestLibrary {
    pub dir: TempDir,
    pub pool: SqlitePool,
    pub services: Services,
}

pub async fn library() -> TestLibrary {
    library_with(LendingConfig::default()).await
}

pub async fn library_with(lending: LendingConfig) -> TestLibrary {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("libdesk.sqlite").display()),
        max_connections: 5,
        min_connections: 1,
    };

    let pool = repository::connect(&config).await.unwrap();
    repository::migrate(&pool).await.unwrap();

    let services = Services::new(Repository::new(pool.clone()), lending);
    TestLibrary {
        dir,
        pool,
        services,
    }
}

pub fn state(services: Services) -> AppState {
    AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(services),
    }
}

pub fn book(title: &str, count: i64, subject: &str, author: &str) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        count,
        subject: subject.to_string(),
        author: author.to_string(),
    }
}

pub fn borrow(title: &str, borrower: &str, return_date: NaiveDate) -> CreateBorrow {
    CreateBorrow {
        title: title.to_string(),
        borrower: borrower.to_string(),
        return_date: Some(return_date),
        borrower_class: "4B".to_string(),
        librarian: "mrs brown".to_string(),
    }
}
