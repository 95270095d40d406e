//! Subjects repository

use sqlx::{Pool, Sqlite, SqliteConnection};

use crate::{error::AppResult, models::subject::Subject};

#[derive(Clone)]
pub struct SubjectsRepository {
    pool: Pool<Sqlite>,
}

impl SubjectsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all subjects
    pub async fn list(&self) -> AppResult<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>("SELECT subject FROM subjects ORDER BY subject")
            .fetch_all(&self.pool)
            .await?;
        Ok(subjects)
    }

    /// Exact-match lookup
    pub async fn exists(&self, conn: &mut SqliteConnection, subject: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM subjects WHERE subject = ?)")
                .bind(subject)
                .fetch_one(conn)
                .await?;
        Ok(exists)
    }
}
