// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the bookmatch store traits.

use async_trait::async_trait;
use tracing::debug;

use bookmatch_config::model::StorageConfig;
use bookmatch_core::types::{
    Book, BookId, Decision, DecisionAction, HealthStatus, Language, Match, MatchOutcome, NewBook,
    NewUser, User, UserId, UserStatus,
};
use bookmatch_core::{Adapter, BookmatchError, DecisionStore, MatchStore, UserStore};

use crate::database::{map_tr_err, Database};
use crate::queries;

/// SQLite-backed storage implementing [`UserStore`], [`DecisionStore`], and
/// [`MatchStore`].
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. Opening runs migrations and applies PRAGMAs.
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    /// Open the database at the configured path and run pending migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, BookmatchError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite storage ready");
        Ok(Self { db })
    }

    /// The underlying database handle (for tests and maintenance commands).
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl Adapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn health_check(&self) -> Result<HealthStatus, BookmatchError> {
        self.db
            .connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), BookmatchError> {
        self.db.close().await
    }
}

#[async_trait]
impl UserStore for SqliteStorage {
    async fn create_user(&self, user: &NewUser) -> Result<(), BookmatchError> {
        queries::users::create_user(&self.db, user).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, BookmatchError> {
        queries::users::get_user(&self.db, id).await
    }

    async fn set_status(&self, id: UserId, status: UserStatus) -> Result<(), BookmatchError> {
        queries::users::set_status(&self.db, id, status).await
    }

    async fn set_language(&self, id: UserId, language: Language) -> Result<(), BookmatchError> {
        queries::users::set_language(&self.db, id, language).await
    }

    async fn add_book(&self, id: UserId, book: &NewBook) -> Result<Book, BookmatchError> {
        queries::users::add_book(&self.db, id, book).await
    }

    async fn delete_book(&self, id: UserId, book: BookId) -> Result<bool, BookmatchError> {
        queries::users::delete_book(&self.db, id, book).await
    }

    async fn pick_random_eligible(
        &self,
        exclude: &[UserId],
    ) -> Result<Option<User>, BookmatchError> {
        queries::users::pick_random_eligible(&self.db, exclude).await
    }
}

#[async_trait]
impl DecisionStore for SqliteStorage {
    async fn record(&self, decision: &Decision) -> Result<bool, BookmatchError> {
        queries::decisions::record(&self.db, decision).await
    }

    async fn exists(
        &self,
        from: UserId,
        to: UserId,
        action: DecisionAction,
    ) -> Result<bool, BookmatchError> {
        queries::decisions::exists(&self.db, from, to, action).await
    }

    async fn decided_user_ids(&self, from: UserId) -> Result<Vec<UserId>, BookmatchError> {
        queries::decisions::decided_user_ids(&self.db, from).await
    }
}

#[async_trait]
impl MatchStore for SqliteStorage {
    async fn create_if_absent(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<MatchOutcome, BookmatchError> {
        queries::matches::create_if_absent(&self.db, a, b).await
    }

    async fn matches_for(&self, user: UserId) -> Result<Vec<Match>, BookmatchError> {
        queries::matches::matches_for(&self.db, user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    async fn open_storage(dir: &tempfile::TempDir) -> SqliteStorage {
        let db_path = dir.path().join("adapter.db");
        SqliteStorage::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn open_creates_database_file() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("adapter.db");
        let _storage = SqliteStorage::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let dir = tempdir().unwrap();
        let storage = open_storage(&dir).await;
        assert_eq!(storage.name(), "sqlite");
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn full_lifecycle_through_traits() {
        let dir = tempdir().unwrap();
        let storage = open_storage(&dir).await;

        let alice = NewUser {
            id: UserId(1),
            username: Some("alice".into()),
            first_name: "Alice".into(),
            language: Language::En,
        };
        let bob = NewUser {
            id: UserId(2),
            username: None,
            first_name: "Bob".into(),
            language: Language::Ru,
        };
        storage.create_user(&alice).await.unwrap();
        storage.create_user(&bob).await.unwrap();

        let book = NewBook {
            title: "Solaris".into(),
            author: "Stanisław Lem".into(),
            condition: None,
        };
        storage.add_book(UserId(1), &book).await.unwrap();
        storage.add_book(UserId(2), &book).await.unwrap();

        // Mutual likes through the trait objects.
        let like_ab = Decision {
            from_user: UserId(1),
            to_user: UserId(2),
            action: DecisionAction::Like,
        };
        let like_ba = Decision {
            from_user: UserId(2),
            to_user: UserId(1),
            action: DecisionAction::Like,
        };
        assert!(storage.record(&like_ab).await.unwrap());
        assert!(storage.record(&like_ba).await.unwrap());

        let outcome = storage.create_if_absent(UserId(1), UserId(2)).await.unwrap();
        assert!(matches!(outcome, MatchOutcome::Created(_)));

        let matches = storage.matches_for(UserId(2)).await.unwrap();
        assert_eq!(matches.len(), 1);

        storage.shutdown().await.unwrap();
    }
}
