// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Like/skip decision records.
//!
//! Decisions are append-only and idempotent: the unique index on
//! (from_user, to_user, action) plus `INSERT OR IGNORE` means a duplicate
//! identical decision never produces a second row.

use bookmatch_core::BookmatchError;
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, Database};
use crate::models::{Decision, DecisionAction, UserId};
use crate::queries::now_utc_string;

/// Insert-if-absent. Returns `true` when a new row was written.
pub async fn record(db: &Database, decision: &Decision) -> Result<bool, BookmatchError> {
    let decision = *decision;
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO decisions (from_user, to_user, action, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    decision.from_user.0,
                    decision.to_user.0,
                    decision.action.to_string(),
                    now_utc_string(),
                ],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Whether an identical decision already exists.
pub async fn exists(
    db: &Database,
    from: UserId,
    to: UserId,
    action: DecisionAction,
) -> Result<bool, BookmatchError> {
    db.connection()
        .call(move |conn| {
            let found = conn
                .query_row(
                    "SELECT 1 FROM decisions
                     WHERE from_user = ?1 AND to_user = ?2 AND action = ?3",
                    params![from.0, to.0, action.to_string()],
                    |_| Ok(()),
                )
                .optional()?;
            Ok(found.is_some())
        })
        .await
        .map_err(map_tr_err)
}

/// All users the given user has already acted on (likes and skips).
pub async fn decided_user_ids(db: &Database, from: UserId) -> Result<Vec<UserId>, BookmatchError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT DISTINCT to_user FROM decisions WHERE from_user = ?1",
            )?;
            let rows = stmt.query_map(params![from.0], |row| row.get::<_, i64>(0))?;
            let mut ids = Vec::new();
            for row in rows {
                ids.push(UserId(row?));
            }
            Ok(ids)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    fn like(from: i64, to: i64) -> Decision {
        Decision {
            from_user: UserId(from),
            to_user: UserId(to),
            action: DecisionAction::Like,
        }
    }

    fn skip(from: i64, to: i64) -> Decision {
        Decision {
            from_user: UserId(from),
            to_user: UserId(to),
            action: DecisionAction::Skip,
        }
    }

    #[tokio::test]
    async fn record_is_idempotent_per_tuple() {
        let (db, _dir) = setup_db().await;

        assert!(record(&db, &like(1, 2)).await.unwrap(), "first insert writes");
        assert!(
            !record(&db, &like(1, 2)).await.unwrap(),
            "identical decision is a no-op"
        );

        let ids = decided_user_ids(&db, UserId(1)).await.unwrap();
        assert_eq!(ids, vec![UserId(2)]);
    }

    #[tokio::test]
    async fn like_and_skip_are_distinct_tuples() {
        let (db, _dir) = setup_db().await;

        assert!(record(&db, &like(1, 2)).await.unwrap());
        assert!(record(&db, &skip(1, 2)).await.unwrap());

        assert!(exists(&db, UserId(1), UserId(2), DecisionAction::Like).await.unwrap());
        assert!(exists(&db, UserId(1), UserId(2), DecisionAction::Skip).await.unwrap());
        // Still a single entry in the exclusion set.
        let ids = decided_user_ids(&db, UserId(1)).await.unwrap();
        assert_eq!(ids.len(), 1);
    }

    #[tokio::test]
    async fn exists_is_directional() {
        let (db, _dir) = setup_db().await;
        record(&db, &like(1, 2)).await.unwrap();

        assert!(exists(&db, UserId(1), UserId(2), DecisionAction::Like).await.unwrap());
        assert!(!exists(&db, UserId(2), UserId(1), DecisionAction::Like).await.unwrap());
    }

    #[tokio::test]
    async fn decided_ids_cover_both_actions() {
        let (db, _dir) = setup_db().await;
        record(&db, &like(1, 2)).await.unwrap();
        record(&db, &skip(1, 3)).await.unwrap();

        let mut ids = decided_user_ids(&db, UserId(1)).await.unwrap();
        ids.sort();
        assert_eq!(ids, vec![UserId(2), UserId(3)]);
    }
}
