// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confirmed match records.
//!
//! The pair is stored normalized (`user_a < user_b`) so the uniqueness
//! constraint guarantees at most one match per unordered pair no matter
//! which side's like lands first, including the near-simultaneous case.

use bookmatch_core::BookmatchError;
use rusqlite::params;

use crate::database::{map_tr_err, Database};
use crate::models::{Match, MatchOutcome, MatchStatus, UserId};
use crate::queries::{now_utc_string, parse_enum, parse_ts};

/// Atomically create a match for the pair unless one already exists.
///
/// `INSERT OR IGNORE` against the unique pair index makes a lost race
/// indistinguishable from a pre-existing match: both report `AlreadyExists`.
pub async fn create_if_absent(
    db: &Database,
    a: UserId,
    b: UserId,
) -> Result<MatchOutcome, BookmatchError> {
    let (lo, hi) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO matches (user_a, user_b, status, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![lo, hi, MatchStatus::Active.to_string(), now_utc_string()],
            )?;
            if changed > 0 {
                return Ok(MatchOutcome::Created(conn.last_insert_rowid()));
            }
            let id = conn.query_row(
                "SELECT id FROM matches WHERE user_a = ?1 AND user_b = ?2",
                params![lo, hi],
                |row| row.get::<_, i64>(0),
            )?;
            Ok(MatchOutcome::AlreadyExists(id))
        })
        .await
        .map_err(map_tr_err)
}

/// Active matches involving the given user, newest first.
pub async fn matches_for(db: &Database, user: UserId) -> Result<Vec<Match>, BookmatchError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_a, user_b, status, created_at FROM matches
                 WHERE (user_a = ?1 OR user_b = ?1) AND status = 'active'
                 ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt.query_map(params![user.0], |row| {
                let status: String = row.get(3)?;
                let created_at: String = row.get(4)?;
                Ok(Match {
                    id: row.get(0)?,
                    users: [UserId(row.get(1)?), UserId(row.get(2)?)],
                    status: parse_enum(&status, 3)?,
                    created_at: parse_ts(&created_at, 4)?,
                })
            })?;
            let mut matches = Vec::new();
            for row in rows {
                matches.push(row?);
            }
            Ok(matches)
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

    #[tokio::test]
    async fn create_is_symmetric_over_pair_order() {
        let (db, _dir) = setup_db().await;

        let first = create_if_absent(&db, UserId(2), UserId(1)).await.unwrap();
        let MatchOutcome::Created(id) = first else {
            panic!("expected Created, got {first:?}");
        };

        // Reversed order hits the same normalized pair.
        let second = create_if_absent(&db, UserId(1), UserId(2)).await.unwrap();
        assert_eq!(second, MatchOutcome::AlreadyExists(id));

        assert_eq!(matches_for(&db, UserId(1)).await.unwrap().len(), 1);
        assert_eq!(matches_for(&db, UserId(2)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creation_yields_a_single_match() {
        let (db, _dir) = setup_db().await;
        let db = std::sync::Arc::new(db);

        let a = {
            let db = db.clone();
            tokio::spawn(async move { create_if_absent(&db, UserId(1), UserId(2)).await })
        };
        let b = {
            let db = db.clone();
            tokio::spawn(async move { create_if_absent(&db, UserId(2), UserId(1)).await })
        };
        let (ra, rb) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());

        let created = [ra, rb]
            .iter()
            .filter(|o| matches!(o, MatchOutcome::Created(_)))
            .count();
        assert_eq!(created, 1, "exactly one side observes creation");
        assert_eq!(matches_for(&db, UserId(1)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn matches_for_returns_only_involved_pairs() {
        let (db, _dir) = setup_db().await;
        create_if_absent(&db, UserId(1), UserId(2)).await.unwrap();
        create_if_absent(&db, UserId(3), UserId(4)).await.unwrap();

        let mine = matches_for(&db, UserId(1)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].other(UserId(1)), UserId(2));

        assert!(matches_for(&db, UserId(5)).await.unwrap().is_empty());
    }
}
