// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User profile and book list operations.

use bookmatch_core::BookmatchError;
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, Database};
use crate::models::{Book, BookId, Language, NewBook, NewUser, User, UserId, UserStatus};
use crate::queries::{now_utc_string, parse_enum, parse_ts};

/// Create a new user profile. Fails if the id is already registered.
pub async fn create_user(db: &Database, user: &NewUser) -> Result<(), BookmatchError> {
    let user = user.clone();
    db.connection()
        .call(move |conn| {
            let now = now_utc_string();
            conn.execute(
                "INSERT INTO users (user_id, username, first_name, status, language, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    user.id.0,
                    user.username,
                    user.first_name,
                    UserStatus::Active.to_string(),
                    user.language.to_string(),
                    now,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch a profile with its books in insertion order.
pub async fn get_user(db: &Database, id: UserId) -> Result<Option<User>, BookmatchError> {
    db.connection()
        .call(move |conn| Ok(read_user(conn, id.0)?))
        .await
        .map_err(map_tr_err)
}

/// Update the user's visibility status.
pub async fn set_status(
    db: &Database,
    id: UserId,
    status: UserStatus,
) -> Result<(), BookmatchError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE users SET status = ?1, updated_at = ?2 WHERE user_id = ?3",
                params![status.to_string(), now_utc_string(), id.0],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Update the user's language preference.
pub async fn set_language(
    db: &Database,
    id: UserId,
    language: Language,
) -> Result<(), BookmatchError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE users SET language = ?1, updated_at = ?2 WHERE user_id = ?3",
                params![language.to_string(), now_utc_string(), id.0],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Append a book to the user's list, returning the stored row.
pub async fn add_book(db: &Database, id: UserId, book: &NewBook) -> Result<Book, BookmatchError> {
    let book = book.clone();
    db.connection()
        .call(move |conn| {
            let now = now_utc_string();
            conn.execute(
                "INSERT INTO books (user_id, title, author, condition, added_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id.0,
                    book.title,
                    book.author,
                    book.condition.map(|c| c.to_string()),
                    now,
                ],
            )?;
            let book_id = conn.last_insert_rowid();
            Ok(Book {
                id: BookId(book_id),
                title: book.title,
                author: book.author,
                condition: book.condition,
                added_at: parse_ts(&now, 0)?,
            })
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a book by its stable id. Returns `false` when the book no longer
/// exists for that user.
pub async fn delete_book(
    db: &Database,
    id: UserId,
    book: BookId,
) -> Result<bool, BookmatchError> {
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "DELETE FROM books WHERE id = ?1 AND user_id = ?2",
                params![book.0, id.0],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Pick one user uniformly at random among active users with at least one
/// book whose id is not in `exclude`.
pub async fn pick_random_eligible(
    db: &Database,
    exclude: &[UserId],
) -> Result<Option<User>, BookmatchError> {
    let exclude: Vec<i64> = exclude.iter().map(|u| u.0).collect();
    db.connection()
        .call(move |conn| {
            let sql = if exclude.is_empty() {
                "SELECT user_id FROM users
                 WHERE status = 'active'
                   AND EXISTS (SELECT 1 FROM books b WHERE b.user_id = users.user_id)
                 ORDER BY RANDOM() LIMIT 1"
                    .to_string()
            } else {
                let placeholders = vec!["?"; exclude.len()].join(", ");
                format!(
                    "SELECT user_id FROM users
                     WHERE status = 'active'
                       AND user_id NOT IN ({placeholders})
                       AND EXISTS (SELECT 1 FROM books b WHERE b.user_id = users.user_id)
                     ORDER BY RANDOM() LIMIT 1"
                )
            };
            let mut stmt = conn.prepare(&sql)?;
            let picked = stmt
                .query_row(rusqlite::params_from_iter(exclude.iter()), |row| {
                    row.get::<_, i64>(0)
                })
                .optional()?;
            match picked {
                Some(id) => Ok(read_user(conn, id)?),
                None => Ok(None),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Build a full `User` (profile row plus books) inside a connection closure.
fn read_user(conn: &rusqlite::Connection, id: i64) -> rusqlite::Result<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT user_id, username, first_name, status, language, created_at, updated_at
         FROM users WHERE user_id = ?1",
    )?;
    let profile = stmt
        .query_row(params![id], |row| {
            let status: String = row.get(3)?;
            let language: String = row.get(4)?;
            let created_at: String = row.get(5)?;
            let updated_at: String = row.get(6)?;
            Ok(User {
                id: UserId(row.get(0)?),
                username: row.get(1)?,
                first_name: row.get(2)?,
                status: parse_enum(&status, 3)?,
                language: parse_enum(&language, 4)?,
                books: Vec::new(),
                created_at: parse_ts(&created_at, 5)?,
                updated_at: parse_ts(&updated_at, 6)?,
            })
        })
        .optional()?;

    let Some(mut user) = profile else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(
        "SELECT id, title, author, condition, added_at
         FROM books WHERE user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![id], |row| {
        let condition: Option<String> = row.get(3)?;
        let added_at: String = row.get(4)?;
        Ok(Book {
            id: BookId(row.get(0)?),
            title: row.get(1)?,
            author: row.get(2)?,
            condition: condition.as_deref().map(|c| parse_enum(c, 3)).transpose()?,
            added_at: parse_ts(&added_at, 4)?,
        })
    })?;
    for row in rows {
        user.books.push(row?);
    }
    Ok(Some(user))
}
