//! Repository for the `notes` table.
//!
//! Reads that need the category embedded join `categories` explicitly;
//! writes return the bare note row.

use notekeeper_core::types::DbId;
use sqlx::PgConnection;

use crate::models::note::{CreateNote, Note, NoteWithCategory, NoteWithCategoryRow, UpdateNote};

/// Column list for bare notes queries.
const COLUMNS: &str = "id, title, content, category_id";

/// Select list for notes joined with their category (`n` = notes, `c` = categories).
const JOINED_COLUMNS: &str =
    "n.id, n.title, n.content, c.id AS category_id, c.name AS category_name";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes with their categories, in insertion order.
    pub async fn list_with_category(
        conn: &mut PgConnection,
    ) -> Result<Vec<NoteWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM notes n
             JOIN categories c ON c.id = n.category_id
             ORDER BY n.id ASC"
        );
        let rows = sqlx::query_as::<_, NoteWithCategoryRow>(&query)
            .fetch_all(conn)
            .await?;
        Ok(rows.into_iter().map(NoteWithCategory::from).collect())
    }

    /// Find a note by ID with its category.
    pub async fn find_with_category(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<NoteWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM notes n
             JOIN categories c ON c.id = n.category_id
             WHERE n.id = $1"
        );
        let row = sqlx::query_as::<_, NoteWithCategoryRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row.map(NoteWithCategory::from))
    }

    /// Find a bare note row by ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Count the notes that reference a category.
    pub async fn count_by_category(
        conn: &mut PgConnection,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }

    /// Create a new note, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .fetch_one(conn)
            .await
    }

    /// Replace every field of a note, returning the updated row.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $2,
                content = $3,
                category_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .fetch_optional(conn)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
