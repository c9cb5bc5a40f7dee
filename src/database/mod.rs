//! All things related to the storage of notes

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use uuid::Uuid;

pub use Config as DatabaseConfig;
pub use form_types::*;

use crate::notes::DEFAULT_COLOR;

mod form_types;

/// Migrator to run migrations on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Maximum number of pooled connections
const MAX_CONNECTIONS: u32 = 5;

/// How long to wait for a free connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Storage errors
#[derive(Debug, Error)]
pub enum Error {
    /// A connection or query error with the storage
    #[error("Connection error: {0}")]
    Connection(String),

    /// The schema could not be brought up to date
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Database configuration
pub enum Config {
    /// Connect using a connection string
    Connect(String),

    /// Use existing connection
    ExistingConnection(PgPool),
}

/// Postgres storage
#[derive(Clone)]
pub struct Database {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Database {
    /// Create a new Postgres storage
    ///
    /// Migrations will be run
    pub async fn from_config(config: Config) -> Result<Self> {
        match config {
            Config::Connect(connection_string) => Self::new(&connection_string).await,
            Config::ExistingConnection(pool) => Self::new_with_pool(pool).await,
        }
    }

    /// Create Postgres storage with a fresh pool
    async fn new(connection_string: &str) -> Result<Self> {
        let connection_pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(connection_string)
            .await
            .map_err(connection_error)?;

        Self::new_with_pool(connection_pool).await
    }

    /// Create Postgres storage with existing pool
    async fn new_with_pool(connection_pool: PgPool) -> Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .map_err(|err| Error::Migration(err.to_string()))?;

        Ok(Self { connection_pool })
    }
}

impl Database {
    /// Create a note
    ///
    /// A new ID is generated for the note, `last_updated` is set to the current time. Returns the
    /// ID of the note.
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Uuid> {
        let note_id = sqlx::query_scalar::<_, Uuid>(
            r"
            INSERT INTO notes
                (id, title, body, parent_id, last_updated, created_by_user_id, color, tag)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(Uuid::new_v4())
        .bind(values.title)
        .bind(values.body)
        .bind(values.parent_id)
        .bind(values.created_by_user_id)
        .bind(values.color.unwrap_or(DEFAULT_COLOR))
        .bind(values.tag)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note_id)
    }

    /// Update a note
    ///
    /// Only the fields with a new value are written, `last_updated` is always refreshed. Updating
    /// a note that does not exist is not an error, `None` is returned instead.
    pub async fn update_note(
        &self,
        note_id: &Uuid,
        values: &UpdateNoteValues<'_>,
    ) -> Result<Option<Uuid>> {
        let note_id = sqlx::query_scalar::<_, Uuid>(
            r"
            UPDATE notes
            SET title = COALESCE($1, title),
                body = COALESCE($2, body),
                color = COALESCE($3, color),
                parent_id = COALESCE($4, parent_id),
                tag = COALESCE($5, tag),
                last_updated = CURRENT_TIMESTAMP
            WHERE id = $6
            RETURNING id
            ",
        )
        .bind(values.title.as_set())
        .bind(values.body.as_set())
        .bind(values.color.as_set())
        .bind(values.parent_id.as_set())
        .bind(values.tag.as_set())
        .bind(note_id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note_id)
    }

    /// Hard-delete a note
    ///
    /// Children of the note are left alone. Returns the number of removed notes, deleting a note
    /// that does not exist is not an error.
    pub async fn delete_note(&self, note_id: &Uuid) -> Result<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM notes
            WHERE id = $1
            ",
        )
        .bind(note_id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(result.rows_affected())
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
