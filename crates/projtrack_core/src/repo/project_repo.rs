//! Project collection persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Mirror the in-memory project collection to the durable key-value store.
//! - Keep SQL and encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The whole collection is stored as one value under [`PROJECTS_KEY`].
//! - `load` returning `None` means "no saved collection yet" and signals the
//!   caller to seed the bundled demo dataset.
//! - Saving the same collection twice is observably a no-op.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::project::Project;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the serialized project collection lives under.
pub const PROJECTS_KEY: &str = "projects";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and decoding failures.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection schema is missing a table the repository requires.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted project data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection schema is missing required table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for the durable project collection.
pub trait ProjectRepository {
    /// Loads the saved collection, or `None` when nothing was ever saved.
    fn load(&self) -> RepoResult<Option<Vec<Project>>>;
    /// Replaces the saved collection with a full snapshot.
    fn save(&self, projects: &[Project]) -> RepoResult<()>;
}

/// SQLite-backed project repository over the `kv_store` table.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration version.
    /// - `MissingRequiredTable` when the `kv_store` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Project>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([PROJECTS_KEY])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let raw: String = row.get(0)?;

        let projects = serde_json::from_str(&raw).map_err(|err| {
            RepoError::InvalidData(format!("cannot decode `{PROJECTS_KEY}` value: {err}"))
        })?;
        Ok(Some(projects))
    }

    fn save(&self, projects: &[Project]) -> RepoResult<()> {
        let encoded = serde_json::to_string(projects).map_err(|err| {
            RepoError::InvalidData(format!("cannot encode project collection: {err}"))
        })?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![PROJECTS_KEY, encoded],
        )?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 =
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'kv_store'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("kv_store"));
    }

    Ok(())
}
