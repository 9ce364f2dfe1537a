use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

use super::models::{MeetingModel, NewMeeting};
use crate::shared::AppError;

/// Trait for meeting repository operations
#[async_trait]
pub trait MeetingRepository {
    /// Creates the meetings table if it does not exist yet
    async fn init_schema(&self) -> Result<(), AppError>;

    /// Inserts a meeting, returning `AppError::DuplicateCode` if the code is taken
    async fn insert_meeting(&self, meeting: &NewMeeting) -> Result<MeetingModel, AppError>;

    async fn get_meeting_by_code(&self, code: &str) -> Result<Option<MeetingModel>, AppError>;
    async fn count_meetings(&self) -> Result<i64, AppError>;
}

/// In-memory implementation of MeetingRepository for development and testing
///
/// Enforces the same unique-code constraint as the SQLite table.
pub struct InMemoryMeetingRepository {
    meetings: Mutex<Vec<MeetingModel>>,
}

impl Default for InMemoryMeetingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMeetingRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            meetings: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<MeetingModel>>, AppError> {
        self.meetings
            .lock()
            .map_err(|_| AppError::DatabaseError("Meeting store lock poisoned".to_string()))
    }
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingRepository {
    async fn init_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    #[instrument(skip(self, meeting), fields(code = %meeting.code))]
    async fn insert_meeting(&self, meeting: &NewMeeting) -> Result<MeetingModel, AppError> {
        debug!(title = %meeting.title, "Creating meeting in memory");

        let mut meetings = self.lock()?;
        if meetings.iter().any(|m| m.code == meeting.code) {
            warn!("Meeting code already exists in memory");
            return Err(AppError::DuplicateCode(meeting.code.clone()));
        }

        let id = meetings.last().map_or(1, |m| m.id + 1);
        let model = meeting.clone().into_model(id);
        meetings.push(model.clone());

        debug!(id, "Meeting created successfully in memory");
        Ok(model)
    }

    #[instrument(skip(self))]
    async fn get_meeting_by_code(&self, code: &str) -> Result<Option<MeetingModel>, AppError> {
        let meetings = self.lock()?;
        Ok(meetings.iter().find(|m| m.code == code).cloned())
    }

    async fn count_meetings(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.len() as i64)
    }
}

/// SQLite implementation of meeting repository
///
/// Opens a fresh connection for every operation and closes it before
/// returning; there is no long-lived pool.
pub struct SqliteMeetingRepository {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteMeetingRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn acquire(&self) -> Result<SqliteConnection, AppError> {
        self.options.connect().await.map_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to open meeting database");
            AppError::DatabaseError(e.to_string())
        })
    }

    async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close meeting database connection");
        }
    }
}

fn map_sqlx_error(error: sqlx::Error, code: &str) -> AppError {
    match error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            AppError::DuplicateCode(code.to_string())
        }
        other => AppError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl MeetingRepository for SqliteMeetingRepository {
    #[instrument(skip(self))]
    async fn init_schema(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                warn!(error = %e, "Failed to create data directory");
                AppError::DatabaseError(e.to_string())
            })?;
        }

        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            "CREATE TABLE IF NOT EXISTS meetings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT UNIQUE,
                title TEXT,
                start_time TEXT,
                end_time TEXT
            )",
        )
        .execute(&mut conn)
        .await;
        self.release(conn).await;

        result.map_err(|e| {
            warn!(error = %e, "Failed to create meetings table");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(path = %self.path.display(), "Meetings schema ready");
        Ok(())
    }

    #[instrument(skip(self, meeting), fields(code = %meeting.code))]
    async fn insert_meeting(&self, meeting: &NewMeeting) -> Result<MeetingModel, AppError> {
        debug!(title = %meeting.title, "Creating meeting in database");

        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            "INSERT INTO meetings (code, title, start_time, end_time) VALUES (?, ?, ?, ?)",
        )
        .bind(&meeting.code)
        .bind(&meeting.title)
        .bind(&meeting.start_time)
        .bind(&meeting.end_time)
        .execute(&mut conn)
        .await;
        self.release(conn).await;

        let done = result.map_err(|e| {
            let error = map_sqlx_error(e, &meeting.code);
            warn!(error = %error, "Failed to insert meeting");
            error
        })?;

        let id = done.last_insert_rowid();
        debug!(id, "Meeting created successfully in database");
        Ok(meeting.clone().into_model(id))
    }

    #[instrument(skip(self))]
    async fn get_meeting_by_code(&self, code: &str) -> Result<Option<MeetingModel>, AppError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query_as::<_, MeetingModel>(
            "SELECT id, code, title, start_time, end_time FROM meetings WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(&mut conn)
        .await;
        self.release(conn).await;

        result.map_err(|e| {
            warn!(error = %e, "Failed to fetch meeting from database");
            AppError::DatabaseError(e.to_string())
        })
    }

    async fn count_meetings(&self) -> Result<i64, AppError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM meetings")
            .fetch_one(&mut conn)
            .await;
        self.release(conn).await;

        result.map_err(|e| {
            warn!(error = %e, "Failed to count meetings in database");
            AppError::DatabaseError(e.to_string())
        })
    }
}
