//! CSV-backed trip history store
//!
//! The whole log is read on `load` and rewritten on `save`. Saves go to a
//! temporary file in the target directory that is then renamed into place.
//! There is no locking: one process at a time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::TripHistoryPort;
use async_trait::async_trait;
use domain::entities::{TripHistory, TripRecord};
use tempfile::NamedTempFile;
use tokio::task;
use tracing::{debug, instrument};

use crate::config::HistoryAppConfig;

/// Trip history stored as a CSV file
#[derive(Debug, Clone)]
pub struct CsvTripHistoryStore {
    path: PathBuf,
}

impl CsvTripHistoryStore {
    /// Create a store for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store from the history configuration section
    pub fn from_config(config: &HistoryAppConfig) -> Self {
        Self::new(config.path.clone())
    }

    /// The CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn persistence_error(path: &Path, err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Persistence(format!("{}: {err}", path.display()))
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn read_history(path: &Path) -> Result<TripHistory, ApplicationError> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) if is_not_found(&e) => {
            debug!("No history file yet");
            return Ok(TripHistory::new());
        },
        Err(e) => return Err(persistence_error(path, e)),
    };

    let headers = reader
        .headers()
        .map_err(|e| persistence_error(path, e))?
        .clone();
    if headers.is_empty() {
        return Ok(TripHistory::new());
    }
    if headers.iter().ne(TripHistory::COLUMNS) {
        return Err(persistence_error(
            path,
            format!(
                "unexpected header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(","),
                TripHistory::COLUMNS.join(",")
            ),
        ));
    }

    let mut history = TripHistory::new();
    for (index, row) in reader.deserialize::<TripRecord>().enumerate() {
        let record = row.map_err(|e| persistence_error(path, format!("row {}: {e}", index + 1)))?;
        history.append(record);
    }
    Ok(history)
}

/// Permissions the rewritten log should carry: the current file's, or
/// world-readable for a new file (temp files start out owner-only)
fn target_permissions(path: &Path) -> io::Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

fn write_history(path: &Path, history: &TripHistory) -> Result<(), ApplicationError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| persistence_error(path, e))?;

    let file = NamedTempFile::new_in(dir).map_err(|e| persistence_error(path, e))?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file.as_file());
        writer
            .write_record(TripHistory::COLUMNS)
            .map_err(|e| persistence_error(path, e))?;
        for record in history.records() {
            writer
                .serialize(record)
                .map_err(|e| persistence_error(path, e))?;
        }
        writer.flush().map_err(|e| persistence_error(path, e))?;
    }
    let permissions = target_permissions(path).map_err(|e| persistence_error(path, e))?;
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| persistence_error(path, e))?;
    }
    file.as_file()
        .sync_all()
        .map_err(|e| persistence_error(path, e))?;
    file.persist(path)
        .map_err(|e| persistence_error(path, e.error))?;
    Ok(())
}

#[async_trait]
impl TripHistoryPort for CsvTripHistoryStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<TripHistory, ApplicationError> {
        let path = self.path.clone();

        let history = task::spawn_blocking(move || read_history(&path))
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))??;

        debug!(trips = history.len(), "Loaded trip history");
        Ok(history)
    }

    #[instrument(skip(self, history), fields(trips = history.len()))]
    async fn save(&self, history: &TripHistory) -> Result<(), ApplicationError> {
        let path = self.path.clone();
        let history = history.clone();

        task::spawn_blocking(move || write_history(&path, &history))
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))??;

        debug!(path = %self.path.display(), "Saved trip history");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
