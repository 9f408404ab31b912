//! JSON record storage.
//!
//! Records live as individual JSON files under a data directory:
//! - `shifting/<id>.json`
//! - `rounds/<consultation-id>/<id>.json`
//!
//! Listing is best-effort: a file that fails to parse is logged as a warning
//! and skipped rather than failing the whole listing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::daily_round::DailyRound;
use crate::error::{RecordError, RecordResult};
use crate::shifting::{ShiftRecord, ShiftStatus};

const SHIFTING_DIR_NAME: &str = "shifting";
const ROUNDS_DIR_NAME: &str = "rounds";

/// File-backed store for shifting and daily-round records.
#[derive(Clone, Debug)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn shifting_dir(&self) -> PathBuf {
        self.data_dir.join(SHIFTING_DIR_NAME)
    }

    fn shift_path(&self, id: Uuid) -> PathBuf {
        self.shifting_dir().join(format!("{}.json", id.simple()))
    }

    fn round_path(&self, consultation_id: Uuid, id: Uuid) -> PathBuf {
        self.data_dir
            .join(ROUNDS_DIR_NAME)
            .join(consultation_id.simple().to_string())
            .join(format!("{}.json", id.simple()))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> RecordResult<T> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecordError::NotFound(path.display().to_string())
            } else {
                RecordError::FileRead(e)
            }
        })?;
        serde_json::from_str(&contents).map_err(RecordError::Deserialization)
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> RecordResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RecordError::DirCreation)?;
        }
        let contents = serde_json::to_string_pretty(value).map_err(RecordError::Serialization)?;
        fs::write(path, contents).map_err(RecordError::FileWrite)
    }

    /// List all shifting requests, most recently created first.
    ///
    /// Files that cannot be parsed are logged and skipped.
    pub fn list_shifts(&self) -> Vec<ShiftRecord> {
        let mut records = Vec::new();

        let entries = match fs::read_dir(self.shifting_dir()) {
            Ok(it) => it,
            Err(_) => return records,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_json::<ShiftRecord>(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("skipping unreadable shift record {}: {e}", path.display());
                }
            }
        }

        records.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        records
    }

    /// Read one shifting request.
    pub fn get_shift(&self, id: Uuid) -> RecordResult<ShiftRecord> {
        Self::read_json(&self.shift_path(id))
    }

    /// Write a shifting request, creating parent directories as needed.
    pub fn save_shift(&self, record: &ShiftRecord) -> RecordResult<()> {
        Self::write_json(&self.shift_path(record.id), record)
    }

    /// Move a shifting request to a new status and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotFound`] for an unknown id and
    /// [`RecordError::TerminalStatus`] for completed or cancelled records.
    pub fn update_shift_status(
        &self,
        id: Uuid,
        status: ShiftStatus,
        now: DateTime<Utc>,
    ) -> RecordResult<ShiftRecord> {
        let mut record = self.get_shift(id)?;
        record.update_status(status, now)?;
        self.save_shift(&record)?;
        Ok(record)
    }

    /// Delete a shifting request.
    pub fn delete_shift(&self, id: Uuid) -> RecordResult<()> {
        let path = self.shift_path(id);
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecordError::NotFound(path.display().to_string())
            } else {
                RecordError::FileDelete(e)
            }
        })
    }

    /// Read one daily round of a consultation.
    pub fn get_daily_round(&self, consultation_id: Uuid, id: Uuid) -> RecordResult<DailyRound> {
        Self::read_json(&self.round_path(consultation_id, id))
    }

    /// Write a daily round under its consultation directory.
    pub fn save_daily_round(&self, round: &DailyRound) -> RecordResult<()> {
        Self::write_json(&self.round_path(round.consultation_id, round.id), round)
    }
}
