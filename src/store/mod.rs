//! Persistence behind an opaque store interface
//!
//! Append-only: `create` snapshots the in-session record and assigns an
//! identifier and creation timestamp; there is no update or delete
//! path. A store failure is recoverable — the session keeps its record
//! and the user retries.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::record::TeacherRecord;

/// Store-assigned record identifier
pub type SlipId = String;

/// A persisted fixation record: the snapshot plus the two
/// server-assigned fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSlip {
    pub id: SlipId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: TeacherRecord,
}

/// Persistence collaborator contract
pub trait SlipStore {
    /// Persist a snapshot of the record, returning the new identifier
    fn create(&self, record: &TeacherRecord) -> Result<SlipId, Error>;

    /// Fetch a stored record, `None` when the id is unknown
    fn get(&self, id: &str) -> Result<Option<StoredSlip>, Error>;

    /// All stored records, newest first
    fn list(&self) -> Result<Vec<StoredSlip>, Error>;
}

fn new_slip(record: &TeacherRecord) -> StoredSlip {
    StoredSlip {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        record: record.clone(),
    }
}

/// In-memory store for tests and single-session use
#[derive(Debug, Default)]
pub struct MemoryStore {
    slips: Mutex<Vec<StoredSlip>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlipStore for MemoryStore {
    fn create(&self, record: &TeacherRecord) -> Result<SlipId, Error> {
        let slip = new_slip(record);
        let id = slip.id.clone();
        self.slips
            .lock()
            .map_err(|_| Error::Store("memory store poisoned".to_string()))?
            .push(slip);
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<Option<StoredSlip>, Error> {
        let slips = self
            .slips
            .lock()
            .map_err(|_| Error::Store("memory store poisoned".to_string()))?;
        Ok(slips.iter().find(|s| s.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredSlip>, Error> {
        let mut slips = self
            .slips
            .lock()
            .map_err(|_| Error::Store("memory store poisoned".to_string()))?
            .clone();
        slips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(slips)
    }
}

/// One JSON document per record under a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating the directory if needed)
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self, Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl SlipStore for JsonFileStore {
    fn create(&self, record: &TeacherRecord) -> Result<SlipId, Error> {
        let slip = new_slip(record);
        let json = serde_json::to_string_pretty(&slip)?;
        fs::write(self.path_for(&slip.id), json)?;
        info!("stored slip {} in {}", slip.id, self.dir.display());
        Ok(slip.id)
    }

    fn get(&self, id: &str) -> Result<Option<StoredSlip>, Error> {
        // Ids are uuids we generated; reject anything path-like
        if id.contains(['/', '\\', '.']) {
            return Ok(None);
        }
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn list(&self) -> Result<Vec<StoredSlip>, Error> {
        let mut slips = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let json = fs::read_to_string(&path)?;
                slips.push(serde_json::from_str(&json)?);
            }
        }
        slips.sort_by(|a: &StoredSlip, b: &StoredSlip| b.created_at.cmp(&a.created_at));
        Ok(slips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> TeacherRecord {
        TeacherRecord {
            teacher_name: name.to_string(),
            class_name: "6-8".to_string(),
            december_2024_salary: "10800".to_string(),
            ..TeacherRecord::default()
        }
    }

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryStore::new();
        let id = store.create(&record("सीता देवी")).unwrap();

        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.record, record("सीता देवी"));
        assert!(store.get("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_memory_list_newest_first() {
        let store = MemoryStore::new();
        let first = store.create(&record("a")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store.create(&record("b")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[1].id, first);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("sf_store_{}", Uuid::new_v4()));
        let store = JsonFileStore::open(&dir).unwrap();

        let id = store.create(&record("सीता देवी")).unwrap();
        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record, record("सीता देवी"));

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);

        std::fs::remove_dir_all(dir).ok();
    }
}
