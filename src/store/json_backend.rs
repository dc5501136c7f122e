use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    budget::Budget,
    errors::StoreError,
    utils::paths::{app_data_dir, budgets_dir_in, ensure_dir, state_file_in},
};

use super::{RecordStore, Result};

const RECORD_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed record store: one JSON document per quote under
/// `<root>/budgets/<id>.json`, plus a `state.json` watermark so ids stay
/// unique and strictly increasing across deletes and restarts.
///
/// Writes stage to a temporary file and rename into place: a record is
/// either fully replaced or untouched. A mutex serializes writers per
/// store instance.
pub struct JsonStore {
    budgets_dir: PathBuf,
    state_file: PathBuf,
    state: Mutex<StoreState>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    last_id: u64,
}

impl JsonStore {
    /// Opens (or initializes) a store rooted at `root`, defaulting to the
    /// application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let budgets_dir = budgets_dir_in(&root);
        ensure_dir(&budgets_dir)?;
        let state_file = state_file_in(&root);

        let mut state = read_state(&state_file)?;
        // The watermark must stay ahead of every record on disk, even if the
        // state file went missing or a backup restored higher ids.
        if let Some(max) = max_stored_id(&budgets_dir)? {
            state.last_id = state.last_id.max(max);
        }

        Ok(Self {
            budgets_dir,
            state_file,
            state: Mutex::new(state),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn record_path(&self, id: u64) -> PathBuf {
        self.budgets_dir
            .join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    /// Reserves the next id, or advances the watermark past a caller-supplied
    /// one. The watermark is persisted before the record itself is written.
    fn claim_id(&self, requested: Option<u64>) -> Result<u64> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let id = match requested {
            Some(id) => id,
            None => state.last_id + 1,
        };
        if id > state.last_id {
            state.last_id = id;
            let json = serde_json::to_string_pretty(&*state)?;
            write_atomic(&self.state_file, &json)?;
        }
        Ok(id)
    }

    fn write_record(&self, id: u64, budget: &Budget) -> Result<()> {
        let json = serde_json::to_string_pretty(budget)?;
        write_atomic(&self.record_path(id), &json)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn list_all(&self) -> Result<Vec<Budget>> {
        if !self.budgets_dir.exists() {
            return Ok(Vec::new());
        }
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.budgets_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match read_record(&path) {
                Ok(Some(budget)) => records.push(budget),
                Ok(None) => {
                    tracing::warn!(path = %path.display(), "skipping malformed record file");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(records)
    }

    fn get_by_id(&self, id: u64) -> Result<Option<Budget>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        match read_record(&path)? {
            Some(budget) => Ok(Some(budget)),
            None => {
                tracing::warn!(id, "stored record is malformed, treating as missing");
                Ok(None)
            }
        }
    }

    fn upsert(&self, mut budget: Budget) -> Result<Budget> {
        let id = self.claim_id(budget.id)?;
        budget.id = Some(id);
        budget.refresh_total();
        self.write_record(id, &budget)?;
        tracing::debug!(id, total = budget.total_value, "record saved");
        Ok(budget)
    }

    fn delete(&self, id: u64) -> Result<()> {
        match fs::remove_file(self.record_path(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Storage(err)),
        }
    }

    fn bulk_upsert(&self, records: Vec<Budget>) -> Result<usize> {
        let total = records.len();
        for (applied, budget) in records.into_iter().enumerate() {
            let result = match budget.id {
                Some(id) => self
                    .claim_id(Some(id))
                    .and_then(|_| self.write_record(id, &budget)),
                None => Err(StoreError::InvalidBackup(
                    "bulk record has no id".to_string(),
                )),
            };
            if let Err(err) = result {
                return Err(StoreError::PartialBulk {
                    applied,
                    total,
                    source: Box::new(err),
                });
            }
        }
        tracing::debug!(total, "bulk upsert applied");
        Ok(total)
    }
}

fn read_state(path: &Path) -> Result<StoreState> {
    if path.exists() {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data).unwrap_or_default())
    } else {
        Ok(StoreState::default())
    }
}

/// Highest id present on disk, judged from file names alone.
fn max_stored_id(dir: &Path) -> Result<Option<u64>> {
    if !dir.exists() {
        return Ok(None);
    }
    let mut max = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
            continue;
        }
        if let Some(id) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u64>().ok())
        {
            max = Some(max.map_or(id, |m: u64| m.max(id)));
        }
    }
    Ok(max)
}

/// Malformed content is reported as `None`; I/O failures propagate.
fn read_record(path: &Path) -> Result<Option<Budget>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::Storage(err)),
    };
    Ok(serde_json::from_str(&data).ok())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages to a sibling temp file and renames over the target.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
