//! Backup codec: full record set out to a JSON blob, and back in through an
//! upsert-by-id merge. Import never deletes records absent from the blob.

use chrono::NaiveDate;

use crate::{
    budget::Budget,
    errors::StoreError,
    store::{RecordStore, Result},
};

/// Serializes the full record set into a human-inspectable JSON array that
/// round-trips every field, including the optional logo payload.
pub fn export_records(records: &[Budget]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a backup blob and merges it into the store.
///
/// The top-level shape must be a JSON array of record-shaped values;
/// anything else fails with `InvalidBackup` and leaves the store untouched.
/// Validated records flow through `bulk_upsert`, so ids already present are
/// overwritten and new ids are inserted as-is.
pub fn import_records<S: RecordStore + ?Sized>(store: &S, blob: &str) -> Result<usize> {
    let value: serde_json::Value = serde_json::from_str(blob)
        .map_err(|err| StoreError::InvalidBackup(err.to_string()))?;
    let entries = value
        .as_array()
        .ok_or_else(|| StoreError::InvalidBackup("expected a JSON array of records".to_string()))?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let budget: Budget = serde_json::from_value(entry.clone()).map_err(|err| {
            StoreError::InvalidBackup(format!("record at index {index} is not valid: {err}"))
        })?;
        records.push(budget);
    }

    let count = store.bulk_upsert(records)?;
    tracing::info!(count, "backup imported");
    Ok(count)
}

/// Conventional backup file name for the given day, as the original app
/// offered its downloads.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("backup_orcamentos_{}.json", date.format("%Y-%m-%d"))
}
