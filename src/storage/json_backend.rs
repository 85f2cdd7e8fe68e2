use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::RecordStore;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Whole-file JSON persistence for the record store. Saves go to a `.tmp`
/// sibling first and are renamed into place, so a crash mid-write leaves
/// the previous document untouched.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the managed data file under the application data
    /// directory, creating the directory when missing.
    pub fn new_default() -> Result<Self> {
        let path = crate::utils::data_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            return Ok(RecordStore::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let store: RecordStore = serde_json::from_str(&data)?;
        Ok(store)
    }

    fn save(&self, store: &RecordStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(store)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "record store flushed");
        Ok(())
    }
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

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionRecorder;
    use crate::domain::{Catalog, PaymentMethod};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("dapur_kita_data.json"));
        (storage, temp)
    }

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        TransactionRecorder::record_inventory_event(
            &mut store,
            &Catalog::kitchenware(),
            "2024-01-10",
            "Sendok A",
            10,
            PaymentMethod::Cash,
        )
        .expect("event must record");
        store
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order() {
        let (storage, _guard) = storage_with_temp_dir();
        let store = sample_store();
        storage.save(&store).expect("save store");
        let loaded = storage.load().expect("load store");
        assert_eq!(loaded, store);
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load store");
        assert!(loaded.is_empty());
    }

    #[test]
    fn transaction_record_serializes_product_under_the_type_key() {
        let store = sample_store();
        let json = serde_json::to_value(&store).expect("serialize store");
        let txn = &json["transactions"][0];
        assert_eq!(txn["type"], "Sendok A");
        assert_eq!(txn["amount"], 150_000);
        assert_eq!(json["inventory"][0]["price"], 15_000);
    }
}
