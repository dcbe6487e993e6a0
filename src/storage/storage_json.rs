use std::io::{Read, Write};

use log::debug;

use crate::error::{Error, Result};

use super::{storage::Storage, TaskRecord};

/// Tasks file holding a JSON array of [`TaskRecord`]s.
pub struct JsonStorage {
  filepath: String,
}

impl JsonStorage {
  pub fn new(filepath: &str) -> Self {
    Self {
      filepath: filepath.to_owned(),
    }
  }

  fn directory(&self) -> std::path::PathBuf {
    match std::path::Path::new(&self.filepath).parent() {
      Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
      _ => std::path::PathBuf::from("."),
    }
  }

  fn save_error(&self, source: std::io::Error) -> Error {
    Error::Save {
      path: self.filepath.clone(),
      source,
    }
  }
}

impl Storage for JsonStorage {
  fn location(&self) -> &str {
    self.filepath.as_str()
  }

  fn load(&self) -> Result<Vec<TaskRecord>> {
    let path = std::path::Path::new(&self.filepath);
    if !path.exists() {
      return Err(Error::MissingFile(self.filepath.clone()));
    }

    let mut content = String::new();
    std::fs::File::open(path)
      .and_then(|mut file| file.read_to_string(&mut content))
      .map_err(|err| Error::load(&self.filepath, err))?;

    if content.trim().is_empty() {
      debug!("tasks file {} is empty", self.filepath);
      return Ok(Vec::new());
    }

    let records: Vec<TaskRecord> =
      serde_json::from_str(&content).map_err(|err| Error::load(&self.filepath, err))?;

    debug!("restored {} records from: {}", records.len(), self.filepath);
    return Ok(records);
  }

  fn store(&mut self, records: &[TaskRecord]) -> Result<()> {
    let directory = self.directory();
    std::fs::create_dir_all(&directory).map_err(|err| self.save_error(err))?;

    // write next to the target and rename over it, readers never see a partial file
    let mut tmp_file = tempfile::Builder::new()
      .prefix(".tasks")
      .suffix(".json")
      .tempfile_in(&directory)
      .map_err(|err| self.save_error(err))?;

    serde_json::to_writer_pretty(&mut tmp_file, records)
      .map_err(|err| self.save_error(err.into()))?;
    tmp_file.flush().map_err(|err| self.save_error(err))?;

    tmp_file
      .persist(&self.filepath)
      .map_err(|err| self.save_error(err.error))?;

    debug!("stored {} records to: {}", records.len(), self.filepath);
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::{JsonStorage, Storage};
  use crate::{storage::TaskRecord, Error};

  fn record(name: &str) -> TaskRecord {
    TaskRecord {
      name: name.to_owned(),
      description: "Описание, с запятой".to_owned(),
      status: "ревью,выполняется,новая".to_owned(),
      date_create: "2024-01-01".to_owned(),
      date_change: "2024-01-03,2024-01-02,2024-01-01".to_owned(),
    }
  }

  fn get_tmp_dir() -> tempfile::TempDir {
    tempfile::Builder::new().prefix("taskflow").tempdir().unwrap()
  }

  #[test]
  fn storage_store_and_load() {
    let dir = get_tmp_dir();
    let path = dir.path().join("tasks.json");
    let mut storage = JsonStorage::new(path.to_str().unwrap());

    let records = vec![record("Отчёт"), record("Ревью")];
    storage.store(&records).unwrap();

    assert_eq!(storage.load().unwrap(), records);
  }

  #[test]
  fn storage_keeps_utf8_readable() {
    let dir = get_tmp_dir();
    let path = dir.path().join("tasks.json");
    let mut storage = JsonStorage::new(path.to_str().unwrap());
    storage.store(&[record("Отчёт")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"status\": \"ревью,выполняется,новая\""));
  }

  #[test]
  fn storage_store_replaces_everything() {
    let dir = get_tmp_dir();
    let path = dir.path().join("tasks.json");
    let mut storage = JsonStorage::new(path.to_str().unwrap());

    storage.store(&[record("a"), record("b")]).unwrap();
    storage.store(&[record("c")]).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "c");
  }

  #[test]
  fn storage_creates_missing_directories() {
    let dir = get_tmp_dir();
    let path = dir.path().join("nested").join("tasks.json");
    let mut storage = JsonStorage::new(path.to_str().unwrap());

    storage.store(&[]).unwrap();
    assert!(storage.load().unwrap().is_empty());
  }

  #[test]
  fn storage_load_missing_file() {
    let dir = get_tmp_dir();
    let storage = JsonStorage::new(dir.path().join("nope.json").to_str().unwrap());

    assert!(matches!(storage.load(), Err(Error::MissingFile(_))));
  }

  #[test]
  fn storage_load_empty_file() {
    let dir = get_tmp_dir();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "  \n").unwrap();

    let storage = JsonStorage::new(path.to_str().unwrap());
    assert!(storage.load().unwrap().is_empty());
  }

  #[test]
  fn storage_load_malformed_file() {
    let dir = get_tmp_dir();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "[{\"name\": \"half a record\"}]").unwrap();

    let storage = JsonStorage::new(path.to_str().unwrap());
    assert!(matches!(storage.load(), Err(Error::Load { .. })));
  }
}
