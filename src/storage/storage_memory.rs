use crate::error::Result;

use super::{storage::Storage, TaskRecord};

/// Keeps records in memory. Counts saves so callers can check when the
/// collection was persisted.
#[derive(Default)]
pub struct MemoryStorage {
  records: Vec<TaskRecord>,
  saves: usize,
}

impl MemoryStorage {
  pub fn new() -> Self {
    return Self::default();
  }

  pub fn records(&self) -> &[TaskRecord] {
    &self.records
  }

  pub fn saves(&self) -> usize {
    self.saves
  }
}

impl Storage for MemoryStorage {
  fn location(&self) -> &str {
    "memory"
  }

  fn load(&self) -> Result<Vec<TaskRecord>> {
    Ok(self.records.clone())
  }

  fn store(&mut self, records: &[TaskRecord]) -> Result<()> {
    self.records = records.to_vec();
    self.saves += 1;
    return Ok(());
  }
}
