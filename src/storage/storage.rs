use crate::error::Result;

use super::TaskRecord;

/// Whole-collection persistence: `store` always replaces everything.
pub trait Storage {
  fn location(&self) -> &str;
  fn load(&self) -> Result<Vec<TaskRecord>>;
  fn store(&mut self, records: &[TaskRecord]) -> Result<()>;
}
