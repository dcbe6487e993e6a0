pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("status '{0}' is not part of the lifecycle")]
  InvalidStatus(String),

  #[error("unknown status '{0}'")]
  UnknownStatus(String),

  #[error("status '{0}' has no previous status")]
  NoPreviousStatus(String),

  #[error("status '{0}' has no next status")]
  NoNextStatus(String),

  #[error("task '{0}' already exists")]
  DuplicateName(String),

  #[error("task name can't be empty")]
  EmptyName,

  #[error("task '{0}' not found")]
  NotFound(String),

  #[error("status '{0}' is the first one, can't move to the previous status")]
  AtFirstStatus(String),

  #[error("status '{0}' is the last one, can't move to the next status")]
  AtLastStatus(String),

  #[error("only cancelled tasks can be reopened, current status: '{0}'")]
  NotCancelled(String),

  #[error("task is cancelled ('{0}'), reopen it first")]
  TaskCancelled(String),

  #[error("unknown direction '{0}', expected one of: prev, next, cancel, reopen")]
  UnknownDirection(String),

  #[error("invalid lifecycle: {0}")]
  InvalidLifecycle(String),

  #[error("tasks file not found: {0}")]
  MissingFile(String),

  #[error("malformed task record: {0}")]
  MalformedTask(String),

  #[error("can't load tasks from {path}: {reason}")]
  Load { path: String, reason: String },

  #[error("can't save tasks to {path}: {source}")]
  Save {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("config error ({path}): {reason}")]
  Config { path: String, reason: String },
}

impl Error {
  pub(crate) fn load(path: &str, reason: impl ToString) -> Self {
    Self::Load {
      path: path.to_owned(),
      reason: reason.to_string(),
    }
  }
}
