use crate::error::{Error, Result};

pub const DEFAULT_STATUSES: [&str; 5] = ["новая", "выполняется", "ревью", "выполнено", "отменено"];

/// Ordered status labels. The first label is the initial one, the last is the
/// cancelled side state and the one before it is the final "done" step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLifecycle {
  labels: Vec<String>,
}

impl Default for StatusLifecycle {
  fn default() -> Self {
    Self {
      labels: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
    }
  }
}

impl StatusLifecycle {
  pub fn new(labels: Vec<String>) -> Result<Self> {
    if labels.len() < 2 {
      return Err(Error::InvalidLifecycle(
        "at least one status and the cancelled status are required".to_owned(),
      ));
    }

    for (i, label) in labels.iter().enumerate() {
      if label.trim().is_empty() {
        return Err(Error::InvalidLifecycle("empty status label".to_owned()));
      }
      if label.trim() != label {
        return Err(Error::InvalidLifecycle(format!(
          "status '{}' starts or ends with whitespace",
          label
        )));
      }
      // histories are comma-joined on disk
      if label.contains(',') {
        return Err(Error::InvalidLifecycle(format!(
          "status '{}' contains a comma",
          label
        )));
      }
      if labels[..i].contains(label) {
        return Err(Error::InvalidLifecycle(format!(
          "status '{}' is listed twice",
          label
        )));
      }
    }

    return Ok(Self { labels });
  }

  pub fn labels(&self) -> &[String] {
    &self.labels
  }

  pub fn contains(&self, label: &str) -> bool {
    self.labels.iter().any(|l| l == label)
  }

  pub fn first(&self) -> &str {
    self.labels[0].as_str()
  }

  pub fn done(&self) -> &str {
    self.labels[self.labels.len() - 2].as_str()
  }

  pub fn cancelled(&self) -> &str {
    self.labels[self.labels.len() - 1].as_str()
  }

  pub fn is_cancelled(&self, label: &str) -> bool {
    label == self.cancelled()
  }

  pub fn index_of(&self, label: &str) -> Result<usize> {
    self
      .labels
      .iter()
      .position(|l| l == label)
      .ok_or_else(|| Error::UnknownStatus(label.to_owned()))
  }

  pub fn previous(&self, label: &str) -> Result<&str> {
    let index = self.index_of(label)?;
    if index == 0 || self.is_cancelled(label) {
      return Err(Error::NoPreviousStatus(label.to_owned()));
    }
    return Ok(self.labels[index - 1].as_str());
  }

  pub fn next(&self, label: &str) -> Result<&str> {
    let index = self.index_of(label)?;
    // the cancelled label closes the sequence, it is not a step after "done"
    if index + 2 >= self.labels.len() {
      return Err(Error::NoNextStatus(label.to_owned()));
    }
    return Ok(self.labels[index + 1].as_str());
  }
}
