use chrono::NaiveDate;

use crate::{
  error::{Error, Result},
  lifecycle::StatusLifecycle,
};

/// A task with its status history. Both histories are kept most-recent-first
/// and always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
  name: String,
  description: String,
  status_history: Vec<String>,
  date_history: Vec<NaiveDate>,
  date_create: NaiveDate,
}

impl Task {
  pub fn create(
    name: &str,
    description: &str,
    initial_status: &str,
    today: NaiveDate,
    lifecycle: &StatusLifecycle,
  ) -> Result<Self> {
    if !lifecycle.contains(initial_status) {
      return Err(Error::InvalidStatus(initial_status.to_owned()));
    }

    Ok(Self {
      name: name.to_owned(),
      description: description.to_owned(),
      status_history: vec![initial_status.to_owned()],
      date_history: vec![today],
      date_create: today,
    })
  }

  /// Rebuilds a task from persisted histories.
  pub fn restore(
    name: &str,
    description: &str,
    status_history: Vec<String>,
    date_history: Vec<NaiveDate>,
    date_create: NaiveDate,
  ) -> Result<Self> {
    if status_history.is_empty() || date_history.is_empty() {
      return Err(Error::MalformedTask(format!("task '{}' has an empty history", name)));
    }
    if status_history.len() != date_history.len() {
      return Err(Error::MalformedTask(format!(
        "task '{}' has {} statuses but {} change dates",
        name,
        status_history.len(),
        date_history.len()
      )));
    }
    if date_history.last() != Some(&date_create) {
      return Err(Error::MalformedTask(format!(
        "task '{}' creation date {} doesn't match its first change date",
        name, date_create
      )));
    }

    Ok(Self {
      name: name.to_owned(),
      description: description.to_owned(),
      status_history,
      date_history,
      date_create,
    })
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn description(&self) -> &str {
    self.description.as_str()
  }

  pub fn current_status(&self) -> &str {
    self.status_history[0].as_str()
  }

  pub fn last_change(&self) -> NaiveDate {
    self.date_history[0]
  }

  pub fn date_create(&self) -> NaiveDate {
    self.date_create
  }

  pub fn status_history(&self) -> &[String] {
    &self.status_history
  }

  pub fn date_history(&self) -> &[NaiveDate] {
    &self.date_history
  }

  /// Prepends a status that was already validated by the caller.
  pub fn apply_transition(&mut self, new_status: &str, today: NaiveDate) {
    self.status_history.insert(0, new_status.to_owned());
    self.date_history.insert(0, today);
  }

  /// Drops the latest transition. The creation entry is never removed.
  pub fn pop_transition(&mut self) -> Option<(NaiveDate, String)> {
    if self.status_history.len() < 2 {
      return None;
    }
    let status = self.status_history.remove(0);
    let date = self.date_history.remove(0);
    Some((date, status))
  }

  pub fn history(&self) -> Vec<(NaiveDate, &str)> {
    self
      .date_history
      .iter()
      .zip(self.status_history.iter())
      .map(|(date, status)| (*date, status.as_str()))
      .collect()
  }
}
