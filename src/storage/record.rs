use crate::{
  error::{Error, Result},
  lifecycle::StatusLifecycle,
  task::Task,
  time,
};

const HISTORY_DELIMITER: &str = ",";

/// On-disk shape of a task. Histories are joined with commas, newest first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskRecord {
  pub name: String,
  pub description: String,
  pub status: String,
  pub date_create: String,
  pub date_change: String,
}

impl From<&Task> for TaskRecord {
  fn from(task: &Task) -> Self {
    let dates: Vec<String> = task
      .date_history()
      .iter()
      .map(|date| time::format_date(*date))
      .collect();

    Self {
      name: task.name().to_owned(),
      description: task.description().to_owned(),
      status: task.status_history().join(HISTORY_DELIMITER),
      date_create: time::format_date(task.date_create()),
      date_change: dates.join(HISTORY_DELIMITER),
    }
  }
}

impl TaskRecord {
  pub fn into_task(self, lifecycle: &StatusLifecycle) -> Result<Task> {
    let status_history: Vec<String> = split_history(&self.name, "status", &self.status)?
      .into_iter()
      .map(|s| s.to_owned())
      .collect();

    let mut date_history = Vec::with_capacity(status_history.len());
    for raw in split_history(&self.name, "change date", &self.date_change)? {
      let date = time::parse_date(raw).map_err(|err| {
        Error::MalformedTask(format!(
          "task '{}' has a bad change date '{}': {}",
          self.name, raw, err
        ))
      })?;
      date_history.push(date);
    }

    let date_create = time::parse_date(&self.date_create).map_err(|err| {
      Error::MalformedTask(format!(
        "task '{}' has a bad creation date '{}': {}",
        self.name, self.date_create, err
      ))
    })?;

    let current = &status_history[0];
    if !lifecycle.contains(current) {
      return Err(Error::MalformedTask(format!(
        "task '{}' has unknown status '{}'",
        self.name, current
      )));
    }

    Task::restore(
      &self.name,
      &self.description,
      status_history,
      date_history,
      date_create,
    )
  }
}

/// Splits a joined history. Entries are kept verbatim, an empty entry means
/// the record was edited by hand or truncated.
fn split_history<'a>(name: &str, field: &str, joined: &'a str) -> Result<Vec<&'a str>> {
  let parts: Vec<&str> = joined.split(HISTORY_DELIMITER).collect();
  if parts.iter().any(|part| part.is_empty()) {
    return Err(Error::MalformedTask(format!(
      "task '{}' has an empty {} entry in '{}'",
      name, field, joined
    )));
  }
  Ok(parts)
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::TaskRecord;
  use crate::{Error, StatusLifecycle, Task};

  fn record(status: &str, date_create: &str, date_change: &str) -> TaskRecord {
    TaskRecord {
      name: "Report".to_owned(),
      description: "numbers, charts, and a summary".to_owned(),
      status: status.to_owned(),
      date_create: date_create.to_owned(),
      date_change: date_change.to_owned(),
    }
  }

  #[test]
  fn encode_joins_histories() {
    let lifecycle = StatusLifecycle::default();
    let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    let mut task = Task::create("Report", "numbers, charts, and a summary", "новая", day(1), &lifecycle).unwrap();
    task.apply_transition("выполняется", day(3));

    let encoded = TaskRecord::from(&task);
    assert_eq!(encoded, record("выполняется,новая", "2024-05-01", "2024-05-03,2024-05-01"));
  }

  #[test]
  fn decode_splits_histories() {
    let task = record("выполняется,новая", "2024-05-01", "2024-05-03,2024-05-01")
      .into_task(&StatusLifecycle::default())
      .unwrap();

    assert_eq!(task.current_status(), "выполняется");
    assert_eq!(task.status_history().len(), 2);
    assert_eq!(task.description(), "numbers, charts, and a summary");
    assert_eq!(task.date_create(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
  }

  #[test]
  fn decode_rejects_broken_records() {
    let lifecycle = StatusLifecycle::default();
    for broken in [
      record("выполняется,новая", "2024-05-01", "2024-05-01"),
      record("новая", "2024-05-01", "yesterday"),
      record("новая", "01.05.2024", "2024-05-01"),
      record("архив", "2024-05-01", "2024-05-01"),
      record("", "2024-05-01", ""),
      record("выполняется,,новая", "2024-05-01", "2024-05-03,2024-05-02,2024-05-01"),
      record("выполняется,новая", "2024-05-01", "2024-05-03,,2024-05-01"),
    ] {
      assert!(
        matches!(broken.clone().into_task(&lifecycle), Err(Error::MalformedTask(_))),
        "accepted {:?}",
        broken
      );
    }
  }

  #[test]
  fn labels_with_spaces_survive_reload() {
    let lifecycle = StatusLifecycle::new(vec![
      "to do".into(),
      "in progress".into(),
      "done".into(),
      "dropped".into(),
    ])
    .unwrap();
    let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    let mut task = Task::create("A", "", "to do", day(1), &lifecycle).unwrap();
    task.apply_transition("in progress", day(2));

    let restored = TaskRecord::from(&task).into_task(&lifecycle).unwrap();
    assert_eq!(restored, task);
    assert_eq!(restored.current_status(), "in progress");
  }
}
