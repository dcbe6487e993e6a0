use chrono::NaiveDate;

use crate::{task::Task, time::format_date};

pub fn format_history_entry(date: NaiveDate, status: &str) -> String {
  format!("{}: {}", format_date(date), status)
}

pub fn format_history(task: &Task) -> Vec<String> {
  task
    .history()
    .into_iter()
    .map(|(date, status)| format_history_entry(date, status))
    .collect()
}

pub fn format_summary(task: &Task, name_width: usize) -> String {
  format!(
    "{name:width$}  {status:12}  {changed}",
    name = task.name(),
    width = name_width,
    status = task.current_status(),
    changed = format_date(task.last_change())
  )
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{format_history, format_summary};
  use crate::{StatusLifecycle, Task};

  fn sample_task() -> Task {
    let day = |d| NaiveDate::from_ymd_opt(2023, 12, d).unwrap();
    let mut task = Task::create("Report", "", "новая", day(1), &StatusLifecycle::default()).unwrap();
    task.apply_transition("выполняется", day(7));
    return task;
  }

  #[test]
  fn history_is_newest_first() {
    assert_eq!(
      format_history(&sample_task()),
      vec!["2023-12-07: выполняется", "2023-12-01: новая"]
    );
  }

  #[test]
  fn summary_pads_name() {
    assert_eq!(
      format_summary(&sample_task(), 8),
      format!("Report    {:12}  2023-12-07", "выполняется")
    );
  }
}
