use std::{cell::RefCell, rc::Rc};

use colored::Colorize;

use crate::{
  fmt::{format_history_entry, format_summary},
  task::Task,
  time::format_date,
  tracker::Tracker,
};

pub struct Viewer {
  tracker: Rc<RefCell<Tracker>>,
}

impl Viewer {
  pub fn new(tracker: Rc<RefCell<Tracker>>) -> Self {
    Self { tracker }
  }

  pub fn print_tasks(&self) {
    let tracker = self.tracker.borrow();
    let tasks = tracker.tasks();
    if tasks.is_empty() {
      println!("no tasks in {}", tracker.location());
      return;
    }

    let name_width = tasks
      .iter()
      .map(|t| t.name().chars().count())
      .max()
      .unwrap_or_default();

    for task in tasks.iter() {
      let line = format_summary(task, name_width);
      if tracker.lifecycle().is_cancelled(task.current_status()) {
        println!("{}", line.dimmed());
      } else {
        println!("{}", line);
      }
    }
  }

  pub fn print_task(&self, name: &str) -> crate::Result<()> {
    let tracker = self.tracker.borrow();
    let task = tracker.task(name)?;
    self.log_task(task);
    Ok(())
  }

  pub fn log_task(&self, task: &Task) {
    println!("{}", task.name().bold().cyan());
    if !task.description().is_empty() {
      println!("{}", task.description().italic());
    }
    println!(
      "created: {}  last change: {}",
      format_date(task.date_create()).green(),
      format_date(task.last_change()).yellow()
    );

    for (i, (date, status)) in task.history().into_iter().enumerate() {
      let entry = format_history_entry(date, status);
      match i {
        0 => println!("  {} {}", "*".bright_yellow(), entry.bold()),
        _ => println!("    {}", entry.dimmed()),
      }
    }
  }
}
