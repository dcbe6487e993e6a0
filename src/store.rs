use chrono::NaiveDate;

use crate::{
  error::{Error, Result},
  lifecycle::StatusLifecycle,
  storage::{Storage, TaskRecord},
  task::Task,
};

/// Tasks of one tasks file, in insertion order, with unique names.
pub struct TaskStore {
  lifecycle: StatusLifecycle,
  tasks: Vec<Task>,
}

impl TaskStore {
  pub fn new(lifecycle: StatusLifecycle) -> Self {
    Self {
      lifecycle,
      tasks: Vec::new(),
    }
  }

  pub fn lifecycle(&self) -> &StatusLifecycle {
    &self.lifecycle
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn add(&mut self, task: Task) -> bool {
    self.insert(task).is_ok()
  }

  pub fn insert(&mut self, task: Task) -> Result<()> {
    if !self.lifecycle.contains(task.current_status()) {
      return Err(Error::InvalidStatus(task.current_status().to_owned()));
    }
    if self.position(task.name()).is_some() {
      return Err(Error::DuplicateName(task.name().to_owned()));
    }

    self.tasks.push(task);
    Ok(())
  }

  pub fn find_by_name(&self, name: &str) -> Option<&Task> {
    self.tasks.iter().find(|t| t.name() == name)
  }

  pub fn get(&self, name: &str) -> Result<&Task> {
    self
      .find_by_name(name)
      .ok_or_else(|| Error::NotFound(name.to_owned()))
  }

  pub fn remove(&mut self, name: &str) -> bool {
    self.take(name).is_some()
  }

  /// Removes a task and returns it along with its position.
  pub fn take(&mut self, name: &str) -> Option<(usize, Task)> {
    let position = self.position(name)?;
    Some((position, self.tasks.remove(position)))
  }

  /// Puts a task taken with [`TaskStore::take`] back where it was.
  pub fn put_back(&mut self, position: usize, task: Task) {
    let position = position.min(self.tasks.len());
    self.tasks.insert(position, task);
  }

  pub fn names(&self) -> Vec<String> {
    self.tasks.iter().map(|t| t.name().to_owned()).collect()
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  /// Prepends an already computed status to the task's history.
  pub fn update_status(&mut self, name: &str, new_status: &str, today: NaiveDate) -> Result<&Task> {
    let position = self
      .position(name)
      .ok_or_else(|| Error::NotFound(name.to_owned()))?;

    self.tasks[position].apply_transition(new_status, today);
    Ok(&self.tasks[position])
  }

  pub fn pop_transition(&mut self, name: &str) -> Result<()> {
    let position = self
      .position(name)
      .ok_or_else(|| Error::NotFound(name.to_owned()))?;
    self.tasks[position].pop_transition();
    Ok(())
  }

  /// Replaces every task. On error the store keeps its previous content.
  pub fn load_all(&mut self, records: Vec<TaskRecord>, source: &str) -> Result<()> {
    let mut tasks: Vec<Task> = Vec::with_capacity(records.len());
    for record in records {
      let task = record
        .into_task(&self.lifecycle)
        .map_err(|err| Error::load(source, err))?;

      if tasks.iter().any(|t| t.name() == task.name()) {
        return Err(Error::load(
          source,
          format!("task '{}' is listed twice", task.name()),
        ));
      }
      tasks.push(task);
    }

    self.tasks = tasks;
    Ok(())
  }

  pub fn records(&self) -> Vec<TaskRecord> {
    self.tasks.iter().map(TaskRecord::from).collect()
  }

  pub fn save_all(&self, storage: &mut dyn Storage) -> Result<()> {
    storage.store(&self.records())
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.tasks.iter().position(|t| t.name() == name)
  }
}
