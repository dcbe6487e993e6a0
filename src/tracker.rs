use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::{
  error::{Error, Result},
  lifecycle::StatusLifecycle,
  storage::Storage,
  store::TaskStore,
  task::Task,
  transition::{Direction, TransitionEngine},
};

/// Front ends talk to this: every accepted change is saved right away, and a
/// change whose save fails is undone before the error is returned.
pub struct Tracker {
  store: TaskStore,
  engine: TransitionEngine,
  storage: Box<dyn Storage>,
}

impl Tracker {
  /// Loads the tasks, failing on a missing or broken file.
  pub fn open(storage: Box<dyn Storage>, lifecycle: StatusLifecycle) -> Result<Self> {
    let mut tracker = Self::empty(storage, lifecycle);
    let records = tracker.storage.load()?;
    tracker.store.load_all(records, tracker.storage.location())?;

    debug!(
      "loaded {} tasks from: {}",
      tracker.store.len(),
      tracker.storage.location()
    );
    return Ok(tracker);
  }

  /// Like [`Tracker::open`], but starts empty when the tasks can't be loaded
  /// and hands the reason back so the caller can show it.
  pub fn open_or_empty(storage: Box<dyn Storage>, lifecycle: StatusLifecycle) -> (Self, Option<Error>) {
    let mut tracker = Self::empty(storage, lifecycle);
    let loaded = tracker
      .storage
      .load()
      .and_then(|records| tracker.store.load_all(records, tracker.storage.location()));

    match loaded {
      Ok(_) => (tracker, None),
      Err(err) => {
        warn!("starting with no tasks: {}", err);
        (tracker, Some(err))
      }
    }
  }

  fn empty(storage: Box<dyn Storage>, lifecycle: StatusLifecycle) -> Self {
    Self {
      store: TaskStore::new(lifecycle.clone()),
      engine: TransitionEngine::new(lifecycle),
      storage,
    }
  }

  pub fn lifecycle(&self) -> &StatusLifecycle {
    self.engine.lifecycle()
  }

  pub fn location(&self) -> &str {
    self.storage.location()
  }

  pub fn names(&self) -> Vec<String> {
    self.store.names()
  }

  pub fn tasks(&self) -> &[Task] {
    self.store.tasks()
  }

  pub fn task(&self, name: &str) -> Result<&Task> {
    self.store.get(name)
  }

  pub fn create(&mut self, name: &str, description: &str, status: &str, today: NaiveDate) -> Result<&Task> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }

    let task = Task::create(name, description.trim(), status, today, self.engine.lifecycle())?;
    self.store.insert(task)?;
    if let Err(err) = self.save() {
      self.store.remove(name);
      return Err(err);
    }

    info!("created task '{}' with status '{}'", name, status);
    self.store.get(name)
  }

  pub fn change_status(&mut self, name: &str, direction: Direction, today: NaiveDate) -> Result<&Task> {
    let current = self.store.get(name)?.current_status();
    let new_status = self.engine.compute_transition(current, direction)?.to_owned();

    self.store.update_status(name, &new_status, today)?;
    if let Err(err) = self.save() {
      self.store.pop_transition(name)?;
      return Err(err);
    }

    info!("task '{}': {} -> '{}'", name, direction, new_status);
    self.store.get(name)
  }

  pub fn delete(&mut self, name: &str) -> Result<()> {
    let (position, task) = self
      .store
      .take(name)
      .ok_or_else(|| Error::NotFound(name.to_owned()))?;
    if let Err(err) = self.save() {
      self.store.put_back(position, task);
      return Err(err);
    }

    info!("deleted task '{}'", name);
    Ok(())
  }

  fn save(&mut self) -> Result<()> {
    self.store.save_all(self.storage.as_mut())?;
    debug!(
      "saved {} tasks to: {}",
      self.store.len(),
      self.storage.location()
    );
    Ok(())
  }
}
