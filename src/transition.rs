use crate::{
  error::{Error, Result},
  lifecycle::StatusLifecycle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Previous,
  Next,
  Cancel,
  Reopen,
}

impl Direction {
  pub const ALL: [Direction; 4] = [Self::Previous, Self::Next, Self::Cancel, Self::Reopen];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Previous => "prev",
      Self::Next => "next",
      Self::Cancel => "cancel",
      Self::Reopen => "reopen",
    }
  }
}

impl std::fmt::Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for Direction {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    // digits follow the old interactive menu
    match s.trim().to_lowercase().as_str() {
      "prev" | "previous" | "1" => Ok(Self::Previous),
      "next" | "2" => Ok(Self::Next),
      "cancel" | "3" => Ok(Self::Cancel),
      "reopen" | "4" => Ok(Self::Reopen),
      _ => Err(Error::UnknownDirection(s.to_owned())),
    }
  }
}

/// Computes status changes without touching any task.
#[derive(Debug, Clone, Default)]
pub struct TransitionEngine {
  lifecycle: StatusLifecycle,
}

impl TransitionEngine {
  pub fn new(lifecycle: StatusLifecycle) -> Self {
    Self { lifecycle }
  }

  pub fn lifecycle(&self) -> &StatusLifecycle {
    &self.lifecycle
  }

  pub fn compute_transition(&self, current: &str, direction: Direction) -> Result<&str> {
    let lifecycle = &self.lifecycle;
    lifecycle.index_of(current)?;

    match direction {
      Direction::Cancel => Ok(lifecycle.cancelled()),
      Direction::Reopen => {
        if !lifecycle.is_cancelled(current) {
          return Err(Error::NotCancelled(current.to_owned()));
        }
        Ok(lifecycle.first())
      }
      _ if lifecycle.is_cancelled(current) => Err(Error::TaskCancelled(current.to_owned())),
      Direction::Previous => {
        if current == lifecycle.first() {
          return Err(Error::AtFirstStatus(current.to_owned()));
        }
        lifecycle.previous(current)
      }
      Direction::Next => {
        if current == lifecycle.done() {
          return Err(Error::AtLastStatus(current.to_owned()));
        }
        lifecycle.next(current)
      }
    }
  }
}
