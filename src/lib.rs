extern crate chrono;
extern crate colored;
extern crate serde;
extern crate serde_json;

mod error;
mod tracker;

pub mod config;
pub mod fmt;
pub mod lifecycle;
pub mod storage;
pub mod store;
pub mod task;
pub mod time;
pub mod transition;
pub mod viewer;

pub use config::Config;
pub use error::{Error, Result};
pub use lifecycle::StatusLifecycle;
pub use store::TaskStore;
pub use task::Task;
pub use tracker::*;
pub use transition::{Direction, TransitionEngine};
