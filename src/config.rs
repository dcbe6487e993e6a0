use crate::{
  error::{Error, Result},
  lifecycle::{StatusLifecycle, DEFAULT_STATUSES},
};

const TASKFLOW_DEFAULT_TASKS_FILE: &str = "tasks.json";
const TASKFLOW_DEFAULT_CONFIG_NAME: &str = ".taskflow.json";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub tasks_file_path: String,
  /// Status labels in lifecycle order, the cancelled status goes last.
  #[serde(default = "default_statuses")]
  pub statuses: Vec<String>,
}

fn default_statuses() -> Vec<String> {
  DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect()
}

impl Config {
  /// Reads `$TASKFLOW_CONFIG` or `$HOME/.taskflow.json`, writing a default
  /// config there first if the file doesn't exist yet.
  pub fn new() -> Result<Self> {
    let home_env = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var("TASKFLOW_CONFIG") {
      Ok(file_path) => std::path::PathBuf::from(file_path),
      Err(_) => home.join(TASKFLOW_DEFAULT_CONFIG_NAME),
    };

    let default_tasks_file = home.join(TASKFLOW_DEFAULT_TASKS_FILE);
    return Self::load_or_create(&config_file_path, &default_tasks_file.to_string_lossy());
  }

  pub fn load_or_create(config_file_path: &std::path::Path, default_tasks_file: &str) -> Result<Self> {
    let path_str = config_file_path.to_string_lossy().to_string();
    let config_error = |reason: String| Error::Config {
      path: path_str.clone(),
      reason,
    };

    if !config_file_path.exists() {
      let config = Self {
        tasks_file_path: default_tasks_file.to_owned(),
        statuses: default_statuses(),
      };

      let file = std::fs::File::create(config_file_path).map_err(|err| config_error(err.to_string()))?;
      serde_json::to_writer_pretty(file, &config).map_err(|err| config_error(err.to_string()))?;
      log::info!("created default config: {}", path_str);
      return Ok(config);
    }

    let file = std::fs::File::open(config_file_path).map_err(|err| config_error(err.to_string()))?;
    let config: Self =
      serde_json::from_reader(std::io::BufReader::new(file)).map_err(|err| config_error(err.to_string()))?;
    config.lifecycle()?;
    return Ok(config);
  }

  pub fn lifecycle(&self) -> Result<StatusLifecycle> {
    StatusLifecycle::new(self.statuses.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::Config;
  use crate::{Error, StatusLifecycle};

  #[test]
  fn creates_default_config() {
    let dir = tempfile::Builder::new().prefix("taskflow").tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config::load_or_create(&path, "/tmp/tasks.json").unwrap();
    assert_eq!(config.tasks_file_path, "/tmp/tasks.json");
    assert_eq!(config.lifecycle().unwrap(), StatusLifecycle::default());
    assert!(path.exists());

    let reread = Config::load_or_create(&path, "/elsewhere.json").unwrap();
    assert_eq!(reread, config);
  }

  #[test]
  fn statuses_are_optional() {
    let dir = tempfile::Builder::new().prefix("taskflow").tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tasks_file_path": "work.json"}"#).unwrap();

    let config = Config::load_or_create(&path, "tasks.json").unwrap();
    assert_eq!(config.tasks_file_path, "work.json");
    assert_eq!(config.statuses.len(), 5);
  }

  #[test]
  fn rejects_bad_lifecycle() {
    let dir = tempfile::Builder::new().prefix("taskflow").tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"tasks_file_path": "t.json", "statuses": ["only"]}"#).unwrap();

    let res = Config::load_or_create(&path, "tasks.json");
    assert!(matches!(res, Err(Error::InvalidLifecycle(_))));
  }

  #[test]
  fn rejects_broken_json() {
    let dir = tempfile::Builder::new().prefix("taskflow").tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{").unwrap();

    assert!(matches!(
      Config::load_or_create(&path, "tasks.json"),
      Err(Error::Config { .. })
    ));
  }
}
