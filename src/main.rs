extern crate chrono;
extern crate colored;
extern crate serde;
extern crate serde_json;

use std::{cell::RefCell, rc::Rc};

use colored::Colorize;
use log::debug;

use taskflow::{
  storage::JsonStorage, time, viewer::Viewer, Config, Direction, Error, StatusLifecycle, Tracker,
};

fn build_cli() -> clap::Command<'static> {
  clap::Command::new("taskflow")
    .about("Personal task tracker with status history")
    .arg_required_else_help(true)
    .arg(
      clap::Arg::new("file")
        .short('f')
        .long("file")
        .takes_value(true)
        .global(true)
        .help("tasks file, defaults to the one from the config"),
    )
    .subcommand(clap::Command::new("list").about("show all tasks with their current status"))
    .subcommand(
      clap::Command::new("view")
        .about("show task details and status history")
        .arg(clap::Arg::new("name").required(true).index(1)),
    )
    .subcommand(
      clap::Command::new("create").about("create a new task").args(&[
        clap::Arg::new("name").required(true).index(1),
        clap::Arg::new("description").index(2),
        clap::Arg::new("status")
          .short('s')
          .long("status")
          .takes_value(true)
          .help("initial status, the first lifecycle status by default"),
      ]),
    )
    .subcommand(
      clap::Command::new("update")
        .about("move task status: prev, next, cancel or reopen")
        .args(&[
          clap::Arg::new("name").required(true).index(1),
          clap::Arg::new("direction").required(true).index(2),
        ]),
    )
    .subcommand(
      clap::Command::new("delete")
        .about("remove a task together with its history")
        .arg(clap::Arg::new("name").required(true).index(1)),
    )
    .subcommand(
      clap::Command::new("completions")
        .about("print shell completions")
        .arg(
          clap::Arg::new("shell")
            .required(true)
            .index(1)
            .possible_values(["bash", "elvish", "fish", "powershell", "zsh"]),
        ),
    )
}

fn main() {
  env_logger::init();

  let matches = build_cli().get_matches();

  if let Some(("completions", subcommand_matches)) = matches.subcommand() {
    let shell: clap_complete::Shell = match subcommand_matches.value_of_t("shell") {
      Ok(shell) => shell,
      Err(err) => err.exit(),
    };
    clap_complete::generate(shell, &mut build_cli(), "taskflow", &mut std::io::stdout());
    return;
  }

  let config = match Config::new() {
    Ok(config) => config,
    Err(err) => fail(&err),
  };
  let lifecycle = match config.lifecycle() {
    Ok(lifecycle) => lifecycle,
    Err(err) => fail(&err),
  };

  let tasks_file = matches
    .value_of("file")
    .unwrap_or(config.tasks_file_path.as_str())
    .to_owned();
  debug!("tasks file: {}", tasks_file);

  let tracker = Rc::new(RefCell::new(open_tracker(&tasks_file, lifecycle)));
  let viewer = Viewer::new(Rc::clone(&tracker));

  let res = match matches.subcommand() {
    Some(("list", _)) => {
      viewer.print_tasks();
      Ok(())
    }

    Some(("view", command_matches)) => viewer.print_task(command_matches.value_of("name").unwrap_or_default()),

    Some(("create", command_matches)) => {
      let mut t = tracker.borrow_mut();
      let default_status = t.lifecycle().first().to_owned();
      let name = command_matches.value_of("name").unwrap_or_default();
      let description = command_matches.value_of("description").unwrap_or_default();
      let status = command_matches.value_of("status").unwrap_or(default_status.as_str());

      let created = t.create(name, description, status, time::today()).map(|task| {
        println!("task created:");
        viewer.log_task(task);
      });
      created
    }

    Some(("update", command_matches)) => {
      let name = command_matches.value_of("name").unwrap_or_default();
      command_matches
        .value_of("direction")
        .unwrap_or_default()
        .parse::<Direction>()
        .and_then(|direction| {
          let mut t = tracker.borrow_mut();
          let changed = t.change_status(name, direction, time::today()).map(|task| {
            println!(
              "task '{}' status changed to '{}'",
              task.name(),
              task.current_status().bold()
            );
          });
          changed
        })
    }

    Some(("delete", command_matches)) => {
      let name = command_matches.value_of("name").unwrap_or_default();
      tracker
        .borrow_mut()
        .delete(name)
        .map(|_| println!("task '{}' deleted", name))
    }

    Some((subcmd, _)) => {
      println!("unknown subcommand {}", subcmd);
      Ok(())
    }
    None => {
      println!("subcommand not found");
      Ok(())
    }
  };

  if let Err(err) = res {
    fail(&err);
  }
}

fn open_tracker(tasks_file: &str, lifecycle: StatusLifecycle) -> Tracker {
  match Tracker::open(Box::new(JsonStorage::new(tasks_file)), lifecycle.clone()) {
    Ok(tracker) => tracker,
    // a brand new tasks file is fine, a broken one must not get overwritten
    Err(Error::MissingFile(path)) => {
      println!("{}", format!("tasks file {} not found, starting empty", path).yellow());
      let (tracker, _) = Tracker::open_or_empty(Box::new(JsonStorage::new(tasks_file)), lifecycle);
      tracker
    }
    Err(err) => fail(&err),
  }
}

fn fail(err: &Error) -> ! {
  eprintln!("{} {}", "error:".red().bold(), err);
  std::process::exit(1);
}
