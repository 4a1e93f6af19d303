//! Command-line front end.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. Expected failures (bad input, unknown ids or lists) are
//! reported to the user and the command exits cleanly; storage failures are
//! returned as errors.

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod lists;
pub mod progress;
pub mod show;

use crate::libs::config::Config;
use crate::libs::error::TaskResult;
use crate::libs::messages::Message;
use crate::libs::workspace::Workspace;
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Show the tasks of a view")]
    Show(show::ShowArgs),
    #[command(about = "Mark a task as done")]
    Done(done::DoneArgs),
    #[command(about = "Mark a task as not done")]
    Undo(done::DoneArgs),
    #[command(about = "Change fields of a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show and manage lists")]
    Lists(lists::ListsArgs),
    #[command(about = "Show done versus pending tasks")]
    Progress,
    #[command(about = "Export a view to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Done(args) => done::cmd(args, true),
            Commands::Undo(args) => done::cmd(args, false),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Lists(args) => lists::cmd(args),
            Commands::Progress => progress::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Loads the collection from the configured store.
pub(crate) fn open_workspace() -> Result<Workspace> {
    let store = Config::read()?.open_store()?;
    Ok(Workspace::load(store)?)
}

/// Unwraps a workspace result for a command.
///
/// Validation and not-found errors are printed and yield `None`; anything
/// else becomes the command's error.
pub(crate) fn settle<T>(result: TaskResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_validation() || err.is_not_found() => {
            msg_error!(Message::OperationFailed(err.to_string()));
            Ok(None)
        }
        Err(err) => Err(msg_error_anyhow!(Message::OperationFailed(err.to_string()))),
    }
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| format!("'{}' is not a date, expected YYYY-MM-DD", value))
}

pub(crate) fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| format!("'{}' is not a time, expected HH:MM", value))
}
