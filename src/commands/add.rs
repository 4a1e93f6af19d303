use super::{open_workspace, parse_date, parse_time, settle};
use crate::{
    libs::{messages::Message, task::NewTask},
    msg_success,
};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// List to file the task under; the default list if omitted
    #[arg(short, long)]
    list: Option<String>,
    /// Due date, YYYY-MM-DD
    #[arg(short, long, value_parser = parse_date)]
    due: Option<NaiveDate>,
    /// Due time, HH:MM; midnight if omitted
    #[arg(short, long, value_parser = parse_time, requires = "due")]
    time: Option<NaiveTime>,
    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,
    /// Flag the task
    #[arg(short, long)]
    flag: bool,
    /// Priority from 0 (none) to 3 (high)
    #[arg(short, long)]
    priority: Option<i64>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut workspace = open_workspace()?;

    let draft = NewTask {
        title: args.title,
        category: args.list,
        due_date: args.due.map(|date| date.and_time(args.time.unwrap_or(NaiveTime::MIN))),
        notes: args.notes,
        flagged: args.flag,
        priority: args.priority,
    };

    if let Some(task) = settle(workspace.create_task(draft))? {
        msg_success!(Message::TaskCreated(task.id, task.title));
    }
    Ok(())
}
