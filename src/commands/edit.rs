use super::{open_workspace, parse_date, parse_time, settle};
use crate::{
    libs::{
        messages::Message,
        task::{DueChange, TaskUpdate},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// Move the task to another list; an empty name means the default list
    #[arg(short, long)]
    list: Option<String>,
    /// New due date, YYYY-MM-DD; midnight unless --time is given
    #[arg(short, long, value_parser = parse_date, conflicts_with = "clear_due")]
    due: Option<NaiveDate>,
    /// New due time, HH:MM; keeps the current due date if --due is omitted
    #[arg(short, long, value_parser = parse_time, conflicts_with = "clear_due")]
    time: Option<NaiveTime>,
    /// Remove the due date
    #[arg(long)]
    clear_due: bool,
    /// New notes; an empty value clears them
    #[arg(short, long)]
    notes: Option<String>,
    /// Flag the task
    #[arg(long, conflicts_with = "unflag")]
    flag: bool,
    /// Remove the flag
    #[arg(long)]
    unflag: bool,
    /// Priority from 0 (none) to 3 (high)
    #[arg(short, long)]
    priority: Option<i64>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut workspace = open_workspace()?;

    let due = match (args.clear_due, args.due, args.time) {
        (true, _, _) => Some(DueChange::Clear),
        (false, Some(date), time) => Some(DueChange::Set { date, time }),
        (false, None, Some(time)) => match workspace.get(args.id) {
            Some(task) => match task.due_date {
                Some(current) => Some(DueChange::Set {
                    date: current.date(),
                    time: Some(time),
                }),
                None => msg_bail_anyhow!(Message::TimeNeedsDate),
            },
            // Unknown id; the update below reports it.
            None => None,
        },
        (false, None, None) => None,
    };

    let flagged = match (args.flag, args.unflag) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let update = TaskUpdate {
        title: args.title,
        category: args.list,
        due,
        notes: args.notes.map(Some),
        flagged,
        priority: args.priority,
    };

    if is_empty(&update) && args.time.is_none() {
        msg_info!(Message::NothingToUpdate);
        return Ok(());
    }

    if settle(workspace.update_task(args.id, update))?.is_some() {
        msg_success!(Message::TaskUpdated(args.id));
    }
    Ok(())
}

fn is_empty(update: &TaskUpdate) -> bool {
    update.title.is_none()
        && update.category.is_none()
        && update.due.is_none()
        && update.notes.is_none()
        && update.flagged.is_none()
        && update.priority.is_none()
}
