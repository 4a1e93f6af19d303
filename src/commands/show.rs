use super::{now, open_workspace};
use crate::{
    libs::{
        filter::{search, ViewSelector},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// all, today, scheduled, flagged, overdue, completed or a list name
    /// (prefix with `list:` for lists named like a view)
    #[arg(default_value = "all")]
    view: String,
    /// Only tasks whose title contains this text
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let workspace = open_workspace()?;
    let selector: ViewSelector = args.view.parse().unwrap_or_default();
    let now = now();

    let mut tasks = workspace.view(&selector, now);
    if let Some(query) = &args.search {
        tasks = search(&tasks, query);
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksInView(selector.title()));
        return Ok(());
    }

    msg_print!(Message::ViewHeader(selector.title(), tasks.len()), true);
    View::tasks(&tasks, now);
    Ok(())
}
