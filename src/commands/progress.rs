use super::{now, open_workspace};
use crate::{
    libs::{
        messages::Message,
        summary::{view_counts, Progress},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let workspace = open_workspace()?;
    let progress = Progress::of(workspace.tasks());

    if progress.total() == 0 {
        msg_info!(Message::NoTasksYet);
        return Ok(());
    }

    msg_print!(Message::ProgressHeader, true);
    View::progress(&progress);

    msg_print!(Message::SmartViewsHeader, true);
    View::views(&view_counts(workspace.tasks(), now()));
    Ok(())
}
