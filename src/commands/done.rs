use super::{open_workspace, settle};
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(args: DoneArgs, done: bool) -> Result<()> {
    let mut workspace = open_workspace()?;

    if settle(workspace.toggle_done(args.id, done))?.is_some() {
        if done {
            msg_success!(Message::TaskCompleted(args.id));
        } else {
            msg_success!(Message::TaskReopened(args.id));
        }
    }
    Ok(())
}
