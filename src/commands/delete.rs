use super::{open_workspace, settle};
use crate::{
    libs::{error::TaskError, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut workspace = open_workspace()?;

    let title = match workspace.get(args.id) {
        Some(task) => task.title.clone(),
        None => {
            msg_error!(Message::OperationFailed(TaskError::NotFound(args.id).to_string()));
            return Ok(());
        }
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::DeleteCancelled);
        return Ok(());
    }

    if settle(workspace.delete_task(args.id))?.is_some() {
        msg_success!(Message::TaskDeleted(args.id));
    }
    Ok(())
}
