use super::{open_workspace, settle};
use crate::{
    libs::{messages::Message, summary::pending_by_category, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(subcommand)]
    command: Option<ListsCommand>,
}

#[derive(Debug, Subcommand)]
enum ListsCommand {
    /// Create an empty list
    New {
        /// List name
        name: String,
    },
    /// Rename a list and move its tasks along
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Delete a list; its tasks move to the default list
    Delete {
        /// List name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ListsArgs) -> Result<()> {
    match args.command {
        None => handle_list(),
        Some(ListsCommand::New { name }) => handle_new(name),
        Some(ListsCommand::Rename { old, new }) => handle_rename(old, new),
        Some(ListsCommand::Delete { name, yes }) => handle_delete(name, yes),
    }
}

fn handle_list() -> Result<()> {
    let workspace = open_workspace()?;
    let counts = pending_by_category(workspace.tasks());

    if counts.is_empty() {
        msg_info!(Message::NoListsFound);
        return Ok(());
    }

    msg_print!(Message::ListsHeader, true);
    View::lists(&counts);
    Ok(())
}

fn handle_new(name: String) -> Result<()> {
    let mut workspace = open_workspace()?;

    if settle(workspace.register_category(&name))?.is_some() {
        msg_success!(Message::ListCreated(name.trim().to_string()));
    }
    Ok(())
}

fn handle_rename(old: String, new: String) -> Result<()> {
    let mut workspace = open_workspace()?;

    if settle(workspace.rename_category(&old, &new))?.is_some() {
        msg_success!(Message::ListRenamed(old.trim().to_string(), new.trim().to_string()));
    }
    Ok(())
}

fn handle_delete(name: String, yes: bool) -> Result<()> {
    let mut workspace = open_workspace()?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteList(name.trim().to_string()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::DeleteCancelled);
        return Ok(());
    }

    if let Some(moved) = settle(workspace.delete_category(&name))? {
        msg_success!(Message::ListDeleted(name.trim().to_string(), moved));
    }
    Ok(())
}
