//! Export of a view for spreadsheets or other tools.

use super::{now, open_workspace};
use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        filter::ViewSelector,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// View to export, named as for `show`
    #[arg(default_value = "all")]
    view: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; `listo_<view>_<timestamp>.<ext>` in the current directory if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let workspace = open_workspace()?;
    let selector: ViewSelector = args.view.parse().unwrap_or_default();
    let now = now();

    let tasks = workspace.view(&selector, now);
    let exporter = Exporter::new(args.format, args.output, &selector.title());
    let path = exporter.export(&tasks, now)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
