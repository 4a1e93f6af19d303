//! Writes `config.json`.
//!
//! Options given on the command line are used as is; anything missing is
//! asked for interactively, starting from the current configuration.

use crate::{
    db::store::SchemaPolicy,
    libs::{
        config::{Backend, Config},
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Storage backend
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// What to do with storage missing expected columns
    #[arg(short, long, value_enum)]
    schema_policy: Option<SchemaPolicy>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;
    let previous = config.backend;

    config.backend = match init_args.backend {
        Some(backend) => backend,
        None => {
            let choices = [Backend::Csv, Backend::Sqlite];
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Storage backend")
                .items(&["CSV file (tasks.csv)", "SQLite database (listo.db)"])
                .default(choices.iter().position(|b| *b == config.backend).unwrap_or(0))
                .interact()?;
            choices[selection]
        }
    };

    config.schema_policy = match init_args.schema_policy {
        Some(policy) => policy,
        None => {
            let choices = [SchemaPolicy::Reset, SchemaPolicy::Migrate];
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Storage with missing columns")
                .items(&["Reset it to an empty collection", "Migrate it, filling in defaults"])
                .default(choices.iter().position(|p| *p == config.schema_policy).unwrap_or(0))
                .interact()?;
            choices[selection]
        }
    };

    if config.backend != previous {
        msg_warning!(Message::BackendChanged(format!("{:?}", previous).to_lowercase()));
    }

    config.save()?;
    msg_success!(Message::ConfigSaved(config.path()?.display().to_string()));

    let store = config.open_store()?;
    msg_info!(Message::StorageLocation(store.location().display().to_string()));
    Ok(())
}
