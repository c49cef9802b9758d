//! Argument parsing and command dispatch.
//!
//! The store is opened once per invocation and closed explicitly before the
//! process exits, whatever the command outcome.

use crate::config::ContactsConfig;
use crate::render;
use clap::{Parser, Subcommand};
use contacts_core::db::open_db;
use contacts_core::{
    default_log_level, export_to_dir, init_logging, ContactFields, ContactService,
    JsonExporter, SqliteContactStore,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version)]
#[command(about = "Keep a small contact book in a local SQLite file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a contact unless the name already exists
    Add {
        name: String,
        age: String,
        email: String,
        phone: String,
    },
    /// List every contact
    List,
    /// Overwrite all fields of the contact with the given id
    Update {
        id: i64,
        name: String,
        age: String,
        email: String,
        phone: String,
    },
    /// Delete every contact with exactly this name
    Delete { name: String },
    /// List contacts whose name contains the query (case-insensitive)
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show the first contact with exactly this name
    Show { name: String },
    /// Write a timestamped JSON export of all contacts
    Export {
        /// Target directory (overrides configuration)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut config = ContactsConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    if let Some(log_dir) = &config.log_dir {
        let level = config.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let service = ContactService::new(SqliteContactStore::new(open_db(&config.db_path)?));
    let result = dispatch(&service, cli.command, &config);

    let mut store = service.into_repo();
    store.close()?;

    let output = result?;
    print!("{output}");
    Ok(())
}

fn dispatch(
    service: &ContactService<SqliteContactStore>,
    command: Command,
    config: &ContactsConfig,
) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Command::Add {
            name,
            age,
            email,
            phone,
        } => {
            let outcome = service.save(&ContactFields::new(name, age, email, phone))?;
            line(render::save_outcome(outcome))
        }
        Command::List => render::contacts_table(&service.list()?),
        Command::Update {
            id,
            name,
            age,
            email,
            phone,
        } => {
            let outcome = service.update(id, &ContactFields::new(name, age, email, phone))?;
            line(render::update_outcome(id, outcome))
        }
        Command::Delete { name } => {
            let removed = service.delete_by_name(&name)?;
            line(format!("Deleted {removed} contact(s)."))
        }
        Command::Search { query } => render::contacts_table(&service.search(&query)?),
        Command::Show { name } => match service.select_by_name(&name)? {
            Some(contact) => render::contacts_table(std::slice::from_ref(&contact)),
            None => line(format!("No contact named `{name}`.")),
        },
        Command::Export { dir } => {
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());
            let contacts = service.list()?;
            let now = chrono::Local::now().naive_local();
            let path = export_to_dir(&dir, &JsonExporter, &contacts, now)?;
            info!("event=cli_export module=cli status=ok rows={}", contacts.len());
            line(format!("Exported {} contact(s) to {}", contacts.len(), path.display()))
        }
    };
    Ok(output)
}

fn line(message: String) -> String {
    format!("{message}\n")
}
