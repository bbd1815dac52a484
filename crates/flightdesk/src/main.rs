//! `flightdesk` - CLI for flight reservations
//!
//! This binary is the command-line front end: it collects booking fields,
//! runs them through validation and hands accepted bookings to storage.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use flightdesk::cli::{
    render_table, BookCommand, CancelCommand, Cli, Command, ConfigCommand, EditCommand,
    ListCommand,
};
use flightdesk::{init_logging, Config, Error, RawFields, Storage};

/// Date format of the booking form's date picker.
const DATE_FORMAT: &str = "%m/%d/%y";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Configuration is loaded per command so `config` subcommands still run
    // when the file is broken.
    match cli.command {
        Command::Init => handle_init(&load_config(cli.config)?),
        Command::Book(cmd) => handle_book(&load_config(cli.config)?, cmd),
        Command::List(cmd) => handle_list(&load_config(cli.config)?, &cmd),
        Command::Edit(cmd) => handle_edit(&load_config(cli.config)?, &cmd),
        Command::Cancel(cmd) => handle_cancel(&load_config(cli.config)?, &cmd),
        Command::Cities => {
            handle_cities(&load_config(cli.config)?);
            Ok(())
        }
        Command::Config(cmd) => handle_config(cli.config, cmd),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(path).context("loading configuration")
}

/// The file `config validate` checks: its own argument, then `--config`,
/// then the default location.
fn validation_target(file: Option<PathBuf>, global: Option<PathBuf>) -> PathBuf {
    file.or(global).unwrap_or_else(Config::default_config_path)
}

fn open_storage(config: &Config) -> anyhow::Result<Storage> {
    let path = config.database_path();
    Storage::open(&path).with_context(|| format!("opening reservations at {}", path.display()))
}

fn handle_init(config: &Config) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    storage.initialize()?;
    println!("Database ready: {}", storage.path().display());
    println!("Reservations:   {}", storage.count()?);
    Ok(())
}

fn handle_book(config: &Config, mut cmd: BookCommand) -> anyhow::Result<()> {
    if cmd.fields.date.is_none() {
        cmd.fields.date = Some(chrono::Local::now().format(DATE_FORMAT).to_string());
    }

    let booking = config.validator().validate(&cmd.fields.to_raw())?;
    let storage = open_storage(config)?;
    let id = storage.create(&booking)?;

    info!(id, "booked reservation");
    println!("Flight booked successfully! Reservation id: {id}");
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let reservations = storage.list_all()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&reservations)?);
    } else if reservations.is_empty() {
        println!("No reservations.");
    } else {
        print!("{}", render_table(&reservations));
    }
    Ok(())
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let existing = storage
        .get(cmd.id)?
        .ok_or(Error::NotFound { id: cmd.id })?;

    let raw = cmd.fields.overlay(RawFields::from(&existing.booking));
    let booking = config.validator().validate(&raw)?;

    if !storage.update(cmd.id, &booking)? {
        return Err(Error::NotFound { id: cmd.id }.into());
    }

    info!(id = cmd.id, "updated reservation");
    println!("Reservation {} updated.", cmd.id);
    Ok(())
}

fn handle_cancel(config: &Config, cmd: &CancelCommand) -> anyhow::Result<()> {
    if !cmd.yes {
        println!("This will permanently delete reservation {}.", cmd.id);
        println!("Use --yes to confirm.");
        return Ok(());
    }

    let storage = open_storage(config)?;
    if !storage.delete(cmd.id)? {
        return Err(Error::NotFound { id: cmd.id }.into());
    }

    info!(id = cmd.id, "deleted reservation");
    println!("Reservation {} deleted.", cmd.id);
    Ok(())
}

fn handle_cities(config: &Config) {
    for city in config.city_registry().names() {
        println!("{city}");
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!();
                println!("[Validation]");
                println!(
                    "  Cities:             {}",
                    config.validation.cities.join(", ")
                );
                println!(
                    "  Suggestion cutoff:  {}",
                    config.validation.suggestion_cutoff
                );
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = validation_target(file, config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("configuration {} is invalid", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
