//! Parcel tracker command-line front end.
//!
//! # Responsibility
//! - Parse tracker commands and route them to `ParcelService`.
//! - Print one tab-separated line per parcel:
//!   `number<TAB>client<TAB>status<TAB>address<TAB>created_at`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use parcel_core::{
    default_log_level, init_logging, open_db, ClientId, Parcel, ParcelNumber, ParcelService,
    SqliteParcelRepository,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parcel_tracker", version, about = "Track parcels from registration to delivery")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "PARCEL_TRACKER_DB", default_value = "tracker.db", global = true)]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "PARCEL_TRACKER_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; file logging is off when unset
    #[arg(long, env = "PARCEL_TRACKER_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new parcel for a client
    Register {
        #[arg(long)]
        client: ClientId,
        #[arg(long)]
        address: String,
    },
    /// List all parcels of a client
    List {
        #[arg(long)]
        client: ClientId,
    },
    /// Show one parcel
    Show { number: ParcelNumber },
    /// Advance a parcel to its next status
    NextStatus { number: ParcelNumber },
    /// Change the address of a registered parcel
    SetAddress {
        number: ParcelNumber,
        address: String,
    },
    /// Delete a registered parcel
    Delete { number: ParcelNumber },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open parcel database `{}`", cli.db.display()))?;
    let repo = SqliteParcelRepository::try_new(&conn)?;
    let service = ParcelService::new(repo);

    match cli.command {
        Command::Register { client, address } => {
            let parcel = service.register(client, address)?;
            print_parcel(&parcel);
        }
        Command::List { client } => {
            for parcel in service.client_parcels(client)? {
                print_parcel(&parcel);
            }
        }
        Command::Show { number } => print_parcel(&service.parcel(number)?),
        Command::NextStatus { number } => match service.next_status(number)? {
            Some(status) => println!("{number}\t{status}"),
            None => println!("{number}\talready delivered"),
        },
        Command::SetAddress { number, address } => {
            service.change_address(number, &address)?;
            print_parcel(&service.parcel(number)?);
        }
        Command::Delete { number } => {
            service.delete(number)?;
            info!("event=cli_delete module=cli status=ok number={number}");
        }
    }

    Ok(())
}

fn print_parcel(parcel: &Parcel) {
    println!("{}", parcel_line(parcel));
}

/// Addresses are free-form, so tabs and line breaks inside them are
/// flattened to spaces to keep one record per line.
fn parcel_line(parcel: &Parcel) -> String {
    let address = parcel.address.replace(['\t', '\n', '\r'], " ");
    format!(
        "{}\t{}\t{}\t{}\t{}",
        parcel.number, parcel.client, parcel.status, address, parcel.created_at
    )
}

#[cfg(test)]
mod tests {
    use super::parcel_line;
    use parcel_core::Parcel;

    #[test]
    fn parcel_line_keeps_spaced_address_in_one_field() {
        let parcel = Parcel::new(7, "Main st. 1, apt 2", "2024-05-01T10:00:00Z").with_number(3);

        let line = parcel_line(&parcel);
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(
            fields,
            ["3", "7", "registered", "Main st. 1, apt 2", "2024-05-01T10:00:00Z"]
        );
    }

    #[test]
    fn parcel_line_flattens_tabs_and_newlines_in_address() {
        let parcel = Parcel::new(7, "dock\t4\ngate b", "2024-05-01T10:00:00Z").with_number(3);

        let line = parcel_line(&parcel);
        assert_eq!(line.split('\t').count(), 5);
        assert!(!line.contains('\n'));
        assert!(line.contains("dock 4 gate b"));
    }
}
