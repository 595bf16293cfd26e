//! Item Props - Entry Point
//!
//! Reads a parsed item as JSON, derives its property filters and prints
//! them, together with the item stats left for ordinary filters.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use item_props::data::{export_default_tables, PropertyTables, TableLoader, TABLES_FILE};
use item_props::filters::{FiltersCreationContext, DEFAULT_SEARCH_RANGE};
use item_props::{ParsedItem, PropertyDeriver, StatCalculated, StatFilter};

/// Derived item property filters for price checking
#[derive(Parser, Debug)]
#[command(name = "item-props")]
#[command(about = "Derive property filters from a parsed item", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Derive property filters for an item read as JSON
    Derive {
        /// Item JSON file, or `-` for stdin
        input: String,

        /// Search range around each value, in percent
        #[arg(long, default_value_t = DEFAULT_SEARCH_RANGE)]
        range: f64,

        /// Property tables file to use instead of the search path
        #[arg(long)]
        tables: Option<PathBuf>,
    },

    /// Write the default property tables as RON
    ExportTables {
        /// Destination file
        #[arg(default_value_os_t = PathBuf::from("assets/data").join(TABLES_FILE))]
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct DeriveOutput<'a> {
    filters: &'a [StatFilter],
    remaining_stats: &'a [StatCalculated],
}

fn read_item(input: &str) -> Result<ParsedItem> {
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read item from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
    };
    serde_json::from_str(&content).context("invalid item JSON")
}

fn run_derive(input: &str, range: f64, tables_path: Option<PathBuf>) -> Result<()> {
    let tables = match tables_path {
        Some(path) => PropertyTables::from_def(TableLoader::load_file(&path)?),
        None => TableLoader::new().load(),
    };
    let item = read_item(input)?;

    let mut ctx = FiltersCreationContext::new(&item, range);
    PropertyDeriver::with_tables(&tables).filter_item_prop(&mut ctx);
    log::info!(
        "Derived {} property filters, {} stats left",
        ctx.filters.len(),
        ctx.stats_by_type.len()
    );

    let output = DeriveOutput {
        filters: &ctx.filters,
        remaining_stats: &ctx.stats_by_type,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Derive { input, range, tables } => run_derive(&input, range, tables),
        Command::ExportTables { path } => export_default_tables(&path).map_err(Into::into),
    };

    if let Err(ref e) = result {
        log::error!("item-props failed: {:#}", e);
    }
    result
}
