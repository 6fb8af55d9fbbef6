//! uicfg CLI
//!
//! Command-line interface for the UI config store

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uicfg_core::logging_facility::{self, Profile};
use uicfg_store::SqliteConfigStore;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "uicfg")]
#[command(about = "uicfg - UI component style configuration store", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "UICFG_DB", default_value = ".uicfg/store.db")]
    db: PathBuf,

    /// Use a throwaway in-memory database instead of --db
    #[arg(long, global = true)]
    in_memory: bool,

    /// Log output format: human or json (logs go to stderr)
    #[arg(long, global = true, env = "UICFG_LOG_FORMAT", default_value = "human")]
    log_format: Profile,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create an attribute row
    Create(commands::config::CreateArgs),
    /// List attribute rows for a component
    Get(commands::config::GetArgs),
    /// Update an attribute row by id
    Update(commands::config::UpdateArgs),
    /// Show the resolved configuration of a button
    Button(commands::button::ButtonArgs),
    /// Report liveness
    Health,
    /// Answer line-delimited JSON requests on stdin/stdout
    Serve,
}

fn open_store(global: &GlobalArgs) -> Result<SqliteConfigStore, Box<dyn std::error::Error>> {
    let store = if global.in_memory {
        SqliteConfigStore::open_in_memory()?
    } else {
        SqliteConfigStore::open(&global.db)?
    };
    tracing::debug!(
        db = %global.db.display(),
        in_memory = global.in_memory,
        "store opened"
    );
    Ok(store)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Liveness never opens the database
    if let Commands::Health = cli.command {
        return commands::serve::execute_health();
    }

    let mut store = open_store(&cli.global)?;

    match cli.command {
        Commands::Create(args) => commands::config::execute_create(args, &mut store),
        Commands::Get(args) => commands::config::execute_get(args, &mut store),
        Commands::Update(args) => commands::config::execute_update(args, &mut store),
        Commands::Button(args) => commands::button::execute(args, &mut store),
        Commands::Serve => commands::serve::execute_serve(&mut store),
        Commands::Health => commands::serve::execute_health(),
    }
}

fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging_facility::init(cli.global.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
