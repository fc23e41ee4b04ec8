//! Applies the task schema to the configured `PostgreSQL` database.
//!
//! Configuration is read from an optional YAML file and the
//! `TODO_DATABASE_URL` / `TODO_POOL_SIZE` environment variables.

use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use todo_backend::config::Config;
use todo_backend::task::adapters::postgres::{apply_migrations, revert_migrations};
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "todo-migrate", about = "Manage the to-do task schema")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drop the task schema instead of creating it.
    #[arg(long)]
    revert: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    todo_backend::telemetry::init_tracing(cli.verbose)
        .map_err(|err| eyre::eyre!("failed to install log subscriber: {err}"))?;

    let config = Config::load(cli.config.as_deref()).wrap_err("load configuration")?;
    let pool = config
        .database
        .build_pool()
        .wrap_err("connect to database")?;
    let mut connection = pool.get().wrap_err("acquire database connection")?;

    if cli.revert {
        revert_migrations(&mut connection).wrap_err("revert task schema")?;
        info!("task schema reverted");
    } else {
        apply_migrations(&mut connection).wrap_err("apply task schema")?;
        info!("task schema applied");
    }
    Ok(())
}
