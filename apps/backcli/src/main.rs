// apps/backcli/src/main.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use sqlx::migrate::Migrator;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;
use user_lib::util::connect_with_retry;

const DEFAULT_MIGRATIONS_DIR: &str = "./libs/user-lib/migrations";
const DEFAULT_CONNECT_RETRIES: u32 = 10;

fn cli() -> Command {
    Command::new("backcli")
        .about("user-api operator utility")
        .arg(
            Arg::new("migrations")
                .long("migrations")
                .action(ArgAction::SetTrue)
                .help("Apply pending user-lib database migrations"),
        )
        .arg(
            Arg::new("database-url")
                .long("database-url")
                .env("DATABASE_URL")
                .help("MySQL connection URL"),
        )
        .arg(
            Arg::new("migrations-dir")
                .long("migrations-dir")
                .default_value(DEFAULT_MIGRATIONS_DIR)
                .help("Directory holding the user-lib migration files"),
        )
        .arg(
            Arg::new("retries")
                .long("retries")
                .value_parser(clap::value_parser!(u32))
                .default_value("10")
                .help("Connection attempts before giving up"),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = cli().get_matches();

    if !matches.get_flag("migrations") {
        tracing::info!("nothing to do, pass --migrations to apply migrations");
        return;
    }

    if let Err(e) = run_user_lib_migrations(&matches).await {
        tracing::error!(error = %e, "migration failed");
        process::exit(1);
    }
}

async fn run_user_lib_migrations(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let db_url = matches
        .get_one::<String>("database-url")
        .ok_or("DATABASE_URL must be set or --database-url given")?;
    let dir = matches
        .get_one::<String>("migrations-dir")
        .map(String::as_str)
        .unwrap_or(DEFAULT_MIGRATIONS_DIR);
    let retries = matches
        .get_one::<u32>("retries")
        .copied()
        .unwrap_or(DEFAULT_CONNECT_RETRIES);

    let pool = connect_with_retry(db_url, retries).await?;
    let migrator = Migrator::new(Path::new(dir)).await?;

    tracing::info!(dir = %dir, "running user-lib migrations");
    migrator.run(&pool).await?;
    tracing::info!("migrations applied successfully");

    Ok(())
}
