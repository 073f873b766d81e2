use migration::runner;
use sea_orm::Database;
use std::process;
use util::config;

const USAGE: &str = "Usage: migration [migrate|drop|reset]
  migrate - Run pending migrations (default)
  drop    - Drop all tables
  reset   - Drop all tables and run migrations";

#[tokio::main]
async fn main() {
    let command = std::env::args().nth(1).unwrap_or_else(|| "migrate".into());
    if !matches!(command.as_str(), "migrate" | "drop" | "reset") {
        eprintln!("Unknown command: {command}\n{USAGE}");
        process::exit(1);
    }

    let url = match config::database_dsn(&config::database_url()) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Failed to prepare database path: {e}");
            process::exit(1);
        }
    };
    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("DB connection failed: {e}");
            process::exit(1);
        }
    };

    let result = match command.as_str() {
        "drop" => runner::drop_all_tables(&db).await,
        "reset" => runner::reset(&db).await,
        _ => runner::run_all_migrations(&db).await,
    };

    if let Err(e) = result {
        eprintln!("{command} failed: {e}");
        process::exit(1);
    }
}
