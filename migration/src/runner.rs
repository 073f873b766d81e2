use colored::*;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

use crate::Migrator;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration one step at a time, printing a status line per step.
pub async fn run_all_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    println!("Running migrations...");

    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return Ok(());
    }

    for migration in pending {
        step(&format!("Applying {}", migration.name().bold()), || {
            Migrator::up(db, Some(1))
        })
        .await?;
    }
    Ok(())
}

/// Rolls back every applied migration in reverse order, dropping all tables.
pub async fn drop_all_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    println!("Dropping all tables...");

    let mut applied = Migrator::get_applied_migrations(db).await?;
    applied.reverse();

    for migration in applied {
        step(&format!("Reverting {}", migration.name().bold()), || {
            Migrator::down(db, Some(1))
        })
        .await?;
    }
    Ok(())
}

/// Drops every table and re-applies the full migration set.
pub async fn reset(db: &DatabaseConnection) -> Result<(), DbErr> {
    drop_all_tables(db).await?;
    run_all_migrations(db).await
}

async fn step<F, Fut>(label: &str, action: F) -> Result<(), DbErr>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<(), DbErr>>,
{
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{}{} ", label, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match action().await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(e) => {
            println!("{}", "failed".red());
            Err(e)
        }
    }
}
