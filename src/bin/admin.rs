//! CLI administration tool for shorturl.
//!
//! Inspects stored mappings and the short code sequence without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show totals
//! cargo run --bin admin -- stats
//!
//! # Resolve a short code (prompts if omitted)
//! cargo run --bin admin -- lookup 42
//!
//! # Show the newest mappings
//! cargo run --bin admin -- list --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::domain::entities::SHORT_URL_SEQUENCE;
use shorturl::domain::repositories::{CounterRepository, UrlRepository};
use shorturl::infrastructure::persistence::{PgCounterRepository, PgUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show mapping count and sequence state
    Stats,

    /// Print the original URL for a short code
    Lookup {
        /// Short code to resolve
        code: Option<String>,
    },

    /// List the newest mappings
    List {
        /// Number of mappings to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Lookup { code } => handle_lookup(&pool, code).await?,
        Commands::List { limit } => handle_list(&pool, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn url_repository(pool: &PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool.clone()))
}

/// Displays mapping count and the current sequence value.
///
/// The two differ only if a save failed after its increment.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = url_repository(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count short URLs: {}", e))?;

    let counter = PgCounterRepository::new(Arc::new(pool.clone()))
        .current(SHORT_URL_SEQUENCE)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read sequence: {}", e))?;

    let last = counter.map_or_else(|| "none".to_string(), |c| c.seq.to_string());

    println!(
        "  Short URLs:       {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Last short code:  {} ({})",
        last.bright_green().bold(),
        SHORT_URL_SEQUENCE.bright_black()
    );
    println!();

    Ok(())
}

/// Resolves a short code, prompting for it when not given on the command line.
async fn handle_lookup(pool: &PgPool, code: Option<String>) -> Result<()> {
    let code = match code {
        Some(c) => c,
        None => Input::<String>::new().with_prompt("Short code").interact_text()?,
    };

    let records = url_repository(pool)
        .find_by_short_code(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match records.first() {
        Some(record) => {
            println!("  {} → {}", code.cyan(), record.original.bright_white());
            println!(
                "  Created: {}",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        None => println!("{}", format!("  No short URL found for '{code}'").yellow()),
    }

    Ok(())
}

/// Lists the newest mappings.
///
/// # Output Format
///
/// ```text
/// 🔗 Short URLs
///
///   Code     Created              Original
///   ─────────────────────────────────────────────────────────
///   2        2024-01-16 14:20     https://www.rust-lang.org/
///   1        2024-01-15 10:30     https://www.freecodecamp.org/
/// ```
async fn handle_list(pool: &PgPool, limit: i64) -> Result<()> {
    println!("{}", "🔗 Short URLs".bright_blue().bold());
    println!();

    let records = url_repository(pool)
        .list_recent(limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No short URLs yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<20} {}",
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<8} {:<20} {}",
            record.short.to_string().cyan(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
