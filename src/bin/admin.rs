//! CLI administration tool for the short url service.
//!
//! Inspects the mapping store and exercises URL validation without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection / show server version / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//!
//! # Number of stored mappings
//! cargo run --bin admin -- stats
//!
//! # Show the URL behind a short id
//! cargo run --bin admin -- lookup 1
//!
//! # Run the validator (syntax + live DNS) against a URL
//! cargo run --bin admin -- check-url https://freecodecamp.org
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `db`, `stats`, `lookup`): PostgreSQL connection string
//! - `DNS_TIMEOUT_MS` (optional for `check-url`): lookup bound, default 3000

use shorturl::application::services::UrlValidator;
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::ValidationError;
use shorturl::infrastructure::dns::SystemResolver;
use shorturl::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing the short url service.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show mapping statistics
    Stats,

    /// Show the original URL for a short id
    Lookup {
        /// Short id as issued by `POST /api/shorturl`
        short_id: i64,
    },

    /// Validate a URL the way `POST /api/shorturl` does
    CheckUrl {
        url: String,

        /// DNS lookup timeout in milliseconds
        #[arg(long, env = "DNS_TIMEOUT_MS", default_value_t = 3000)]
        timeout_ms: u64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CheckUrl { url, timeout_ms } => check_url(&url, timeout_ms).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Lookup { short_id } => lookup(&connect().await?, short_id).await?,
    }

    Ok(())
}

/// Connects to the database named by `DATABASE_URL`.
async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Migration failed")?;

            println!("{}", "Migrations up to date".green().bold());
        }
    }

    Ok(())
}

/// Displays the number of stored mappings and the highest issued id.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let max_id: Option<i64> = sqlx::query_scalar("SELECT MAX(short_id) FROM url_mappings")
        .fetch_one(pool)
        .await?;

    println!("  Mappings:       {}", count.to_string().bright_green().bold());
    println!(
        "  Highest id:     {}",
        max_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_green()
            .bold()
    );
    println!();

    Ok(())
}

/// Prints the mapping behind a short id.
async fn lookup(pool: &PgPool, short_id: i64) -> Result<()> {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let mapping = repo
        .find_by_short_id(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => {
            println!("  Short id:  {}", mapping.short_id.to_string().cyan());
            println!("  URL:       {}", mapping.original_url.bright_white());
            println!(
                "  Created:   {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
        None => println!("{}", format!("No mapping for {short_id}").yellow()),
    }

    Ok(())
}

/// Runs the validator with the system resolver and reports the outcome.
async fn check_url(url: &str, timeout_ms: u64) -> Result<()> {
    let validator = UrlValidator::new(
        Arc::new(SystemResolver::new()),
        Duration::from_millis(timeout_ms),
    );

    match validator.validate(url).await {
        Ok(valid) => println!("{} {}", "VALID".green().bold(), valid),
        Err(ValidationError::BadFormat) => {
            println!("{} malformed url", "INVALID".red().bold());
        }
        Err(ValidationError::UnresolvableHost(host)) => {
            println!("{} host {} does not resolve", "INVALID".red().bold(), host.cyan());
        }
    }

    Ok(())
}
