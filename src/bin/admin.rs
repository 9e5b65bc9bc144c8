//! CLI administration tool for shortlink.
//!
//! Creates and inspects mappings directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Look up where a code points
//! cargo run --bin admin -- lookup aZ3kP9x
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `shortlink::config`); `DATABASE_URL` or the
//! `DB_*` components are required.

use shortlink::application::services::{Resolution, ResolutionService, ShorteningService};
use shortlink::config::{self, Config, StoreBackend};
use shortlink::infrastructure::persistence::{PgMappingStore, TimeoutMappingStore};
use shortlink::server::connect_pool;
use shortlink::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// Create a short URL
    Shorten {
        /// URL to shorten
        url: Option<String>,

        /// Override BASE_URL for the printed short URL
        #[arg(short, long)]
        base_url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the target URL of a code
    Lookup {
        /// Short code
        code: String,
    },

    /// Show statistics
    Stats,

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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        anyhow::bail!("The admin tool requires STORE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Shorten { url, base_url, yes } => {
            shorten(&config, &pool, url, base_url, yes).await?
        }
        Commands::Lookup { code } => lookup(&config, &pool, &code).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the same timeout-bounded store the server uses.
fn store(config: &Config, pool: &PgPool) -> Arc<TimeoutMappingStore<PgMappingStore>> {
    Arc::new(TimeoutMappingStore::new(
        Arc::new(PgMappingStore::new(Arc::new(pool.clone()))),
        config.store_timeout(),
    ))
}

/// Creates a short URL with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Confirm creation (unless `--yes` flag)
/// 3. Allocate a code through the shortening service
/// 4. Print the short URL
async fn shorten(
    config: &Config,
    pool: &PgPool,
    url: Option<String>,
    base_url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };
    let base_url = base_url.unwrap_or_else(|| config.base_url.clone());

    println!("  URL:  {}", long_url.cyan());
    println!("  Base: {}", base_url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this short URL?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = ShorteningService::new(
        store(config, pool),
        Arc::new(RandomCodeGenerator::new(config.code_length)),
        config.max_create_attempts,
    );

    let created = service
        .shorten(&long_url, &base_url)
        .await
        .context("Failed to create short URL")?;

    println!("{}", "✅ Short URL created".green().bold());
    println!();
    println!("  Code:      {}", created.code.bright_green().bold());
    println!("  Short URL: {}", created.short_url.bright_white());
    println!();

    Ok(())
}

/// Resolves a code and prints its target.
async fn lookup(config: &Config, pool: &PgPool, code: &str) -> Result<()> {
    let service = ResolutionService::new(store(config, pool));

    match service
        .resolve(code)
        .await
        .context("Failed to resolve code")?
    {
        Resolution::Redirect(target_url) => {
            println!("  {} → {}", code.cyan(), target_url.bright_white());
        }
        Resolution::NotFound => {
            println!("{}", format!("⚠️  No mapping for '{}'", code).yellow());
        }
    }

    Ok(())
}

/// Displays mapping statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await?;

    let newest: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(created_at) FROM mappings")
            .fetch_one(pool)
            .await?;

    println!(
        "  Mappings:     {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!(
        "  Last created: {}",
        newest
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
            .bright_white()
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
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
