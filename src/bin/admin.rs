//! CLI administration tool for link-registry.
//!
//! Creates and inspects links and performs database checks without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link that expires in two weeks
//! cargo run --bin admin -- link create https://example.com/a --expires-in-days 14
//!
//! # Resolve a short code the way a redirect would
//! cargo run --bin admin -- link resolve aZ3kP9q
//!
//! # Show everything stored for a short code
//! cargo run --bin admin -- link show aZ3kP9q
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `APP_BASE_URL` (optional): printed in front of newly created codes

use link_registry::application::services::LinkService;
use link_registry::domain::entities::Link;
use link_registry::domain::errors::LinkError;
use link_registry::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-registry.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Destination URL
        url: String,

        /// Days until the link expires (permanent if omitted)
        #[arg(short, long)]
        expires_in_days: Option<f64>,
    },

    /// Resolve a short code to its destination
    Resolve {
        /// Short code
        code: String,
    },

    /// Show stored details of a short code
    Show {
        /// Short code
        code: String,
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
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::with_defaults(repository);

    match action {
        LinkAction::Create {
            url,
            expires_in_days,
        } => create_link(&service, &url, expires_in_days).await?,
        LinkAction::Resolve { code } => resolve_link(&service, &code).await?,
        LinkAction::Show { code } => show_link(&service, &code).await?,
    }

    Ok(())
}

async fn create_link(
    service: &LinkService,
    url: &str,
    expires_in_days: Option<f64>,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let link = match service.create_link(url, expires_in_days).await {
        Ok(link) => link,
        Err(LinkError::InvalidInput(message)) => {
            println!("{} {}", "❌".red(), message.red());
            return Err(anyhow::anyhow!(message));
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to create link: {}", e)),
    };

    println!("{}", "✅ Link created successfully!".green().bold());
    println!();
    print_link(&link);

    if let Ok(base_url) = std::env::var("APP_BASE_URL") {
        println!(
            "  Short URL:  {}",
            service
                .short_url(&base_url, &link.short_code)
                .bright_yellow()
                .bold()
        );
    }
    println!();

    Ok(())
}

async fn resolve_link(service: &LinkService, code: &str) -> Result<()> {
    match service.resolve_link(code).await {
        Ok(long_url) => {
            println!("{} {}", "➡️ ".green(), long_url.bright_white());
        }
        Err(LinkError::NotFound(_)) => {
            println!("{}", "❌ Not found".red());
        }
        Err(LinkError::Expired(_)) => {
            println!("{}", "⌛ Link expired".yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

/// Prints the stored record, including links that have already expired.
async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    println!("{}", "ℹ️  Link Details".bright_blue().bold());
    println!();

    match service.find_link(code).await {
        Ok(link) => {
            print_link(&link);
            let status = if link.is_expired_at(Utc::now()) {
                "expired".yellow()
            } else {
                "active".green()
            };
            println!("  Status:     {}", status);
            println!();
        }
        Err(LinkError::NotFound(_)) => {
            println!("{}", "❌ Not found".red());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Code:       {}", link.short_code.cyan());
    println!("  Long URL:   {}", link.long_url.bright_white());
    let expires = match link.expires_at {
        Some(at) => at.to_rfc3339(),
        None => "never".to_string(),
    };
    println!("  Expires:    {}", expires.bright_black());
    if link.is_permanent() {
        println!("  Permanent:  {}", "yes".green());
    }
    println!(
        "  Created:    {}",
        link.created_at.to_rfc3339().bright_black()
    );
}

/// Displays link statistics.
///
/// Shows:
/// - Total number of links
/// - Number of expired links
/// - Number of permanent links
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let expired_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE expires_at <= NOW()")
            .fetch_one(pool)
            .await?;

    let permanent_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE expires_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:     {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Expired:   {}",
        expired_count.to_string().bright_green().bold()
    );
    println!(
        "  Permanent: {}",
        permanent_count.to_string().bright_green().bold()
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

#[cfg(test)]
mod tests {
    use super::*;
    use link_registry::infrastructure::persistence::InMemoryLinkRepository;

    fn service() -> LinkService {
        LinkService::with_defaults(Arc::new(InMemoryLinkRepository::new()))
    }

    #[tokio::test]
    async fn test_create_link_rejects_invalid_input() {
        let err = create_link(&service(), "not a url", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "longUrl must be a valid URL");

        let err = create_link(&service(), "https://example.com", Some(-1.0))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "expiresInDays must be a positive number");
    }

    #[tokio::test]
    async fn test_create_link_succeeds() {
        assert!(
            create_link(&service(), "https://example.com", Some(7.0))
                .await
                .is_ok()
        );
    }
}
