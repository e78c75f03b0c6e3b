//! CLI administration tool for trip-planner.
//!
//! Provides commands for inspecting the store, managing users, and
//! performing database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user
//! cargo run --bin admin -- user create --name Ana --email ana@example.com
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Uses the same database variables as the server (`DATABASE_URL` or the
//! `DB_*` components).

use trip_planner::api::dto::user::CreateUserRequest;
use trip_planner::application::services::UserService;
use trip_planner::config::Config;
use trip_planner::domain::entities::NewUser;
use trip_planner::infrastructure::persistence::PgUserRepository;
use trip_planner::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing trip-planner.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
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

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::Create { name, email, yes } => {
            create_user(&service, name, email, yes).await?;
        }
        UserAction::List => {
            list_users(&service).await?;
        }
    }

    Ok(())
}

/// Creates a user with interactive prompts for missing values.
///
/// Input goes through the same validation as `POST /users`, so an empty
/// name or a duplicate email is rejected with the API's message.
async fn create_user(
    service: &UserService<PgUserRepository>,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let new_user = NewUser::try_from(CreateUserRequest {
        name: Some(name),
        email: Some(email),
    })
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Name:  {}", new_user.name.cyan());
    println!("  Email: {}", new_user.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_user(new_user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID   Name                      Email                          Created
///   ──────────────────────────────────────────────────────────────────────────────
///   1    Ana                       ana@example.com                2025-01-15 10:30
/// ```
async fn list_users(service: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<25} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<25} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays row counts for each resource.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let trips_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips")
        .fetch_one(pool)
        .await?;

    let itineraries_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM itineraries")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:       {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Trips:       {}",
        trips_count.to_string().bright_green().bold()
    );
    println!(
        "  Itineraries: {}",
        itineraries_count.to_string().bright_green().bold()
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

            let applied: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🚚 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations up to date".green().bold());
        }
    }

    Ok(())
}
