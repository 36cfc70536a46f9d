//! CLI administration tool for restaurant-api.
//!
//! Provides commands for inspecting the data, seeding the menu, and
//! performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Add a menu item (prompts for missing values)
//! cargo run --bin admin -- menu add --name Lemonade --price 3.5 --category drinks
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use restaurant_api::api::dto::menu_item::CreateMenuItemRequest;
use restaurant_api::application::services::MenuItemService;
use restaurant_api::config::{Config, mask_connection_string};
use restaurant_api::infrastructure::persistence::PgMenuItemRepository;
use restaurant_api::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing restaurant-api.
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
    /// Show statistics
    Stats,

    /// Manage the menu
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Menu management subcommands.
#[derive(Subcommand)]
enum MenuAction {
    /// Add a new menu item
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<f64>,

        /// Category (e.g., "drinks", "mains")
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Create the item as unavailable
        #[arg(long)]
        unavailable: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Menu { action } => handle_menu_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays record counts.
///
/// Shows:
/// - Number of customers
/// - Number of menu items (available / total)
/// - Number of orders per status
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    let (menu_total, menu_available): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE available) FROM menu_items",
    )
    .fetch_one(pool)
    .await?;

    let orders_by_status: Vec<(String, i64)> = sqlx::query_as(
        "SELECT status, COUNT(*) FROM orders GROUP BY status ORDER BY status",
    )
    .fetch_all(pool)
    .await?;

    println!(
        "  Customers:   {}",
        customers_count.to_string().bright_green().bold()
    );
    println!(
        "  Menu items:  {} available / {} total",
        menu_available.to_string().bright_green().bold(),
        menu_total.to_string().bright_white()
    );

    let orders_total: i64 = orders_by_status.iter().map(|(_, count)| count).sum();
    println!(
        "  Orders:      {}",
        orders_total.to_string().bright_green().bold()
    );
    for (status, count) in &orders_by_status {
        println!("    {:<12} {}", status.cyan(), count);
    }
    println!();

    Ok(())
}

/// Dispatches menu management commands.
async fn handle_menu_action(action: MenuAction, pool: &PgPool) -> Result<()> {
    match action {
        MenuAction::Add {
            name,
            price,
            category,
            description,
            unavailable,
            yes,
        } => {
            let request = CreateMenuItemRequest {
                name,
                price,
                category,
                description,
                available: Some(!unavailable),
            };
            add_menu_item(pool, request, yes).await?;
        }
    }

    Ok(())
}

/// Creates a menu item, prompting for any value not given on the command line.
///
/// The input goes through the same validation as `POST /api/menu`.
async fn add_menu_item(pool: &PgPool, mut request: CreateMenuItemRequest, yes: bool) -> Result<()> {
    println!("{}", "🍽  Add Menu Item".bright_blue().bold());
    println!();

    if request.name.is_none() {
        request.name = Some(Input::new().with_prompt("Name").interact_text()?);
    }
    if request.price.is_none() {
        request.price = Some(Input::<f64>::new().with_prompt("Price").interact_text()?);
    }
    if request.category.is_none() {
        request.category = Some(
            Input::new()
                .with_prompt("Category")
                .with_initial_text("mains")
                .interact_text()?,
        );
    }

    let new_item = request.into_new_menu_item()?;

    println!();
    println!("{}", "Item details:".bright_white().bold());
    println!("  Name:      {}", new_item.name.cyan());
    println!("  Price:     {}", format!("{:.2}", new_item.price).bright_yellow());
    println!("  Category:  {}", new_item.category.cyan());
    if let Some(ref description) = new_item.description {
        println!("  Desc:      {}", description);
    }
    println!(
        "  Available: {}",
        if new_item.available {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Add this item?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = MenuItemService::new(Arc::new(PgMenuItemRepository::new(Arc::new(
        pool.clone(),
    ))));

    let item = service
        .create_menu_item(new_item)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add menu item: {}", e))?;

    println!(
        "{} {}",
        "✅ Menu item created with id".green().bold(),
        item.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
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

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_black()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
