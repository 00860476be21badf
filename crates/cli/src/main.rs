//! Game Store CLI - browse the catalog and manage a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List PC products up to 300 dollars
//! gs-cli catalog list --platform pc --max-price 300
//!
//! # Add to the cart and view the total in pounds
//! gs-cli cart add ps5console
//! gs-cli currency set GBP
//! gs-cli cart show
//! ```
//!
//! # Storage
//!
//! Cart and currency persist to a JSON file standing in for browser local
//! storage: `--storage`, or `GAME_STORE_STORAGE`, defaulting to
//! `.game-store/storage.json`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use game_store_core::{Category, Platform};
use game_store_storefront::cart::CartStore;
use game_store_storefront::catalog::{Catalog, PriceRange, ProductFilter};
use game_store_storefront::storage::FileStorage;
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(author, version, about = "Game Store CLI tools")]
struct Cli {
    /// Local storage file holding the cart and currency
    #[arg(
        long,
        global = true,
        env = "GAME_STORE_STORAGE",
        default_value = ".game-store/storage.json"
    )]
    storage: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show or change the display currency
    Currency {
        #[command(subcommand)]
        action: CurrencyAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered
    List {
        /// Platform (`playstation`, `xbox`, `nintendo`, `pc`)
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Category to include; repeat for several
        #[arg(short, long = "category")]
        categories: Vec<Category>,

        /// Lowest base price, inclusive
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Highest base price, inclusive
        #[arg(long)]
        max_price: Option<Decimal>,
    },
    /// Show one product
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product's line
    Remove {
        /// Product id
        id: String,
    },
    /// Set a line's quantity (zero or less removes it)
    Set {
        /// Product id
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
}

#[derive(Subcommand)]
enum CurrencyAction {
    /// Show the active currency
    Show,
    /// Switch currency (`USD`, `GBP`, `EUR`)
    Set {
        code: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        #[allow(clippy::print_stdout)]
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    let storage = FileStorage::open(&cli.storage)?;
    tracing::debug!(path = %storage.path().display(), "Using local storage");
    let mut store = CartStore::open(storage);

    let output = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                platform,
                categories,
                min_price,
                max_price,
            } => {
                let mut filter = ProductFilter {
                    platform,
                    ..ProductFilter::default()
                };
                if !categories.is_empty() {
                    filter = filter.with_categories(categories);
                }
                let filter =
                    filter.with_price(PriceRange::default().with_overrides(min_price, max_price));
                commands::catalog::list(&catalog, &filter, store.currency())
            }
            CatalogAction::Show { id } => {
                commands::catalog::show(&catalog, &id, store.currency())?
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store),
            CartAction::Add { id } => commands::cart::add(&mut store, &catalog, &id)?,
            CartAction::Remove { id } => commands::cart::remove(&mut store, &id)?,
            CartAction::Set { id, quantity } => commands::cart::set(&mut store, &id, quantity)?,
        },
        Commands::Currency { action } => match action {
            CurrencyAction::Show => commands::currency::show(&store),
            CurrencyAction::Set { code } => commands::currency::set(&mut store, &code)?,
        },
    };
    Ok(output)
}
