//! Herbal Store CLI - terminal front-end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse teas under $20, cheapest first
//! herbal products --category tea --max-price 20 --sort price-low
//!
//! # Product details
//! herbal show 2
//!
//! # Cart management
//! herbal cart add 2 -q 2
//! herbal cart adjust 2 -1
//! herbal cart show
//!
//! # Product-finder quiz
//! herbal quiz --goal sleep --format tea --experience beginner
//!
//! # Place an order for the cart
//! herbal checkout --name "Ada" --email ada@example.com --address "1 Main St" \
//!     --city London --postal-code N1
//! ```
//!
//! # Commands
//!
//! - `products` - Search, filter and sort the catalog
//! - `show` - Show one product
//! - `cart` - Show or change the cart
//! - `quiz` - Answer the quiz and get a recommendation
//! - `checkout` - Place a (simulated) order
//!
//! Configuration is read from the environment, see
//! `herbal_store_storefront::config`. Logs go to stderr; `RUST_LOG` adjusts
//! verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use herbal_store_core::{Category, ProductId};
use herbal_store_storefront::config::StorefrontConfig;
use herbal_store_storefront::error::AppError;
use herbal_store_storefront::filter::{FilterState, SortKey};
use herbal_store_storefront::state::Storefront;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "herbal")]
#[command(author, version, about = "Herbal store terminal front-end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the filters
    Products {
        /// Case-insensitive text matched against name, description and ingredients
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this category (`tea`, `supplement`, `oil`, `powder`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Highest price to include
        #[arg(long, default_value = "50")]
        max_price: Decimal,

        /// Sort order (`price-low`, `price-high`, `rating`, `popularity`)
        #[arg(long, default_value = "popularity")]
        sort: SortKey,
    },
    /// Show product details
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Answer the product-finder quiz
    Quiz {
        /// Wellness goal (`energy`, `stress`, `sleep`, `immunity`)
        #[arg(long)]
        goal: String,

        /// Preferred format
        #[arg(long, default_value = "")]
        format: String,

        /// Experience with herbal products
        #[arg(long, default_value = "")]
        experience: String,
    },
    /// Place an order for everything in the cart
    Checkout {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        postal_code: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: ProductId,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product entirely
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Change a product's quantity by a signed amount
    Adjust {
        /// Product ID
        id: ProductId,

        /// Amount to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "herbal_store_storefront=info,herbal=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(exit_code(&e));
    }
}

/// 2 for input the user can correct, 1 for everything else.
const fn exit_code(error: &AppError) -> i32 {
    if error.is_user_error() { 2 } else { 1 }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::open(&config).await;

    match cli.command {
        Commands::Products {
            search,
            category,
            max_price,
            sort,
        } => {
            let filters = FilterState {
                search_query: search,
                category,
                max_price,
                sort,
            };
            commands::products::list(&storefront, &filters);
        }
        Commands::Show { id } => commands::products::show(&storefront, id)?,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Add { id, quantity } => {
                commands::cart::add(&mut storefront, id, quantity)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&mut storefront, id)?,
            CartAction::Adjust { id, delta } => {
                commands::cart::adjust(&mut storefront, id, delta)?;
            }
            CartAction::Clear => commands::cart::clear(&mut storefront),
        },
        Commands::Quiz {
            goal,
            format,
            experience,
        } => commands::quiz::run(&mut storefront, goal, format, experience)?,
        Commands::Checkout {
            name,
            email,
            address,
            city,
            postal_code,
        } => {
            let form = commands::checkout::CheckoutArgs {
                name,
                email,
                address,
                city,
                postal_code,
            };
            commands::checkout::run(&mut storefront, form).await?;
        }
    }
    Ok(())
}
