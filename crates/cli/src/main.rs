//! Parts Cart CLI - storefront cart operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the product catalog by section
//! pc-cart products
//!
//! # Cart mutations
//! pc-cart cart add 3
//! pc-cart cart inc 3
//! pc-cart cart set 3 --quantity 5
//! pc-cart cart remove 3
//! pc-cart cart show
//!
//! # Favorites and saved carts
//! pc-cart favorite toggle 7
//! pc-cart snapshot save
//! pc-cart snapshot apply
//!
//! # Price and place the order
//! pc-cart totals
//! pc-cart checkout --name "Ada Lovelace"
//! ```
//!
//! State persists to a JSON file between invocations (see
//! `PC_CART_DATA_FILE` in [`config`]); the product catalog is read from a
//! `products.json` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use parts_cart_core::ProductId;
use parts_cart_store::{CartStore, FileStore, JsonCatalog};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "pc-cart")]
#[command(author, version, about = "PC-parts storefront cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog by section
    Products,
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage favorited products
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Save or restore the favorite-cart snapshot
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },
    /// Price the cart (subtotal, shipping, grand total)
    Totals,
    /// Place the order: price the cart, clear it, estimate delivery
    Checkout {
        /// Customer name for the confirmation message
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product entirely
    Remove { product_id: ProductId },
    /// Set a product's quantity (0 removes it)
    Set {
        product_id: ProductId,
        #[arg(short, long)]
        quantity: u32,
    },
    /// Increase a product's quantity by one
    Inc { product_id: ProductId },
    /// Decrease a product's quantity by one (removes at zero)
    Dec { product_id: ProductId },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Flip a product's favorite status
    Toggle { product_id: ProductId },
    /// List favorited products
    List,
}

#[derive(Subcommand)]
enum SnapshotAction {
    /// Save the current cart as the favorite cart
    Save,
    /// Replace the cart with the saved favorite cart
    Apply,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let mut store = CartStore::new(FileStore::open(&config.data_file)?);

    match cli.command {
        Commands::Products => {
            commands::products::list(&mut store, &load_catalog(&config)?);
        }
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&mut store, &load_catalog(&config)?),
            CartAction::Add { product_id } => commands::cart::add(&mut store, product_id),
            CartAction::Remove { product_id } => commands::cart::remove(&mut store, product_id),
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set(&mut store, product_id, quantity),
            CartAction::Inc { product_id } => commands::cart::step(&mut store, product_id, 1),
            CartAction::Dec { product_id } => commands::cart::step(&mut store, product_id, -1),
            CartAction::Clear => commands::cart::clear(&mut store),
        },
        Commands::Favorite { action } => match action {
            FavoriteAction::Toggle { product_id } => {
                commands::favorites::toggle(&mut store, product_id);
            }
            FavoriteAction::List => {
                commands::favorites::list(&mut store, &load_catalog(&config)?);
            }
        },
        Commands::Snapshot { action } => match action {
            SnapshotAction::Save => commands::snapshot::save(&mut store)?,
            SnapshotAction::Apply => commands::snapshot::apply(&mut store)?,
        },
        Commands::Totals => commands::checkout::totals(&mut store, &load_catalog(&config)?),
        Commands::Checkout { name } => {
            commands::checkout::place_order(&mut store, &load_catalog(&config)?, &name)?;
        }
    }
    Ok(())
}

fn load_catalog(config: &Config) -> Result<JsonCatalog, Box<dyn std::error::Error>> {
    Ok(JsonCatalog::from_path(&config.catalog_file)?)
}
