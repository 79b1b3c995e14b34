//! Shoplite CLI - command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! shoplite products list
//! shoplite products show 1
//!
//! # Create an account and sign in
//! shoplite auth sign-up --phone 13800138000 --password s3cret
//! shoplite auth whoami
//!
//! # Fill the cart and check out
//! shoplite cart add 1 --quantity 2
//! shoplite cart show
//! shoplite orders checkout --address "1 Main St" --payment online
//!
//! # Review order history
//! shoplite orders list
//! shoplite orders set-status 1700000000000 shipped
//! ```
//!
//! All state lives in a profile directory (`SHOPLITE_DATA_DIR`, default
//! `.shoplite`), one JSON file per storage key. Two concurrent invocations
//! sharing a profile race like two browser tabs would: last writer wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shoplite")]
#[command(author, version, about = "Shoplite command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the account and session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out and review order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Manage favorite products
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account and sign in
    SignUp {
        /// Account phone number
        #[arg(short, long)]
        phone: String,

        /// Account password
        #[arg(short = 'P', long)]
        password: String,
    },
    /// Sign in to an existing account
    SignIn {
        /// Account phone number
        #[arg(short, long)]
        phone: String,

        /// Account password
        #[arg(short = 'P', long)]
        password: String,
    },
    /// Clear the current session
    SignOut,
    /// Show the current session
    Whoami,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the whole catalog
    List,
    /// Show one product in detail
    Show {
        /// Product ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart line
    Set {
        /// Product ID
        id: i32,

        /// New quantity (at least 1)
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Product ID
        id: i32,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List the signed-in user's orders
    List,
    /// Show one order in detail
    Show {
        /// Order ID
        id: i64,
    },
    /// Create an order from the cart, then clear the cart
    Checkout {
        /// Shipping address
        #[arg(short, long, default_value = "default address")]
        address: String,

        /// Payment method
        #[arg(short, long, default_value = "online")]
        payment: String,
    },
    /// Update an order's status
    SetStatus {
        /// Order ID
        id: i64,

        /// New status (`pending`, `processing`, `shipped`, `completed`, `cancelled`)
        status: String,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorite products
    List,
    /// Toggle a product's favorite state
    Toggle {
        /// Product ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show recent search terms
    Show,
    /// Record a search term
    Add {
        /// The search term
        term: String,
    },
    /// Remove one search term
    Remove {
        /// The search term
        term: String,
    },
    /// Clear the whole history
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let state = commands::init_state()?;

    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::SignUp { phone, password } => {
                commands::auth::sign_up(&state, &phone, &password).await?;
            }
            AuthAction::SignIn { phone, password } => {
                commands::auth::sign_in(&state, &phone, &password).await?;
            }
            AuthAction::SignOut => commands::auth::sign_out(&state).await?,
            AuthAction::Whoami => commands::auth::whoami(&state).await?,
        },
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&state),
            ProductsAction::Show { id } => commands::products::show(&state, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state).await?,
            CartAction::Add { id, quantity } => commands::cart::add(&state, id, quantity).await?,
            CartAction::Set { id, quantity } => commands::cart::set(&state, id, quantity).await?,
            CartAction::Remove { id } => commands::cart::remove(&state, id).await?,
            CartAction::Clear => commands::cart::clear(&state).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&state).await?,
            OrdersAction::Show { id } => commands::orders::show(&state, id).await?,
            OrdersAction::Checkout { address, payment } => {
                commands::orders::checkout(&state, address, payment).await?;
            }
            OrdersAction::SetStatus { id, status } => {
                commands::orders::set_status(&state, id, &status).await?;
            }
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::List => commands::favorites::list(&state).await?,
            FavoritesAction::Toggle { id } => commands::favorites::toggle(&state, id).await?,
        },
        Commands::History { action } => match action {
            HistoryAction::Show => commands::history::show(&state).await?,
            HistoryAction::Add { term } => commands::history::add(&state, &term).await?,
            HistoryAction::Remove { term } => commands::history::remove(&state, &term).await?,
            HistoryAction::Clear => commands::history::clear(&state).await?,
        },
    }
    Ok(())
}
