//! CLI Adapter.

mod show;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError, Input};
use std::io::{ErrorKind, IsTerminal};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::{AppError, ProductId};

#[derive(Parser)]
#[command(name = "rocketcart")]
#[command(version)]
#[command(about = "Manage the RocketShoes shopping cart", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    #[clap(visible_alias = "a")]
    Add {
        /// Product id (prompted when omitted)
        id: Option<ProductId>,
    },
    /// Remove a product from the cart
    #[clap(visible_alias = "rm")]
    Remove {
        /// Product id (prompted when omitted)
        id: Option<ProductId>,
    },
    /// Set the amount of a product already in the cart
    #[clap(visible_alias = "u")]
    Update {
        /// Product id
        id: ProductId,
        /// New amount (must be at least 1)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Empty the cart and return to the storefront
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show cart contents
    #[clap(visible_alias = "ls")]
    Show {
        /// Print the cart as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Add { id } => run_add(id),
        Commands::Remove { id } => run_remove(id),
        Commands::Update { id, amount } => api::update_amount(id, amount).map(|_| ()),
        Commands::Clear { yes } => run_clear(yes),
        Commands::Show { json } => show::run_show(json),
    };

    match result {
        Ok(()) => {}
        // Already reported on the notification channel.
        Err(AppError::Cart(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

fn run_add(id: Option<ProductId>) -> Result<(), AppError> {
    let Some(id) = resolve_product_id(id)? else {
        return Ok(());
    };
    api::add(id)?;
    Ok(())
}

fn run_remove(id: Option<ProductId>) -> Result<(), AppError> {
    let Some(id) = resolve_product_id(id)? else {
        return Ok(());
    };
    api::remove(id)?;
    Ok(())
}

fn run_clear(yes: bool) -> Result<(), AppError> {
    if !yes && !confirm_clear()? {
        println!("ℹ️ Cart left unchanged");
        return Ok(());
    }
    api::clear()?;
    Ok(())
}

fn resolve_product_id(id: Option<ProductId>) -> Result<Option<ProductId>, AppError> {
    if let Some(id) = id {
        return Ok(Some(id));
    }
    match Input::<String>::new().with_prompt("Product id").interact_text() {
        Ok(value) => value.parse::<ProductId>().map(Some),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read product id: {}", err))),
    }
}

fn confirm_clear() -> Result<bool, AppError> {
    match Confirm::new().with_prompt("Remove every item from the cart?").default(false).interact() {
        Ok(confirmed) => Ok(confirmed),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::config_error(format!("Failed to read confirmation: {}", err))),
    }
}
