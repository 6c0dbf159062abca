//! # price-order
//!
//! Quotes one order line from a TOML catalog.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Load catalog (file + environment)
//! 4. Quote and print

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pricer_cli::output::{render_json, render_text};
use pricer_cli::{quote_from_catalog, Catalog};

/// Price an order: base price, volume discount and tiered shipping.
#[derive(Debug, Parser)]
#[command(name = "price-order", version, about)]
struct Args {
    /// Product SKU from the catalog.
    sku: String,

    /// Number of units ordered.
    #[arg(allow_negative_numbers = true)]
    quantity: i64,

    /// Shipping method name (defaults to the catalog's default_shipping).
    #[arg(short, long)]
    shipping: Option<String>,

    /// Catalog file (defaults to $PRICER_CATALOG, then the user config dir).
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print the quote as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let catalog = Catalog::load(args.catalog)?;
    info!(
        products = catalog.products.len(),
        shipping_methods = catalog.shipping.len(),
        "Catalog loaded"
    );

    let report = quote_from_catalog(&catalog, &args.sku, args.quantity, args.shipping.as_deref())?;
    info!(
        sku = %report.sku,
        quantity = report.quote.quantity,
        shipping = %report.shipping_method,
        total = %report.quote.total,
        "Order priced"
    );

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_text(&report));
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pricer_cli=trace` - Trace for this crate only
/// - Default: warnings, plus info for pricer_cli
///
/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pricer_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
