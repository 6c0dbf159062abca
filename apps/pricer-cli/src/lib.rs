//! # pricer-cli
//!
//! Library half of the `price-order` binary. `main.rs` only parses
//! arguments, sets up logging and prints; everything it calls lives here so
//! it can be tested without a process.
//!
//! ## Request Flow
//! ```text
//! price-order WIDGET 10 --shipping bulk
//!      │
//!      ▼
//! Catalog::load()          config.rs (file + env)
//!      │
//!      ▼
//! quote_from_catalog()     product / shipping lookup
//!      │
//!      ▼
//! pricer_core::quote_order()
//!      │
//!      ▼
//! QuoteReport ──► render_text() / render_json()
//! ```

pub mod config;
pub mod error;
pub mod output;

use tracing::debug;

use pricer_core::quote_order;

pub use config::Catalog;
pub use error::{CliError, CliResult};
pub use output::QuoteReport;

/// Quotes `quantity` units of `sku` using catalog entries.
///
/// `shipping` falls back to the catalog's `default_shipping`.
pub fn quote_from_catalog(
    catalog: &Catalog,
    sku: &str,
    quantity: i64,
    shipping: Option<&str>,
) -> CliResult<QuoteReport> {
    let product = catalog.product(sku)?;
    let (shipping_name, method) = catalog.shipping_method(shipping)?;

    debug!(sku, quantity, shipping = shipping_name, "Pricing order");
    let quote = quote_order(product, quantity, method)?;

    Ok(QuoteReport {
        sku: sku.trim().to_string(),
        shipping_method: shipping_name.to_string(),
        quote,
    })
}
