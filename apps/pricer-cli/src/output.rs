//! Rendering of quotes for the terminal.

use pricer_core::{OrderQuote, ShippingTier};
use serde::Serialize;

use crate::error::CliResult;

/// A quote plus the catalog names it was priced from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    pub sku: String,
    pub shipping_method: String,
    #[serde(flatten)]
    pub quote: OrderQuote,
}

/// Human-readable breakdown, one line per component.
///
/// ```text
/// WIDGET x 10 via standard
///   Base price:      $100.00
///   Volume discount: -$9.00
///   Shipping:        $10.00 (standard rate)
///   Total:           $101.00
/// ```
pub fn render_text(report: &QuoteReport) -> String {
    let quote = &report.quote;
    let tier = match quote.shipping_tier {
        ShippingTier::Discounted => "discounted rate",
        ShippingTier::Standard => "standard rate",
    };
    let sign = if quote.discount.is_zero() { "" } else { "-" };

    format!(
        "{} x {} via {}\n  Base price:      {}\n  Volume discount: {}{}\n  Shipping:        {} ({})\n  Total:           {}",
        report.sku,
        quote.quantity,
        report.shipping_method,
        quote.base_price,
        sign,
        quote.discount,
        quote.shipping_cost,
        tier,
        quote.total,
    )
}

/// Pretty-printed JSON. Amounts are integer cents.
pub fn render_json(report: &QuoteReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
