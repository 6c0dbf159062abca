//! # pricer-core: Pure Order Pricing
//!
//! Prices one order line (a product, a quantity and a shipping method)
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Pricer Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pricer-cli (price-order binary)                │   │
//! │  │        catalog.toml ──► lookup ──► quote ──► text / JSON        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  phase 1  │  │   rules   │  │   │
//! │  │   │ Shipping  │  │ apply_rate│  │  phase 2  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs (Product, ShippingMethod, Threshold, DiscountRate)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - The two pricing phases, `price_order` and `quote_order`
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricer_core::{price_order, DiscountRate, Money, Product, ShippingMethod, Threshold};
//!
//! let product = Product::new(Money::from_cents(1000), Threshold::Unbounded, DiscountRate::from_bps(1000));
//! let shipping = ShippingMethod::new(Threshold::At(Money::from_cents(100)), Money::from_cents(100), Money::zero());
//!
//! // $100.00 base clears the $1.00 threshold, so 10 cases ship at $1.00 each
//! assert_eq!(price_order(&product, 10, &shipping), Money::from_cents(11_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{apply_shipping, compute_pricing_data, price_order, quote_order, OrderQuote, PricingData};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted by the validated entry points.
///
/// Keeps `quantity × unit price` comfortably inside `i64` cents for any
/// realistic unit price.
pub const MAX_ORDER_QUANTITY: i64 = 1_000_000;
