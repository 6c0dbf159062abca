//! # Pricing Module
//!
//! Prices a single order line in two phases joined by [`PricingData`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         price_order()                                   │
//! │                                                                         │
//! │  Product ──┐                                                            │
//! │            ├──► compute_pricing_data() ──► PricingData ──┐              │
//! │  quantity ─┘      (phase 1)                 base_price   │              │
//! │                                             quantity     │              │
//! │                                             discount     │              │
//! │                                                          ▼              │
//! │  ShippingMethod ─────────────────────────► apply_shipping() ──► total   │
//! │                                              (phase 2)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Phase 2 only ever sees the three fields of `PricingData`; it has no
//! access to the product.
//!
//! ## Example
//! ```rust
//! use pricer_core::money::Money;
//! use pricer_core::pricing::price_order;
//! use pricer_core::types::{DiscountRate, Product, ShippingMethod, Threshold};
//!
//! let product = Product::new(Money::from_cents(1000), Threshold::At(1), DiscountRate::from_bps(1000));
//! let shipping = ShippingMethod::new(Threshold::Unbounded, Money::zero(), Money::zero());
//!
//! // 10 × $10.00 - (10 - 1) × $10.00 × 10%
//! assert_eq!(price_order(&product, 10, &shipping), Money::from_cents(9100));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ShippingMethod, ShippingTier};
use crate::validation::{validate_product, validate_quantity, validate_shipping_method};

// =============================================================================
// Phase 1: Pricing Data
// =============================================================================

/// Hand-off record between the two pricing phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingData {
    /// Unit price × quantity.
    pub base_price: Money,
    pub quantity: i64,
    /// Volume discount earned by the units above the product threshold.
    pub discount: Money,
}

/// Phase 1: base price and volume discount.
///
/// Every unit beyond the product's discount threshold earns
/// `unit price × discount rate`; units at or below it earn nothing.
pub fn compute_pricing_data(product: &Product, quantity: i64) -> PricingData {
    let unit_price = product.base_price();
    let base_price = unit_price.multiply_quantity(quantity);

    let discounted_units = product.discount_threshold.excess(quantity);
    let discount = unit_price
        .multiply_quantity(discounted_units)
        .apply_rate(product.discount_rate());

    PricingData {
        base_price,
        quantity,
        discount,
    }
}

// =============================================================================
// Phase 2: Shipping
// =============================================================================

/// Phase 2: shipping cost and the final total.
///
/// The discounted per-case fee applies only when the base price is
/// strictly above the method's threshold.
pub fn apply_shipping(pricing: &PricingData, shipping: &ShippingMethod) -> Money {
    let tier = shipping.tier_for(pricing.base_price);
    let shipping_cost = shipping.fee_for(tier).multiply_quantity(pricing.quantity);

    pricing.base_price - pricing.discount + shipping_cost
}

// =============================================================================
// Orchestration
// =============================================================================

/// Prices an order: phase 1 followed by phase 2.
pub fn price_order(product: &Product, quantity: i64, shipping: &ShippingMethod) -> Money {
    apply_shipping(&compute_pricing_data(product, quantity), shipping)
}

// =============================================================================
// Quote (validated entry point)
// =============================================================================

/// Full breakdown of a priced order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub quantity: i64,
    pub base_price: Money,
    pub discount: Money,
    pub shipping_tier: ShippingTier,
    pub shipping_cost: Money,
    pub total: Money,
}

/// Validates the inputs, then prices the order and returns the breakdown.
///
/// Same pipeline as [`price_order`] but rejects malformed inputs and uses
/// checked arithmetic, so `quote.total` always equals what `price_order`
/// would return for the same inputs.
///
/// ## Flow
/// ```text
/// validate quantity / product / shipping
///      │
///      ├── invalid? → CoreError::Validation
///      │
///      ▼
/// phase 1 (base price and discount checked for overflow)
///      │
///      ▼
/// phase 2 (shipping cost and total checked for overflow)
///      │
///      ▼
/// OrderQuote
/// ```
pub fn quote_order(
    product: &Product,
    quantity: i64,
    shipping: &ShippingMethod,
) -> CoreResult<OrderQuote> {
    validate_quantity(quantity)?;
    validate_product(product)?;
    validate_shipping_method(shipping)?;

    // Phase 1 multiplies unchecked and saturates the discount; make sure
    // neither can happen before trusting its output.
    product
        .base_price()
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| overflow("base price"))?;
    product
        .base_price()
        .multiply_quantity(product.discount_threshold.excess(quantity))
        .checked_apply_rate(product.discount_rate())
        .ok_or_else(|| overflow("discount"))?;
    let pricing = compute_pricing_data(product, quantity);

    let shipping_tier = shipping.tier_for(pricing.base_price);
    let shipping_cost = shipping
        .fee_for(shipping_tier)
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| overflow("shipping cost"))?;

    let total = pricing
        .base_price
        .checked_sub(pricing.discount)
        .and_then(|net| net.checked_add(shipping_cost))
        .ok_or_else(|| overflow("total"))?;

    Ok(OrderQuote {
        quantity,
        base_price: pricing.base_price,
        discount: pricing.discount,
        shipping_tier,
        shipping_cost,
        total,
    })
}

fn overflow(stage: &str) -> CoreError {
    CoreError::AmountOverflow {
        stage: stage.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
