//! Scenario tests for order pricing.
//!
//! Each case prices 10 units of a $10.00 product and checks the total.

use pricer_core::{
    apply_shipping, compute_pricing_data, price_order, quote_order, DiscountRate, Money, Product,
    ShippingMethod, ShippingTier, Threshold,
};
use rstest::rstest;

fn dollars(major: i64) -> Money {
    Money::from_major_minor(major, 0)
}

fn percent(pct: f64) -> DiscountRate {
    DiscountRate::from_percentage(pct).unwrap()
}

fn product(threshold: Threshold<i64>, rate: DiscountRate) -> Product {
    Product::new(dollars(10), threshold, rate)
}

fn shipping(threshold: Threshold<Money>, discount_fee: Money, fee_per_case: Money) -> ShippingMethod {
    ShippingMethod::new(threshold, discount_fee, fee_per_case)
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[rstest]
#[case::no_discount_no_shipping(
    product(Threshold::Unbounded, percent(1000.0)),
    shipping(Threshold::Unbounded, Money::zero(), Money::zero()),
    dollars(100)
)]
#[case::volume_discount(
    product(Threshold::At(1), percent(10.0)),
    shipping(Threshold::Unbounded, Money::zero(), Money::zero()),
    dollars(91)
)]
#[case::discounted_shipping_tier(
    product(Threshold::Unbounded, percent(10.0)),
    shipping(Threshold::At(dollars(1)), dollars(1), Money::zero()),
    dollars(110)
)]
#[case::standard_shipping_tier(
    product(Threshold::Unbounded, percent(10.0)),
    shipping(Threshold::Unbounded, Money::zero(), dollars(1)),
    dollars(110)
)]
fn price_order_reference_scenarios(
    #[case] product: Product,
    #[case] shipping: ShippingMethod,
    #[case] expected: Money,
) {
    assert_eq!(price_order(&product, 10, &shipping), expected);
    assert_eq!(quote_order(&product, 10, &shipping).unwrap().total, expected);
}

// =============================================================================
// Boundary Cases
// =============================================================================

#[rstest]
#[case::below_threshold(9, Money::zero())]
#[case::at_threshold(10, Money::zero())]
#[case::one_above_threshold(11, dollars(1))]
#[case::well_above_threshold(20, dollars(10))]
fn discount_starts_strictly_above_threshold(#[case] quantity: i64, #[case] expected: Money) {
    let product = product(Threshold::At(10), percent(10.0));
    assert_eq!(compute_pricing_data(&product, quantity).discount, expected);
}

#[rstest]
#[case::below_cutoff(dollars(101), ShippingTier::Standard, dollars(120))]
#[case::at_cutoff(dollars(100), ShippingTier::Standard, dollars(120))]
#[case::above_cutoff(dollars(99), ShippingTier::Discounted, dollars(105))]
fn shipping_tier_is_strictly_greater_than(
    #[case] cutoff: Money,
    #[case] expected_tier: ShippingTier,
    #[case] expected_total: Money,
) {
    // Base price is always $100.00 here.
    let product = product(Threshold::Unbounded, DiscountRate::zero());
    let method = shipping(Threshold::At(cutoff), Money::from_cents(50), dollars(2));

    let quote = quote_order(&product, 10, &method).unwrap();
    assert_eq!(quote.shipping_tier, expected_tier);
    assert_eq!(quote.total, expected_total);
}

#[rstest]
fn unbounded_thresholds_disable_both_discounts() {
    let product = product(Threshold::Unbounded, percent(50.0));
    let method = shipping(Threshold::Unbounded, Money::zero(), Money::from_cents(25));

    let data = compute_pricing_data(&product, 1_000);
    assert_eq!(data.discount, Money::zero());
    assert_eq!(
        apply_shipping(&data, &method),
        dollars(10_000) + Money::from_cents(25_000)
    );
}

// =============================================================================
// Serialized Inputs
// =============================================================================

#[rstest]
fn prices_inputs_read_from_json() {
    let product: Product = serde_json::from_str(
        r#"{ "base_price_cents": 1000, "discount_threshold": 1, "discount_rate_bps": 1000 }"#,
    )
    .unwrap();
    let method: ShippingMethod =
        serde_json::from_str(r#"{ "discount_threshold_cents": null, "fee_per_case_cents": 0 }"#).unwrap();

    assert_eq!(price_order(&product, 10, &method), dollars(91));
}

#[rstest]
fn quote_serializes_with_snake_case_tier() {
    let product = product(Threshold::Unbounded, DiscountRate::zero());
    let method = shipping(Threshold::At(dollars(1)), dollars(1), Money::zero());

    let quote = quote_order(&product, 10, &method).unwrap();
    let json = serde_json::to_value(quote).unwrap();

    assert_eq!(json["shipping_tier"], "discounted");
    assert_eq!(json["total"], 11_000);
}
