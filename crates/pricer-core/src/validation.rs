//! # Validation Module
//!
//! Input validation for the pricing entry points.
//!
//! The pure pricing functions assume well-formed inputs. Everything that
//! reaches them from outside (catalog files, command-line arguments) goes
//! through these checks first, via [`crate::pricing::quote_order`] or the
//! catalog loader in the CLI.
//!
//! ## Usage
//! ```rust
//! use pricer_core::validation::{validate_sku, validate_quantity};
//!
//! validate_sku("WIDGET-10").unwrap();
//! validate_quantity(5).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Product, ShippingMethod, Threshold};
use crate::MAX_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (catalog key for a product).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use pricer_core::validation::validate_sku;
///
/// assert!(validate_sku("WIDGET-10").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ORDER_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in cents. Must be strictly positive.
pub fn validate_unit_price(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "base_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-case shipping fee in cents.
///
/// Zero is allowed (free shipping).
pub fn validate_fee(field: &str, cents: i64) -> ValidationResult<()> {
    non_negative(field, cents)
}

/// Validates a threshold. `Unbounded` always passes; a bounded cutoff must
/// be non-negative.
pub fn validate_threshold(field: &str, threshold: &Threshold<i64>) -> ValidationResult<()> {
    match threshold.limit() {
        Some(&limit) => non_negative(field, limit),
        None => Ok(()),
    }
}

fn non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product.
///
/// The discount rate is unsigned, so any value is accepted.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_unit_price(product.base_price_cents)?;
    validate_threshold("discount_threshold", &product.discount_threshold)?;
    Ok(())
}

/// Validates every field of a shipping method.
pub fn validate_shipping_method(method: &ShippingMethod) -> ValidationResult<()> {
    validate_threshold("discount_threshold", &method.discount_threshold_cents)?;
    validate_fee("discount_fee", method.discount_fee_cents)?;
    validate_fee("fee_per_case", method.fee_per_case_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::DiscountRate;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("WIDGET-10").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("bulk_crate").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ORDER_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_ORDER_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(1).is_ok());
        assert!(validate_unit_price(0).is_err());
        assert!(validate_unit_price(-100).is_err());
    }

    #[test]
    fn test_validate_fee_allows_zero() {
        assert!(validate_fee("fee_per_case", 0).is_ok());
        assert!(validate_fee("fee_per_case", 100).is_ok());

        let err = validate_fee("fee_per_case", -1).unwrap_err();
        assert_eq!(err.to_string(), format!("fee_per_case must be between 0 and {}", i64::MAX));
    }

    #[test]
    fn test_validate_threshold() {
        assert!(validate_threshold("t", &Threshold::Unbounded).is_ok());
        assert!(validate_threshold("t", &Threshold::At(0)).is_ok());
        assert!(validate_threshold("t", &Threshold::At(-1)).is_err());
    }

    #[test]
    fn test_validate_product() {
        let good = Product::new(Money::from_cents(1000), Threshold::At(1), DiscountRate::from_bps(1000));
        assert!(validate_product(&good).is_ok());

        let free = Product::new(Money::zero(), Threshold::Unbounded, DiscountRate::zero());
        assert!(validate_product(&free).is_err());

        let negative_threshold = Product::new(Money::from_cents(1000), Threshold::At(-5), DiscountRate::zero());
        assert!(validate_product(&negative_threshold).is_err());
    }

    #[test]
    fn test_validate_shipping_method() {
        let good = ShippingMethod::new(Threshold::Unbounded, Money::zero(), Money::from_cents(100));
        assert!(validate_shipping_method(&good).is_ok());

        let bad = ShippingMethod::new(Threshold::Unbounded, Money::from_cents(-1), Money::zero());
        assert!(matches!(
            validate_shipping_method(&bad),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "discount_fee"
        ));
    }
}
