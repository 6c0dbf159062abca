//! # Money Module
//!
//! Provides the `Money` type every price, discount, fee and total flows
//! through.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Volume discount at 10% on 9 units of $10.00:                          │
//! │    9 * 10.0 * 0.1 = 9.000000000000002   ❌ not $9.00                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                            │
//! │    9 * 1000 cents * 1000 bps / 10000 = 900 cents   ✅ exactly $9.00    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricer_core::money::Money;
//!
//! let unit_price = Money::from_cents(1000); // $10.00
//! let base_price = unit_price.multiply_quantity(10);
//! assert_eq!(base_price, Money::from_major_minor(100, 0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a total can dip below zero when a discount rate
///   exceeds 100%, and that must stay representable
/// - **Single field tuple struct**: serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// Product.base_price ──► PricingData.base_price ──┐
///                    └─► PricingData.discount ────┼──► total
/// ShippingMethod fee ──► shipping cost ───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, returning `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Applies a rate to this amount, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math in `i128`: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5). Results beyond the
    /// `i64` range saturate instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::money::Money;
    /// use pricer_core::types::DiscountRate;
    ///
    /// let eligible = Money::from_cents(9000);    // 9 units at $10.00
    /// let rate = DiscountRate::from_bps(1000);   // 10%
    /// assert_eq!(eligible.apply_rate(rate).cents(), 900);
    ///
    /// // $0.05 at 10% = 0.5 cents → rounds up to 1 cent
    /// assert_eq!(Money::from_cents(5).apply_rate(rate).cents(), 1);
    /// ```
    pub fn apply_rate(&self, rate: DiscountRate) -> Money {
        let wide = Self::rated_cents(self.0, rate);
        Money(wide.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Same rounding as [`Money::apply_rate`], returning `None` when the
    /// result does not fit in `i64` cents.
    ///
    /// ```rust
    /// use pricer_core::money::Money;
    /// use pricer_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_bps(20_000); // 200%
    /// assert_eq!(Money::from_cents(500).checked_apply_rate(rate), Some(Money::from_cents(1000)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_apply_rate(rate), None);
    /// ```
    pub fn checked_apply_rate(&self, rate: DiscountRate) -> Option<Money> {
        i64::try_from(Self::rated_cents(self.0, rate)).ok().map(Money)
    }

    #[inline]
    fn rated_cents(cents: i64, rate: DiscountRate) -> i128 {
        (cents as i128 * rate.bps() as i128 + 5000) / 10000
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`. Debug and CLI output only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
