//! # Domain Types
//!
//! The inputs of an order price calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │       Product        │        │      ShippingMethod      │          │
//! │  │  ──────────────────  │        │  ──────────────────────  │          │
//! │  │  base_price_cents    │        │  discount_threshold_cents│          │
//! │  │  discount_threshold  │        │  discount_fee_cents      │          │
//! │  │  discount_rate_bps   │        │  fee_per_case_cents      │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │     Threshold<T>     │        │      DiscountRate        │          │
//! │  │  Unbounded | At(T)   │        │  bps (u32)               │          │
//! │  │  strict ">" test     │        │  1000 = 10%              │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are plain value records supplied per call. Nothing here is
//! persisted or shared.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Volume discount rate in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%. Rates above 10000 (100%) are
/// legal and produce a discount larger than the eligible amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage, rounded to the nearest basis point.
    ///
    /// Returns `None` for NaN, infinite, negative, or too-large percentages
    /// instead of clamping them into range.
    ///
    /// ```rust
    /// use pricer_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(12.5).map(|r| r.bps()), Some(1250));
    /// assert_eq!(DiscountRate::from_percentage(-1.0), None);
    /// assert_eq!(DiscountRate::from_percentage(f64::NAN), None);
    /// ```
    pub fn from_percentage(pct: f64) -> Option<Self> {
        let bps = (pct * 100.0).round();
        if !bps.is_finite() || bps < 0.0 || bps > u32::MAX as f64 {
            return None;
        }
        Some(DiscountRate(bps as u32))
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Threshold
// =============================================================================

/// A cutoff that a value must strictly exceed to qualify for a discount.
///
/// `Unbounded` is never exceeded, which switches the discount off entirely.
/// On the wire it is an optional value: absent or `null` means `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold<T> {
    /// No cutoff; nothing qualifies.
    Unbounded,
    /// Values strictly greater than this qualify.
    At(T),
}

impl<T: PartialOrd> Threshold<T> {
    /// Strict greater-than test. A value equal to the cutoff does not
    /// exceed it.
    ///
    /// ```rust
    /// use pricer_core::types::Threshold;
    ///
    /// assert!(Threshold::At(5).exceeded_by(&6));
    /// assert!(!Threshold::At(5).exceeded_by(&5));
    /// assert!(!Threshold::<i64>::Unbounded.exceeded_by(&i64::MAX));
    /// ```
    pub fn exceeded_by(&self, value: &T) -> bool {
        match self {
            Threshold::Unbounded => false,
            Threshold::At(limit) => value > limit,
        }
    }
}

impl<T> Threshold<T> {
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Threshold::Unbounded)
    }

    /// Returns the cutoff, if any.
    pub fn limit(&self) -> Option<&T> {
        match self {
            Threshold::Unbounded => None,
            Threshold::At(limit) => Some(limit),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Threshold<U> {
        match self {
            Threshold::Unbounded => Threshold::Unbounded,
            Threshold::At(limit) => Threshold::At(f(limit)),
        }
    }
}

impl Threshold<i64> {
    /// How far `value` sits above the cutoff, never negative.
    ///
    /// `Unbounded` always yields zero.
    pub fn excess(&self, value: i64) -> i64 {
        match self {
            Threshold::Unbounded => 0,
            Threshold::At(limit) => value.saturating_sub(*limit).max(0),
        }
    }
}

impl<T> Default for Threshold<T> {
    fn default() -> Self {
        Threshold::Unbounded
    }
}

impl<T> From<Option<T>> for Threshold<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(limit) => Threshold::At(limit),
            None => Threshold::Unbounded,
        }
    }
}

impl<T: Serialize> Serialize for Threshold<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Threshold::Unbounded => serializer.serialize_none(),
            Threshold::At(limit) => serializer.serialize_some(limit),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Threshold<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Threshold::from)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as seen by the pricer.
///
/// Immutable input supplied by the caller per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Price per unit in cents.
    pub base_price_cents: i64,

    /// Quantity above which each extra unit is discounted.
    #[serde(default)]
    pub discount_threshold: Threshold<i64>,

    /// Per-unit discount for units above the threshold, in basis points
    /// of the unit price.
    #[serde(default)]
    pub discount_rate_bps: u32,
}

impl Product {
    pub fn new(base_price: Money, discount_threshold: Threshold<i64>, rate: DiscountRate) -> Self {
        Product {
            base_price_cents: base_price.cents(),
            discount_threshold,
            discount_rate_bps: rate.bps(),
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_rate_bps)
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Which per-case fee a shipping method charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingTier {
    /// Base price was above the method's threshold.
    Discounted,
    /// Everything else, including a base price exactly at the threshold.
    Standard,
}

/// A shipping method with a two-tier per-case fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Base price (in cents) above which `discount_fee_cents` applies.
    #[serde(default)]
    pub discount_threshold_cents: Threshold<i64>,

    /// Per-case fee once the base price clears the threshold.
    #[serde(default)]
    pub discount_fee_cents: i64,

    /// Per-case fee otherwise.
    #[serde(default)]
    pub fee_per_case_cents: i64,
}

impl ShippingMethod {
    pub fn new(discount_threshold: Threshold<Money>, discount_fee: Money, fee_per_case: Money) -> Self {
        ShippingMethod {
            discount_threshold_cents: discount_threshold.map(|m| m.cents()),
            discount_fee_cents: discount_fee.cents(),
            fee_per_case_cents: fee_per_case.cents(),
        }
    }

    #[inline]
    pub fn discount_threshold(&self) -> Threshold<Money> {
        self.discount_threshold_cents.map(Money::from_cents)
    }

    #[inline]
    pub fn discount_fee(&self) -> Money {
        Money::from_cents(self.discount_fee_cents)
    }

    #[inline]
    pub fn fee_per_case(&self) -> Money {
        Money::from_cents(self.fee_per_case_cents)
    }

    /// Picks the tier for an order with the given base price.
    pub fn tier_for(&self, base_price: Money) -> ShippingTier {
        if self.discount_threshold().exceeded_by(&base_price) {
            ShippingTier::Discounted
        } else {
            ShippingTier::Standard
        }
    }

    /// Per-case fee charged in `tier`.
    pub fn fee_for(&self, tier: ShippingTier) -> Money {
        match tier {
            ShippingTier::Discounted => self.discount_fee(),
            ShippingTier::Standard => self.fee_per_case(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
