//! Fare classes and per-class price factors.

use std::fmt;

/// Default economy price factor when the admin leaves the field blank.
pub const DEFAULT_ECONOMY_FACTOR: f64 = 1.2;
/// Default premium price factor.
pub const DEFAULT_PREMIUM_FACTOR: f64 = 2.0;
/// Default business price factor.
pub const DEFAULT_BUSINESS_FACTOR: f64 = 3.5;

/// A booking fare class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareClass {
    Economy,
    Premium,
    Business,
}

impl FareClass {
    /// All fare classes in display order.
    pub const ALL: [FareClass; 3] = [FareClass::Economy, FareClass::Premium, FareClass::Business];
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FareClass::Economy => "economy",
            FareClass::Premium => "premium",
            FareClass::Business => "business",
        };
        f.write_str(name)
    }
}

/// Per-fare-class multipliers applied to a leg's base price.
///
/// # Examples
///
/// ```
/// use admin_server::domain::{FareClass, PriceFactors};
///
/// let factors = PriceFactors::default();
/// assert_eq!(factors.factor_for(FareClass::Economy), 1.2);
/// assert_eq!(factors.quote(100.0, FareClass::Business), 350.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFactors {
    pub economy: f64,
    pub premium: f64,
    pub business: f64,
}

impl Default for PriceFactors {
    fn default() -> Self {
        Self {
            economy: DEFAULT_ECONOMY_FACTOR,
            premium: DEFAULT_PREMIUM_FACTOR,
            business: DEFAULT_BUSINESS_FACTOR,
        }
    }
}

impl PriceFactors {
    /// Returns the multiplier for a fare class.
    pub fn factor_for(&self, class: FareClass) -> f64 {
        match class {
            FareClass::Economy => self.economy,
            FareClass::Premium => self.premium,
            FareClass::Business => self.business,
        }
    }

    /// Sets the multiplier for a fare class.
    pub fn set_factor(&mut self, class: FareClass, factor: f64) {
        match class {
            FareClass::Economy => self.economy = factor,
            FareClass::Premium => self.premium = factor,
            FareClass::Business => self.business = factor,
        }
    }

    /// The fare for a class: base price times the class multiplier.
    pub fn quote(&self, base_price: f64, class: FareClass) -> f64 {
        base_price * self.factor_for(class)
    }
}
