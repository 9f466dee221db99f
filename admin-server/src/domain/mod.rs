//! Domain types for the flight-booking back office.
//!
//! This module contains the core model of flight cycles: legs with
//! offset-aware times, the derived trip duration, and the leg time
//! validator. Code types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod code;
mod cycle;
mod error;
mod fare;
mod leg;
mod time;
mod validate;

pub use code::{AirportCode, CountryCode, InvalidAirportCode, InvalidCountryCode};
pub use cycle::{FlightCycle, compute_total_days};
pub use error::DomainError;
pub use fare::{
    DEFAULT_BUSINESS_FACTOR, DEFAULT_ECONOMY_FACTOR, DEFAULT_PREMIUM_FACTOR, FareClass,
    PriceFactors,
};
pub use leg::{EntityId, Leg};
pub use time::{MAX_DAY_OFFSET, MINUTES_PER_DAY, TimeError, TimeOfDay};
pub use validate::{TIME_ORDER_WARNING, TimeCheck, validate_leg_times};
