//! Flight leg type.
//!
//! A `Leg` is one direct segment within a multi-leg flight cycle. Legs are
//! created empty when the admin adds a row to the cycle form and filled in
//! field by field, so times and airport references are optional until the
//! cycle is submitted.

use super::{PriceFactors, TimeCheck, TimeOfDay, validate_leg_times};

/// Opaque identifier of an entity on the booking backend (a UUID string).
pub type EntityId = String;

/// One segment of a flight cycle.
///
/// # Examples
///
/// ```
/// use admin_server::domain::{Leg, TimeOfDay};
///
/// let mut leg = Leg::new();
/// assert!(leg.departure_time.is_none());
/// assert_eq!(leg.arrival_day_offset, 0);
///
/// leg.departure_time = TimeOfDay::parse_hhmm("08:00").ok();
/// leg.arrival_time = TimeOfDay::parse_hhmm("11:30").ok();
/// assert_eq!(leg.departure_instant(), Some(480));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Backend id of the departure airport, once the admin has picked one.
    pub source_airport: Option<EntityId>,
    /// Backend id of the destination airport.
    pub destination_airport: Option<EntityId>,
    /// Departure time of day, unset until entered.
    pub departure_time: Option<TimeOfDay>,
    /// Arrival time of day, unset until entered.
    pub arrival_time: Option<TimeOfDay>,
    /// Days after the cycle's start date on which the leg departs.
    pub departure_day_offset: u32,
    /// Days after the cycle's start date on which the leg arrives.
    pub arrival_day_offset: u32,
    /// Base fare.
    pub price: f64,
    /// Per-fare-class multipliers on the base fare.
    pub price_factors: PriceFactors,
}

impl Leg {
    /// Create an empty leg: times unset, offsets and price zeroed, and
    /// price factors at the form defaults.
    pub fn new() -> Self {
        Self {
            source_airport: None,
            destination_airport: None,
            departure_time: None,
            arrival_time: None,
            departure_day_offset: 0,
            arrival_day_offset: 0,
            price: 0.0,
            price_factors: PriceFactors::default(),
        }
    }

    /// Departure instant in minutes since midnight of the cycle's start
    /// date, or `None` if the departure time is unset.
    pub fn departure_instant(&self) -> Option<u32> {
        self.departure_time
            .map(|t| t.instant_minutes(self.departure_day_offset))
    }

    /// Arrival instant in minutes since midnight of the cycle's start date,
    /// or `None` if the arrival time is unset.
    pub fn arrival_instant(&self) -> Option<u32> {
        self.arrival_time
            .map(|t| t.instant_minutes(self.arrival_day_offset))
    }

    /// Check this leg's time ordering.
    ///
    /// Returns `None` when either time is still unset (see
    /// [`validate_leg_times`]).
    pub fn check_times(&self) -> Option<TimeCheck> {
        validate_leg_times(
            self.departure_time,
            self.arrival_time,
            self.departure_day_offset,
            self.arrival_day_offset,
        )
    }
}

impl Default for Leg {
    fn default() -> Self {
        Self::new()
    }
}
