//! Leg time validation.
//!
//! A leg's arrival must be strictly after its departure, where both are
//! measured in minutes elapsed since midnight of the cycle's start date
//! (time-of-day plus day offset). The check is advisory: a failing leg is
//! reported to the admin but never blocks submission of the cycle.

use super::TimeOfDay;

/// Warning shown to the admin when a leg's times are out of order.
pub const TIME_ORDER_WARNING: &str =
    "Departure time must be less than arrival time. Please adjust the times or day offsets.";

/// Outcome of checking one leg's departure/arrival ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCheck {
    /// Arrival is strictly after departure.
    Valid,
    /// Arrival is at or before departure.
    Invalid,
}

impl TimeCheck {
    /// Returns true for `Invalid`.
    pub fn is_invalid(&self) -> bool {
        matches!(self, TimeCheck::Invalid)
    }
}

/// Check that a leg's arrival instant is strictly after its departure.
///
/// Returns `None` when either time is unset: the leg is still being edited
/// and is not yet ready to validate. This is deliberately distinct from
/// `Some(TimeCheck::Valid)` - an incomplete leg produces no outcome at all.
///
/// # Examples
///
/// ```
/// use admin_server::domain::{TimeCheck, TimeOfDay, validate_leg_times};
///
/// let dep = TimeOfDay::parse_hhmm("14:00").ok();
/// let arr = TimeOfDay::parse_hhmm("13:00").ok();
///
/// // Same day, arrival before departure: invalid.
/// assert_eq!(validate_leg_times(dep, arr, 0, 0), Some(TimeCheck::Invalid));
///
/// // Arrival the next day: the overnight leg is fine.
/// assert_eq!(validate_leg_times(dep, arr, 0, 1), Some(TimeCheck::Valid));
///
/// // Departure time not entered yet: no outcome.
/// assert_eq!(validate_leg_times(None, arr, 0, 0), None);
/// ```
pub fn validate_leg_times(
    departure_time: Option<TimeOfDay>,
    arrival_time: Option<TimeOfDay>,
    departure_day_offset: u32,
    arrival_day_offset: u32,
) -> Option<TimeCheck> {
    let departure = departure_time?;
    let arrival = arrival_time?;

    let departure_instant = departure.instant_minutes(departure_day_offset);
    let arrival_instant = arrival.instant_minutes(arrival_day_offset);

    if departure_instant >= arrival_instant {
        Some(TimeCheck::Invalid)
    } else {
        Some(TimeCheck::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse_hhmm(s).unwrap())
    }

    #[test]
    fn same_day_ordered_is_valid() {
        assert_eq!(
            validate_leg_times(time("09:00"), time("11:30"), 0, 0),
            Some(TimeCheck::Valid)
        );
    }

    #[test]
    fn same_day_reversed_is_invalid() {
        // 540 >= 480
        assert_eq!(
            validate_leg_times(time("09:00"), time("08:00"), 0, 0),
            Some(TimeCheck::Invalid)
        );
    }

    #[test]
    fn equal_instants_are_invalid() {
        // Arrival must be strictly after departure.
        assert_eq!(
            validate_leg_times(time("10:00"), time("10:00"), 0, 0),
            Some(TimeCheck::Invalid)
        );
        assert_eq!(
            validate_leg_times(time("10:00"), time("10:00"), 2, 2),
            Some(TimeCheck::Invalid)
        );
    }

    #[test]
    fn overnight_leg_is_valid() {
        // Departs 14:00 day 0 (840), arrives 13:00 day 1 (2220).
        // Crosses midnight, still in order.
        assert_eq!(
            validate_leg_times(time("14:00"), time("13:00"), 0, 1),
            Some(TimeCheck::Valid)
        );
    }

    #[test]
    fn arrival_offset_behind_departure_is_invalid() {
        assert_eq!(
            validate_leg_times(time("08:00"), time("23:00"), 1, 0),
            Some(TimeCheck::Invalid)
        );
    }

    #[test]
    fn missing_time_produces_no_outcome() {
        assert_eq!(validate_leg_times(None, time("10:00"), 0, 0), None);
        assert_eq!(validate_leg_times(time("10:00"), None, 0, 0), None);
        assert_eq!(validate_leg_times(None, None, 0, 0), None);
    }

    #[test]
    fn check_is_pure() {
        let first = validate_leg_times(time("22:15"), time("06:05"), 0, 1);
        let second = validate_leg_times(time("22:15"), time("06:05"), 0, 1);
        assert_eq!(first, second);
    }
}
