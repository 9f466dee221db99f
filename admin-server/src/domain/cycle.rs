//! Flight cycle type and trip duration derivation.
//!
//! A flight cycle is one multi-leg trip flown by a single airplane: an
//! ordered sequence of legs plus a start date. The cycle's span in days is
//! never entered by the admin - it is always derived from the legs' day
//! offsets.

use chrono::NaiveDate;

use super::{EntityId, Leg};

/// Total days spanned by a sequence of legs.
///
/// Day offsets are zero-based (offset 0 is the start date), so the span is
/// the highest arrival offset reached plus one; an empty sequence spans no
/// days. Only `arrival_day_offset` governs the bound: a leg whose departure
/// offset exceeds every arrival offset does not extend the total.
///
/// Offsets are not validated here; upstream field coercion maps malformed
/// input to 0 before legs reach this function, and the span saturates at
/// `u32::MAX` rather than overflowing.
///
/// # Examples
///
/// ```
/// use admin_server::domain::{Leg, compute_total_days};
///
/// assert_eq!(compute_total_days(&[]), 0);
///
/// let mut leg = Leg::new();
/// leg.arrival_day_offset = 2;
/// assert_eq!(compute_total_days(std::slice::from_ref(&leg)), 3);
/// ```
pub fn compute_total_days(legs: &[Leg]) -> u32 {
    legs.iter()
        .map(|leg| leg.arrival_day_offset)
        .max()
        .map_or(0, |max_offset| max_offset.saturating_add(1))
}

/// A multi-leg trip for one airplane.
///
/// Leg order is the flight order; insertion order is meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightCycle {
    /// Backend id of the airplane flying the cycle.
    pub airplane: Option<EntityId>,
    /// Calendar date of day offset 0.
    pub start_date: Option<NaiveDate>,
    /// Legs in flight order.
    pub legs: Vec<Leg>,
}

impl FlightCycle {
    /// Create an empty cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total days spanned by the cycle's legs.
    ///
    /// Derived, never stored: see [`compute_total_days`].
    pub fn total_days(&self) -> u32 {
        compute_total_days(&self.legs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg_arriving_on(offset: u32) -> Leg {
        let mut leg = Leg::new();
        leg.arrival_day_offset = offset;
        leg
    }

    #[test]
    fn empty_cycle_spans_zero_days() {
        assert_eq!(compute_total_days(&[]), 0);
        assert_eq!(FlightCycle::new().total_days(), 0);
    }

    #[test]
    fn single_same_day_leg_spans_one_day() {
        assert_eq!(compute_total_days(&[leg_arriving_on(0)]), 1);
    }

    #[test]
    fn max_arrival_offset_governs() {
        let legs = [leg_arriving_on(2), leg_arriving_on(5), leg_arriving_on(1)];
        assert_eq!(compute_total_days(&legs), 6);
    }

    #[test]
    fn departure_offset_does_not_extend_total() {
        // A leg departing on day 4 but arriving on day 0 does not stretch
        // the cycle: only arrival offsets bound the span.
        let mut late_departure = leg_arriving_on(0);
        late_departure.departure_day_offset = 4;
        assert_eq!(compute_total_days(&[late_departure]), 1);
    }

    #[test]
    fn extreme_offset_saturates_instead_of_overflowing() {
        assert_eq!(compute_total_days(&[leg_arriving_on(u32::MAX)]), u32::MAX);
        assert_eq!(
            compute_total_days(&[leg_arriving_on(u32::MAX - 1)]),
            u32::MAX
        );
    }

    #[test]
    fn recomputes_after_mutation() {
        let mut cycle = FlightCycle::new();
        cycle.legs.push(leg_arriving_on(1));
        assert_eq!(cycle.total_days(), 2);

        cycle.legs.push(leg_arriving_on(3));
        assert_eq!(cycle.total_days(), 4);

        cycle.legs.remove(1);
        assert_eq!(cycle.total_days(), 2);

        cycle.legs.clear();
        assert_eq!(cycle.total_days(), 0);
    }

    #[test]
    fn total_days_is_pure() {
        let legs = [leg_arriving_on(7), leg_arriving_on(2)];
        assert_eq!(compute_total_days(&legs), compute_total_days(&legs));
    }
}
