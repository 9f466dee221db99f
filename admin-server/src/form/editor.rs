//! The flight cycle form editor.
//!
//! `CycleEditor` owns the mutable cycle being drafted and is the single
//! place mutations go through. After every change to the leg list it
//! recomputes the derived total-days figure, and after every change to a
//! leg's time fields it re-checks that leg's departure/arrival ordering,
//! pushing a warning through the [`Notifier`] when the ordering is broken.
//!
//! Warnings are advisory. An out-of-order leg is reported every time one of
//! its time fields changes, but nothing here stops the cycle from being
//! submitted; that permissiveness is deliberate.

use chrono::NaiveDate;

use crate::domain::{
    DomainError, EntityId, FareClass, FlightCycle, Leg, TIME_ORDER_WARNING, TimeOfDay,
    compute_total_days,
};

use super::notify::Notifier;

/// One editable field of a leg.
#[derive(Debug, Clone, PartialEq)]
pub enum LegField {
    SourceAirport(Option<EntityId>),
    DestinationAirport(Option<EntityId>),
    DepartureTime(Option<TimeOfDay>),
    ArrivalTime(Option<TimeOfDay>),
    DepartureDayOffset(u32),
    ArrivalDayOffset(u32),
    Price(f64),
    PriceFactor(FareClass, f64),
}

impl LegField {
    /// Whether this field is one of the four inputs of the time validator.
    fn affects_times(&self) -> bool {
        matches!(
            self,
            LegField::DepartureTime(_)
                | LegField::ArrivalTime(_)
                | LegField::DepartureDayOffset(_)
                | LegField::ArrivalDayOffset(_)
        )
    }
}

/// Editor over a draft flight cycle.
///
/// # Examples
///
/// ```
/// use admin_server::domain::TimeOfDay;
/// use admin_server::form::{CycleEditor, LegField, ToastBuffer};
///
/// let mut editor = CycleEditor::new(ToastBuffer::new());
/// let leg = editor.add_leg();
///
/// editor
///     .update_leg(leg, LegField::DepartureTime(TimeOfDay::parse_hhmm("09:00").ok()))
///     .unwrap();
/// editor
///     .update_leg(leg, LegField::ArrivalTime(TimeOfDay::parse_hhmm("08:00").ok()))
///     .unwrap();
///
/// // Arrival before departure on the same day: the admin gets a toast,
/// // but the leg stays in the draft.
/// assert_eq!(editor.notifier_mut().drain().len(), 1);
/// assert_eq!(editor.total_days(), 1);
/// ```
#[derive(Debug)]
pub struct CycleEditor<N: Notifier> {
    cycle: FlightCycle,
    total_days: u32,
    notifier: N,
}

impl<N: Notifier> CycleEditor<N> {
    /// Create an editor over an empty cycle.
    pub fn new(notifier: N) -> Self {
        Self {
            cycle: FlightCycle::new(),
            total_days: 0,
            notifier,
        }
    }

    /// The current draft.
    pub fn cycle(&self) -> &FlightCycle {
        &self.cycle
    }

    /// The derived total days, current as of the last mutation.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Access the warning sink (e.g. to drain buffered toasts).
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Set or clear the airplane flying this cycle.
    pub fn set_airplane(&mut self, airplane: Option<EntityId>) {
        self.cycle.airplane = airplane;
    }

    /// Set or clear the cycle's start date (day offset 0).
    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
        self.cycle.start_date = start_date;
    }

    /// Append an empty leg and return its index.
    pub fn add_leg(&mut self) -> usize {
        self.cycle.legs.push(Leg::new());
        self.recompute_total_days();
        self.cycle.legs.len() - 1
    }

    /// Remove the leg at `index`.
    pub fn remove_leg(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.cycle.legs.len() {
            return Err(DomainError::LegIndex(index));
        }
        self.cycle.legs.remove(index);
        self.recompute_total_days();
        Ok(())
    }

    /// Apply one field edit to the leg at `index`.
    ///
    /// Recomputes `total_days`, and re-checks the leg's time ordering when
    /// the edited field is one of the validator's four inputs.
    pub fn update_leg(&mut self, index: usize, field: LegField) -> Result<(), DomainError> {
        let recheck = field.affects_times();

        let leg = self
            .cycle
            .legs
            .get_mut(index)
            .ok_or(DomainError::LegIndex(index))?;

        match field {
            LegField::SourceAirport(id) => leg.source_airport = id,
            LegField::DestinationAirport(id) => leg.destination_airport = id,
            LegField::DepartureTime(time) => leg.departure_time = time,
            LegField::ArrivalTime(time) => leg.arrival_time = time,
            LegField::DepartureDayOffset(offset) => leg.departure_day_offset = offset,
            LegField::ArrivalDayOffset(offset) => leg.arrival_day_offset = offset,
            LegField::Price(price) => leg.price = price,
            LegField::PriceFactor(class, factor) => leg.price_factors.set_factor(class, factor),
        }

        self.recompute_total_days();

        if recheck {
            self.check_leg_times(index);
        }

        Ok(())
    }

    /// Clear the draft after a successful submission.
    pub fn reset(&mut self) {
        self.cycle = FlightCycle::new();
        self.total_days = 0;
    }

    fn recompute_total_days(&mut self) {
        self.total_days = compute_total_days(&self.cycle.legs);
    }

    /// Re-run the time validator for one leg; warn on a broken ordering.
    /// A valid or not-yet-complete leg emits nothing.
    fn check_leg_times(&mut self, index: usize) {
        let Some(leg) = self.cycle.legs.get(index) else {
            return;
        };
        if leg.check_times().is_some_and(|check| check.is_invalid()) {
            self.notifier.warn(TIME_ORDER_WARNING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ToastBuffer;

    fn time(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse_hhmm(s).unwrap())
    }

    fn editor() -> CycleEditor<ToastBuffer> {
        CycleEditor::new(ToastBuffer::new())
    }

    #[test]
    fn starts_empty() {
        let ed = editor();
        assert!(ed.cycle().legs.is_empty());
        assert_eq!(ed.total_days(), 0);
    }

    #[test]
    fn add_leg_updates_total_days() {
        let mut ed = editor();
        let first = ed.add_leg();
        assert_eq!(first, 0);
        assert_eq!(ed.total_days(), 1);

        let second = ed.add_leg();
        assert_eq!(second, 1);
        assert_eq!(ed.total_days(), 1);
    }

    #[test]
    fn arrival_offset_edit_extends_total_days() {
        let mut ed = editor();
        let leg = ed.add_leg();
        ed.update_leg(leg, LegField::ArrivalDayOffset(5)).unwrap();
        assert_eq!(ed.total_days(), 6);
    }

    #[test]
    fn departure_offset_edit_does_not_extend_total_days() {
        let mut ed = editor();
        let leg = ed.add_leg();
        ed.update_leg(leg, LegField::DepartureDayOffset(9)).unwrap();
        assert_eq!(ed.total_days(), 1);
    }

    #[test]
    fn remove_leg_shrinks_total_days() {
        let mut ed = editor();
        let a = ed.add_leg();
        let b = ed.add_leg();
        ed.update_leg(a, LegField::ArrivalDayOffset(1)).unwrap();
        ed.update_leg(b, LegField::ArrivalDayOffset(4)).unwrap();
        assert_eq!(ed.total_days(), 5);

        ed.remove_leg(b).unwrap();
        assert_eq!(ed.total_days(), 2);

        ed.remove_leg(a).unwrap();
        assert_eq!(ed.total_days(), 0);
    }

    #[test]
    fn remove_leg_out_of_bounds() {
        let mut ed = editor();
        assert!(matches!(ed.remove_leg(0), Err(DomainError::LegIndex(0))));
        ed.add_leg();
        assert!(matches!(ed.remove_leg(3), Err(DomainError::LegIndex(3))));
    }

    #[test]
    fn update_leg_out_of_bounds() {
        let mut ed = editor();
        let result = ed.update_leg(2, LegField::Price(10.0));
        assert!(matches!(result, Err(DomainError::LegIndex(2))));
    }

    #[test]
    fn invalid_times_raise_a_warning() {
        let mut ed = editor();
        let leg = ed.add_leg();

        // First time entered: the other is still unset, so no outcome.
        ed.update_leg(leg, LegField::DepartureTime(time("09:00")))
            .unwrap();
        assert!(ed.notifier_mut().is_empty());

        // Both present and out of order: warn.
        ed.update_leg(leg, LegField::ArrivalTime(time("08:00")))
            .unwrap();
        assert_eq!(ed.notifier_mut().drain(), vec![TIME_ORDER_WARNING.to_string()]);
    }

    #[test]
    fn offset_edit_can_clear_or_cause_violation() {
        let mut ed = editor();
        let leg = ed.add_leg();
        ed.update_leg(leg, LegField::DepartureTime(time("14:00")))
            .unwrap();
        ed.update_leg(leg, LegField::ArrivalTime(time("13:00")))
            .unwrap();
        // 840 >= 780: one warning so far.
        assert_eq!(ed.notifier_mut().drain().len(), 1);

        // Bumping the arrival offset fixes the ordering; no cleared signal
        // is emitted, just silence.
        ed.update_leg(leg, LegField::ArrivalDayOffset(1)).unwrap();
        assert!(ed.notifier_mut().is_empty());

        // And bumping the departure offset past it breaks it again.
        ed.update_leg(leg, LegField::DepartureDayOffset(2)).unwrap();
        assert_eq!(ed.notifier_mut().drain().len(), 1);
    }

    #[test]
    fn valid_times_stay_silent() {
        let mut ed = editor();
        let leg = ed.add_leg();
        ed.update_leg(leg, LegField::DepartureTime(time("08:00")))
            .unwrap();
        ed.update_leg(leg, LegField::ArrivalTime(time("12:30")))
            .unwrap();
        assert!(ed.notifier_mut().is_empty());
    }

    #[test]
    fn non_time_fields_never_trigger_validation() {
        let mut ed = editor();
        let leg = ed.add_leg();
        // Leave the leg in an invalid state.
        ed.update_leg(leg, LegField::DepartureTime(time("10:00")))
            .unwrap();
        ed.update_leg(leg, LegField::ArrivalTime(time("10:00")))
            .unwrap();
        ed.notifier_mut().drain();

        // Editing price or airports does not re-run the check.
        ed.update_leg(leg, LegField::Price(99.5)).unwrap();
        ed.update_leg(leg, LegField::SourceAirport(Some("id-1".into())))
            .unwrap();
        ed.update_leg(leg, LegField::PriceFactor(FareClass::Premium, 2.2))
            .unwrap();
        assert!(ed.notifier_mut().is_empty());
    }

    #[test]
    fn legs_validate_independently() {
        let mut ed = editor();
        let ok_leg = ed.add_leg();
        let bad_leg = ed.add_leg();

        ed.update_leg(ok_leg, LegField::DepartureTime(time("06:00")))
            .unwrap();
        ed.update_leg(ok_leg, LegField::ArrivalTime(time("09:00")))
            .unwrap();

        ed.update_leg(bad_leg, LegField::DepartureTime(time("20:00")))
            .unwrap();
        ed.update_leg(bad_leg, LegField::ArrivalTime(time("19:00")))
            .unwrap();

        // Only the second leg warned; no cross-leg ordering is checked even
        // though leg 2 departs before leg 1 arrives.
        assert_eq!(ed.notifier_mut().drain().len(), 1);
    }

    #[test]
    fn reset_clears_draft() {
        let mut ed = editor();
        ed.set_airplane(Some("plane-1".into()));
        let leg = ed.add_leg();
        ed.update_leg(leg, LegField::ArrivalDayOffset(3)).unwrap();
        assert_eq!(ed.total_days(), 4);

        ed.reset();
        assert!(ed.cycle().legs.is_empty());
        assert!(ed.cycle().airplane.is_none());
        assert_eq!(ed.total_days(), 0);
    }
}
