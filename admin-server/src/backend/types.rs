//! Wire types for the booking backend API.
//!
//! Every response is wrapped in an envelope with an `ok` flag and a
//! human-readable message. The cycle endpoint is quirkier than the rest:
//! it expects day offsets, the derived total-days figure, and prices as
//! strings, and the per-class price factors as a nested object.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, FlightCycle, Leg, PriceFactors, compute_total_days};

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Credentials for an admin login.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The admin account returned on a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Login response payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: AdminUser,
}

/// Request body for creating a country.
#[derive(Debug, Clone, Serialize)]
pub struct NewCountry {
    pub name: String,
    pub code: String,
}

/// Request body for creating a city.
#[derive(Debug, Clone, Serialize)]
pub struct NewCity {
    pub name: String,
    pub country_id: String,
}

/// Request body for creating an airport.
#[derive(Debug, Clone, Serialize)]
pub struct NewAirport {
    pub name: String,
    pub code: String,
    pub city_id: String,
}

/// Seats per fare class on an airplane.
#[derive(Debug, Clone, Serialize)]
pub struct SeatDistribution {
    pub economy: u32,
    pub premium: u32,
    pub business: u32,
}

/// Request body for creating an airplane.
#[derive(Debug, Clone, Serialize)]
pub struct NewAirplane {
    pub name: String,
    pub code: String,
    pub seat_distribution: SeatDistribution,
}

/// Per-fare-class price multipliers, as the backend expects them.
#[derive(Debug, Clone, Serialize)]
pub struct ClassPriceFactor {
    pub economy: f64,
    pub premium: f64,
    pub business: f64,
}

impl From<PriceFactors> for ClassPriceFactor {
    fn from(factors: PriceFactors) -> Self {
        Self {
            economy: factors.economy,
            premium: factors.premium,
            business: factors.business,
        }
    }
}

/// Request body for creating a standalone (single-leg) flight.
#[derive(Debug, Clone, Serialize)]
pub struct NewFlight {
    pub flight_number: String,
    pub airplane_id: String,
    pub source_airport_id: String,
    pub destination_airport_id: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub class_price_factor: ClassPriceFactor,
}

/// One leg of a cycle submission.
///
/// Offsets and price go over the wire as strings.
#[derive(Debug, Clone, Serialize)]
pub struct CycleLegPayload {
    pub source_airport_id: String,
    pub destination_airport_id: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub departure_day_offset: String,
    pub arrival_day_offset: String,
    pub price: String,
    pub class_price_factor: ClassPriceFactor,
}

impl CycleLegPayload {
    fn from_leg(leg: &Leg) -> Result<Self, DomainError> {
        let source_airport_id = leg
            .source_airport
            .clone()
            .ok_or(DomainError::MissingField("source_airport"))?;
        let destination_airport_id = leg
            .destination_airport
            .clone()
            .ok_or(DomainError::MissingField("destination_airport"))?;
        let departure_time = leg
            .departure_time
            .ok_or(DomainError::MissingField("departure_time"))?;
        let arrival_time = leg
            .arrival_time
            .ok_or(DomainError::MissingField("arrival_time"))?;

        Ok(Self {
            source_airport_id,
            destination_airport_id,
            departure_time: departure_time.to_string(),
            arrival_time: arrival_time.to_string(),
            departure_day_offset: leg.departure_day_offset.to_string(),
            arrival_day_offset: leg.arrival_day_offset.to_string(),
            price: leg.price.to_string(),
            class_price_factor: leg.price_factors.into(),
        })
    }
}

/// Request body for submitting a flight cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CyclePayload {
    pub airplane_id: String,
    pub start_date: String,
    pub total_days: String,
    pub legs: Vec<CycleLegPayload>,
}

impl CyclePayload {
    /// Assemble the wire payload from a finished draft.
    ///
    /// Fails if the cycle has no legs, or if the airplane, start date, or
    /// any leg's airports or times are still unset. The total-days figure
    /// is derived here, never taken from the caller.
    pub fn from_cycle(cycle: &FlightCycle) -> Result<Self, DomainError> {
        let airplane_id = cycle
            .airplane
            .clone()
            .ok_or(DomainError::MissingField("airplane"))?;
        let start_date = cycle
            .start_date
            .ok_or(DomainError::MissingField("start_date"))?;

        if cycle.legs.is_empty() {
            return Err(DomainError::EmptyCycle);
        }

        let legs = cycle
            .legs
            .iter()
            .map(CycleLegPayload::from_leg)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            airplane_id,
            start_date: start_date.format("%Y-%m-%d").to_string(),
            total_days: compute_total_days(&cycle.legs).to_string(),
            legs,
        })
    }
}

/// A newly created entity, as echoed back by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One autocomplete search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;
    use chrono::NaiveDate;

    fn complete_cycle() -> FlightCycle {
        let mut cycle = FlightCycle::new();
        cycle.airplane = Some("plane-1".into());
        cycle.start_date = NaiveDate::from_ymd_opt(2026, 3, 14);

        let mut leg = Leg::new();
        leg.source_airport = Some("apt-a".into());
        leg.destination_airport = Some("apt-b".into());
        leg.departure_time = TimeOfDay::parse_hhmm("08:00").ok();
        leg.arrival_time = TimeOfDay::parse_hhmm("11:30").ok();
        leg.arrival_day_offset = 2;
        leg.price = 150.0;
        cycle.legs.push(leg);

        cycle
    }

    #[test]
    fn payload_from_complete_cycle() {
        let payload = CyclePayload::from_cycle(&complete_cycle()).unwrap();
        assert_eq!(payload.airplane_id, "plane-1");
        assert_eq!(payload.start_date, "2026-03-14");
        assert_eq!(payload.total_days, "3");
        assert_eq!(payload.legs.len(), 1);

        let leg = &payload.legs[0];
        assert_eq!(leg.departure_time, "08:00");
        assert_eq!(leg.arrival_time, "11:30");
        assert_eq!(leg.departure_day_offset, "0");
        assert_eq!(leg.arrival_day_offset, "2");
        assert_eq!(leg.price, "150");
        assert_eq!(leg.class_price_factor.economy, 1.2);
    }

    #[test]
    fn payload_serializes_offsets_as_strings() {
        let payload = CyclePayload::from_cycle(&complete_cycle()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["total_days"], "3");
        assert_eq!(json["legs"][0]["arrival_day_offset"], "2");
        assert_eq!(json["legs"][0]["price"], "150");
        assert_eq!(json["legs"][0]["class_price_factor"]["business"], 3.5);
    }

    #[test]
    fn payload_requires_airplane_and_start_date() {
        let mut cycle = complete_cycle();
        cycle.airplane = None;
        assert!(matches!(
            CyclePayload::from_cycle(&cycle),
            Err(DomainError::MissingField("airplane"))
        ));

        let mut cycle = complete_cycle();
        cycle.start_date = None;
        assert!(matches!(
            CyclePayload::from_cycle(&cycle),
            Err(DomainError::MissingField("start_date"))
        ));
    }

    #[test]
    fn payload_requires_at_least_one_leg() {
        let mut cycle = complete_cycle();
        cycle.legs.clear();
        assert!(matches!(
            CyclePayload::from_cycle(&cycle),
            Err(DomainError::EmptyCycle)
        ));
    }

    #[test]
    fn payload_requires_complete_legs() {
        let mut cycle = complete_cycle();
        cycle.legs[0].arrival_time = None;
        assert!(matches!(
            CyclePayload::from_cycle(&cycle),
            Err(DomainError::MissingField("arrival_time"))
        ));

        let mut cycle = complete_cycle();
        cycle.legs[0].destination_airport = None;
        assert!(matches!(
            CyclePayload::from_cycle(&cycle),
            Err(DomainError::MissingField("destination_airport"))
        ));
    }

    #[test]
    fn envelope_deserializes_with_and_without_data() {
        let ok: ApiEnvelope<SearchHit> = serde_json::from_str(
            r#"{"ok":true,"message":"found","data":{"id":"1","name":"Heathrow"}}"#,
        )
        .unwrap();
        assert!(ok.ok);
        assert_eq!(ok.data.unwrap().name, "Heathrow");

        let rejected: ApiEnvelope<SearchHit> =
            serde_json::from_str(r#"{"ok":false,"message":"not found"}"#).unwrap();
        assert!(!rejected.ok);
        assert!(rejected.data.is_none());
        assert_eq!(rejected.message, "not found");
    }
}
