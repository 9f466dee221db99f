//! Data transfer objects for web requests and responses.
//!
//! Cycle drafts arrive exactly as the form holds them: partially filled,
//! with empty strings for untouched time inputs and possibly negative or
//! missing day offsets. Conversion into domain types coerces those form
//! artifacts (empty time becomes unset, negative offsets clamp to zero)
//! and only rejects values that are actually malformed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::SearchHit;
use crate::domain::{
    DEFAULT_BUSINESS_FACTOR, DEFAULT_ECONOMY_FACTOR, DEFAULT_PREMIUM_FACTOR, FlightCycle, Leg,
    MAX_DAY_OFFSET, PriceFactors, TimeOfDay,
};

/// Request to log in as an admin.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Display name of the admin, if the backend returned one
    pub name: Option<String>,

    /// Email of the logged-in admin
    pub email: Option<String>,
}

/// Generic acknowledgement response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request to create a country.
#[derive(Debug, Deserialize)]
pub struct CreateCountryRequest {
    pub name: String,

    /// Two-letter country code
    pub code: String,
}

/// Request to create a city.
#[derive(Debug, Deserialize)]
pub struct CreateCityRequest {
    pub name: String,

    /// Backend id of the country the city belongs to
    pub country_id: String,
}

/// Request to create an airport.
#[derive(Debug, Deserialize)]
pub struct CreateAirportRequest {
    pub name: String,

    /// Three-letter IATA code
    pub code: String,

    /// Backend id of the city the airport serves
    pub city_id: String,
}

/// Seats per fare class.
#[derive(Debug, Deserialize)]
pub struct SeatDistributionDto {
    pub economy: u32,
    pub premium: u32,
    pub business: u32,
}

/// Request to create an airplane.
#[derive(Debug, Deserialize)]
pub struct CreateAirplaneRequest {
    pub name: String,
    pub code: String,
    pub seat_distribution: SeatDistributionDto,
}

/// Per-fare-class price factors, each falling back to the form default
/// when left blank.
#[derive(Debug, Default, Deserialize)]
pub struct PriceFactorsDto {
    pub economy: Option<f64>,
    pub premium: Option<f64>,
    pub business: Option<f64>,
}

impl PriceFactorsDto {
    /// Resolve into domain factors, filling blanks with the defaults.
    pub fn resolve(&self) -> PriceFactors {
        PriceFactors {
            economy: self.economy.unwrap_or(DEFAULT_ECONOMY_FACTOR),
            premium: self.premium.unwrap_or(DEFAULT_PREMIUM_FACTOR),
            business: self.business.unwrap_or(DEFAULT_BUSINESS_FACTOR),
        }
    }
}

/// Request to create a standalone flight.
#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub airplane_id: String,
    pub source_airport_id: String,
    pub destination_airport_id: String,

    /// Departure time in HH:MM
    pub departure_time: String,

    /// Arrival time in HH:MM
    pub arrival_time: String,

    pub price: f64,

    /// Price factors; absent fields fall back to the form defaults
    #[serde(default)]
    pub class_price_factor: PriceFactorsDto,
}

/// One leg of a cycle draft, as the form holds it.
#[derive(Debug, Default, Deserialize)]
pub struct LegDraft {
    pub source_airport_id: Option<String>,
    pub destination_airport_id: Option<String>,

    /// Departure time in HH:MM; empty or absent means not yet entered
    pub departure_time: Option<String>,

    /// Arrival time in HH:MM; empty or absent means not yet entered
    pub arrival_time: Option<String>,

    /// Days after the start date; absent or negative coerces to 0,
    /// anything above the domain maximum clamps down to it
    pub departure_day_offset: Option<i64>,

    /// Days after the start date; absent or negative coerces to 0,
    /// anything above the domain maximum clamps down to it
    pub arrival_day_offset: Option<i64>,

    pub price: Option<f64>,

    #[serde(default)]
    pub class_price_factor: PriceFactorsDto,
}

impl LegDraft {
    /// Convert into a domain leg, coercing form artifacts.
    ///
    /// Returns a message suitable for a 400 response when a present time
    /// string is malformed.
    pub fn to_leg(&self) -> Result<Leg, String> {
        let mut leg = Leg::new();
        leg.source_airport = non_empty(self.source_airport_id.as_deref());
        leg.destination_airport = non_empty(self.destination_airport_id.as_deref());
        leg.departure_time = parse_optional_time(self.departure_time.as_deref())?;
        leg.arrival_time = parse_optional_time(self.arrival_time.as_deref())?;
        leg.departure_day_offset = coerce_offset(self.departure_day_offset);
        leg.arrival_day_offset = coerce_offset(self.arrival_day_offset);
        leg.price = self.price.unwrap_or(0.0);
        leg.price_factors = self.class_price_factor.resolve();
        Ok(leg)
    }
}

/// A cycle draft, as the form holds it.
#[derive(Debug, Deserialize)]
pub struct CycleDraft {
    pub airplane_id: Option<String>,

    /// Start date in YYYY-MM-DD; empty or absent means not yet picked
    pub start_date: Option<String>,

    #[serde(default)]
    pub legs: Vec<LegDraft>,
}

impl CycleDraft {
    /// Convert into a domain cycle, coercing form artifacts per leg.
    pub fn to_cycle(&self) -> Result<FlightCycle, String> {
        let mut cycle = FlightCycle::new();
        cycle.airplane = non_empty(self.airplane_id.as_deref());
        cycle.start_date = parse_optional_date(self.start_date.as_deref())?;
        cycle.legs = self
            .legs
            .iter()
            .map(LegDraft::to_leg)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cycle)
    }
}

/// An advisory warning attached to one leg of a draft.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LegWarning {
    /// Zero-based index of the leg in the draft
    pub leg: usize,

    /// Warning text, shown to the admin as a toast
    pub message: String,
}

/// Response for a cycle validation pass.
#[derive(Debug, Serialize)]
pub struct ValidateCycleResponse {
    /// Derived trip duration in days
    pub total_days: u32,

    /// Advisory warnings; these never block submission
    pub warnings: Vec<LegWarning>,
}

/// Response for a cycle submission.
#[derive(Debug, Serialize)]
pub struct SubmitCycleResponse {
    pub message: String,

    /// Derived trip duration in days, as submitted
    pub total_days: u32,

    /// Advisory warnings that were present at submission time
    pub warnings: Vec<LegWarning>,
}

/// Response for an entity creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Autocomplete search query.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// One autocomplete search result.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
}

impl From<&SearchHit> for SearchResult {
    fn from(hit: &SearchHit) -> Self {
        Self {
            id: hit.id.clone(),
            name: hit.name.clone(),
        }
    }
}

/// Response for an autocomplete search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_optional_time(value: Option<&str>) -> Result<Option<TimeOfDay>, String> {
    match non_empty(value) {
        None => Ok(None),
        Some(s) => TimeOfDay::parse_hhmm(&s)
            .map(Some)
            .map_err(|_| format!("Invalid time (expected HH:MM): {s}")),
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match non_empty(value) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("Invalid date (expected YYYY-MM-DD): {s}")),
    }
}

fn coerce_offset(value: Option<i64>) -> u32 {
    value.unwrap_or(0).clamp(0, i64::from(MAX_DAY_OFFSET)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_draft_coerces_form_artifacts() {
        let draft = LegDraft {
            source_airport_id: Some("  ".into()),
            destination_airport_id: Some("apt-2".into()),
            departure_time: Some("".into()),
            arrival_time: Some("09:30".into()),
            departure_day_offset: Some(-3),
            arrival_day_offset: None,
            price: None,
            class_price_factor: PriceFactorsDto::default(),
        };

        let leg = draft.to_leg().unwrap();
        assert!(leg.source_airport.is_none());
        assert_eq!(leg.destination_airport.as_deref(), Some("apt-2"));
        assert!(leg.departure_time.is_none());
        assert_eq!(leg.arrival_time.map(|t| t.to_string()), Some("09:30".into()));
        assert_eq!(leg.departure_day_offset, 0);
        assert_eq!(leg.arrival_day_offset, 0);
        assert_eq!(leg.price, 0.0);
        assert_eq!(leg.price_factors, PriceFactors::default());
    }

    #[test]
    fn huge_offsets_clamp_to_domain_max() {
        let draft = LegDraft {
            departure_day_offset: Some(99_999_999_999),
            arrival_day_offset: Some(i64::MAX),
            ..LegDraft::default()
        };
        let leg = draft.to_leg().unwrap();
        assert_eq!(leg.departure_day_offset, MAX_DAY_OFFSET);
        assert_eq!(leg.arrival_day_offset, MAX_DAY_OFFSET);

        // The clamped leg flows through duration derivation without panic.
        assert_eq!(
            crate::domain::compute_total_days(std::slice::from_ref(&leg)),
            MAX_DAY_OFFSET + 1
        );
    }

    #[test]
    fn leg_draft_rejects_malformed_time() {
        let draft = LegDraft {
            departure_time: Some("9:00".into()),
            ..LegDraft::default()
        };
        let err = draft.to_leg().unwrap_err();
        assert!(err.contains("9:00"));
    }

    #[test]
    fn cycle_draft_parses_start_date() {
        let draft = CycleDraft {
            airplane_id: Some("plane-1".into()),
            start_date: Some("2026-03-14".into()),
            legs: Vec::new(),
        };
        let cycle = draft.to_cycle().unwrap();
        assert_eq!(
            cycle.start_date,
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );

        let draft = CycleDraft {
            airplane_id: None,
            start_date: Some("14/03/2026".into()),
            legs: Vec::new(),
        };
        assert!(draft.to_cycle().is_err());
    }

    #[test]
    fn price_factors_fall_back_to_defaults() {
        let dto = PriceFactorsDto {
            premium: Some(2.5),
            ..PriceFactorsDto::default()
        };
        let factors = dto.resolve();
        assert_eq!(factors.economy, DEFAULT_ECONOMY_FACTOR);
        assert_eq!(factors.premium, 2.5);
        assert_eq!(factors.business, DEFAULT_BUSINESS_FACTOR);
    }

    #[test]
    fn drafts_deserialize_with_missing_fields() {
        let draft: CycleDraft = serde_json::from_str(r#"{"legs":[{}]}"#).unwrap();
        assert!(draft.airplane_id.is_none());
        assert_eq!(draft.legs.len(), 1);

        let cycle = draft.to_cycle().unwrap();
        assert_eq!(cycle.legs[0].arrival_day_offset, 0);
    }
}
