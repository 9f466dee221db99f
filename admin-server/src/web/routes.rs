//! HTTP route handlers.
//!
//! The admin SPA is served from the static directory; everything under
//! `/api` is JSON. Cycle endpoints replay the submitted draft through a
//! [`CycleEditor`] so the derived total-days figure and the per-leg time
//! warnings come from the same code the form logic uses. Warnings are
//! returned alongside results and never block a submission.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::backend::{
    BackendError, CreatedEntity, CyclePayload, NewAirplane, NewAirport, NewCity, NewCountry,
    NewFlight, SearchKind, SeatDistribution,
};
use crate::domain::{AirportCode, CountryCode, DomainError, FlightCycle, TimeOfDay};
use crate::form::{CycleEditor, LegField, ToastBuffer};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the admin SPA's static assets.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/country", post(create_country))
        .route("/api/city", post(create_city))
        .route("/api/airport", post(create_airport))
        .route("/api/airplane", post(create_airplane))
        .route("/api/flight", post(create_flight))
        .route("/api/flight-cycle/validate", post(validate_cycle))
        .route("/api/flight-cycle", post(submit_cycle))
        .route("/api/search/:kind", get(search))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Log in as an admin. The backend session cookie lives in the shared
/// client, so one login serves the whole process.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .backend
        .login(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            // The backend answers bad credentials with ok: false.
            BackendError::Rejected(_) => AppError::Unauthorized,
            other => AppError::from(other),
        })?;

    Ok(Json(LoginResponse {
        name: user.name,
        email: user.email,
    }))
}

/// End the admin session.
async fn logout(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    state.backend.logout().await?;
    Ok(Json(MessageResponse {
        message: "logged out".to_string(),
    }))
}

/// Create a country.
async fn create_country(
    State(state): State<AppState>,
    Json(req): Json<CreateCountryRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let code = CountryCode::parse(&req.code).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let created = state
        .backend
        .create_country(&NewCountry {
            name: req.name,
            code: code.as_str().to_string(),
        })
        .await?;

    Ok(created_response("country created", created))
}

/// Create a city within a country.
async fn create_city(
    State(state): State<AppState>,
    Json(req): Json<CreateCityRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let created = state
        .backend
        .create_city(&NewCity {
            name: req.name,
            country_id: req.country_id,
        })
        .await?;

    Ok(created_response("city created", created))
}

/// Create an airport within a city.
async fn create_airport(
    State(state): State<AppState>,
    Json(req): Json<CreateAirportRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let code = AirportCode::parse(&req.code).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let created = state
        .backend
        .create_airport(&NewAirport {
            name: req.name,
            code: code.as_str().to_string(),
            city_id: req.city_id,
        })
        .await?;

    Ok(created_response("airport created", created))
}

/// Create an airplane with its seat distribution.
async fn create_airplane(
    State(state): State<AppState>,
    Json(req): Json<CreateAirplaneRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let created = state
        .backend
        .create_airplane(&NewAirplane {
            name: req.name,
            code: req.code,
            seat_distribution: SeatDistribution {
                economy: req.seat_distribution.economy,
                premium: req.seat_distribution.premium,
                business: req.seat_distribution.business,
            },
        })
        .await?;

    Ok(created_response("airplane created", created))
}

/// Create a standalone flight.
async fn create_flight(
    State(state): State<AppState>,
    Json(req): Json<CreateFlightRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let departure = parse_time(&req.departure_time)?;
    let arrival = parse_time(&req.arrival_time)?;

    let created = state
        .backend
        .create_flight(&NewFlight {
            flight_number: req.flight_number,
            airplane_id: req.airplane_id,
            source_airport_id: req.source_airport_id,
            destination_airport_id: req.destination_airport_id,
            departure_time: departure.to_string(),
            arrival_time: arrival.to_string(),
            price: req.price,
            class_price_factor: req.class_price_factor.resolve().into(),
        })
        .await?;

    Ok(created_response("flight created", created))
}

/// Validate a cycle draft without submitting it.
///
/// Returns the derived total-days figure and any per-leg time warnings.
async fn validate_cycle(
    Json(draft): Json<CycleDraft>,
) -> Result<Json<ValidateCycleResponse>, AppError> {
    let cycle = to_cycle(&draft)?;
    let (total_days, warnings) = replay_cycle(&cycle)?;

    Ok(Json(ValidateCycleResponse {
        total_days,
        warnings,
    }))
}

/// Submit a cycle draft to the backend.
///
/// Time warnings are reported but do not block the submission; only a
/// structurally incomplete draft (no legs, missing airplane, date,
/// airports, or times) is rejected.
async fn submit_cycle(
    State(state): State<AppState>,
    Json(draft): Json<CycleDraft>,
) -> Result<Json<SubmitCycleResponse>, AppError> {
    let cycle = to_cycle(&draft)?;
    let (total_days, warnings) = replay_cycle(&cycle)?;

    let payload = CyclePayload::from_cycle(&cycle)?;
    state.backend.create_flight_cycle(&payload).await?;

    Ok(Json(SubmitCycleResponse {
        message: "flight cycle created".to_string(),
        total_days,
        warnings,
    }))
}

/// Autocomplete search over one entity kind.
async fn search(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let kind = parse_search_kind(&kind)?;

    if query.q.trim().is_empty() {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
        }));
    }

    let hits = state.backend.search(kind, &query.q).await?;
    let results = hits.iter().map(SearchResult::from).collect();

    Ok(Json(SearchResponse { results }))
}

fn parse_search_kind(kind: &str) -> Result<SearchKind, AppError> {
    match kind {
        "country" => Ok(SearchKind::Country),
        "city" => Ok(SearchKind::City),
        "airport" => Ok(SearchKind::Airport),
        "airplane" => Ok(SearchKind::Airplane),
        other => Err(AppError::BadRequest {
            message: format!("Unknown search kind: {other}"),
        }),
    }
}

fn parse_time(value: &str) -> Result<TimeOfDay, AppError> {
    TimeOfDay::parse_hhmm(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid time (expected HH:MM): {value}"),
    })
}

fn to_cycle(draft: &CycleDraft) -> Result<FlightCycle, AppError> {
    draft
        .to_cycle()
        .map_err(|message| AppError::BadRequest { message })
}

fn created_response(message: &str, created: CreatedEntity) -> Json<CreatedResponse> {
    Json(CreatedResponse {
        message: message.to_string(),
        id: created.id,
        name: created.name,
    })
}

/// Replay a cycle through the form editor.
///
/// Fields are applied in the order the form does, with both time fields
/// last, so each leg's ordering is checked exactly once when it is fully
/// in place. Warnings come back tagged with the leg's index.
fn replay_cycle(cycle: &FlightCycle) -> Result<(u32, Vec<LegWarning>), DomainError> {
    let mut editor = CycleEditor::new(ToastBuffer::new());
    editor.set_airplane(cycle.airplane.clone());
    editor.set_start_date(cycle.start_date);

    let mut warnings = Vec::new();

    for leg in &cycle.legs {
        let index = editor.add_leg();
        editor.update_leg(index, LegField::SourceAirport(leg.source_airport.clone()))?;
        editor.update_leg(
            index,
            LegField::DestinationAirport(leg.destination_airport.clone()),
        )?;
        editor.update_leg(index, LegField::Price(leg.price))?;
        for class in crate::domain::FareClass::ALL {
            editor.update_leg(
                index,
                LegField::PriceFactor(class, leg.price_factors.factor_for(class)),
            )?;
        }
        editor.update_leg(index, LegField::DepartureDayOffset(leg.departure_day_offset))?;
        editor.update_leg(index, LegField::ArrivalDayOffset(leg.arrival_day_offset))?;
        editor.update_leg(index, LegField::DepartureTime(leg.departure_time))?;
        editor.update_leg(index, LegField::ArrivalTime(leg.arrival_time))?;

        for message in editor.notifier_mut().drain() {
            warnings.push(LegWarning {
                leg: index,
                message,
            });
        }
    }

    Ok((editor.total_days(), warnings))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized,
    Upstream { message: String },
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Unauthorized => AppError::Unauthorized,
            BackendError::Rejected(message) => AppError::BadRequest { message },
            other => AppError::Upstream {
                message: other.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, TIME_ORDER_WARNING};

    fn time(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse_hhmm(s).unwrap())
    }

    fn leg(dep: &str, arr: &str, arr_offset: u32) -> Leg {
        let mut leg = Leg::new();
        leg.departure_time = time(dep);
        leg.arrival_time = time(arr);
        leg.arrival_day_offset = arr_offset;
        leg
    }

    #[test]
    fn replay_derives_total_days() {
        let mut cycle = FlightCycle::new();
        cycle.legs.push(leg("08:00", "10:00", 0));
        cycle.legs.push(leg("12:00", "09:00", 2));

        let (total_days, warnings) = replay_cycle(&cycle).unwrap();
        assert_eq!(total_days, 3);
        assert!(warnings.is_empty());
    }

    #[test]
    fn replay_tags_warnings_with_leg_index() {
        let mut cycle = FlightCycle::new();
        cycle.legs.push(leg("08:00", "10:00", 0));
        cycle.legs.push(leg("12:00", "09:00", 0));

        let (_, warnings) = replay_cycle(&cycle).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].leg, 1);
        assert_eq!(warnings[0].message, TIME_ORDER_WARNING);
    }

    #[test]
    fn replay_skips_incomplete_legs() {
        let mut cycle = FlightCycle::new();
        let mut incomplete = Leg::new();
        incomplete.departure_time = time("23:00");
        cycle.legs.push(incomplete);

        let (total_days, warnings) = replay_cycle(&cycle).unwrap();
        assert_eq!(total_days, 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn search_kind_parsing() {
        assert!(matches!(
            parse_search_kind("airport"),
            Ok(SearchKind::Airport)
        ));
        assert!(parse_search_kind("flight").is_err());
    }
}
