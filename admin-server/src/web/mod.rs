//! Web layer: JSON API for the admin SPA, plus static asset serving.

mod dto;
mod routes;
mod state;

pub use dto::{
    CreateAirplaneRequest, CreateAirportRequest, CreateCityRequest, CreateCountryRequest,
    CreateFlightRequest, CycleDraft, LegDraft, LegWarning, LoginRequest, SearchQuery,
    SubmitCycleResponse, ValidateCycleResponse,
};
pub use routes::{AppError, create_router};
pub use state::AppState;
