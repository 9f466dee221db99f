//! Booking backend integration.
//!
//! HTTP client for the backend's admin API: session auth, reference data
//! creation, flight and cycle submission, and autocomplete search.

mod client;
mod error;
mod types;

pub use client::{BackendClient, BackendConfig, SearchKind};
pub use error::BackendError;
pub use types::{
    AdminUser, ApiEnvelope, ClassPriceFactor, CreatedEntity, Credentials, CycleLegPayload,
    CyclePayload, LoginData, NewAirplane, NewAirport, NewCity, NewCountry, NewFlight,
    SeatDistribution, SearchHit,
};
