//! Booking backend HTTP client.
//!
//! Talks to the backend's admin endpoints: session login/logout, reference
//! data creation (countries, cities, airports, airplanes), flight and
//! flight cycle submission, and autocomplete search. Authentication is a
//! session cookie set by the login endpoint, so the client keeps a cookie
//! store for the lifetime of the process.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::BackendError;
use super::types::{
    AdminUser, ApiEnvelope, CreatedEntity, Credentials, CyclePayload, LoginData, NewAirplane,
    NewAirport, NewCity, NewCountry, NewFlight, SearchHit,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the booking backend, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a new config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// The entity kinds the autocomplete search endpoint covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Country,
    City,
    Airport,
    Airplane,
}

impl SearchKind {
    /// URL path segment for this kind. The backend repeats the segment,
    /// e.g. `/flight/airport/airport/search/{query}`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SearchKind::Country => "country",
            SearchKind::City => "city",
            SearchKind::Airport => "airport",
            SearchKind::Airplane => "airplane",
        }
    }
}

/// Booking backend API client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Log in as an admin. On success the backend sets a session cookie,
    /// which the client presents on every subsequent request.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, BackendError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let data: LoginData = self.post("/auth/admin/login", &credentials).await?;
        Ok(data.user)
    }

    /// End the admin session.
    pub async fn logout(&self) -> Result<(), BackendError> {
        let url = format!("{}/auth/admin/logout", self.base_url);
        let response = self.http.post(&url).send().await?;
        // Logout responses carry no data; only the envelope matters.
        let _envelope: ApiEnvelope<serde_json::Value> = Self::read_envelope(response).await?;
        Ok(())
    }

    /// Create a country.
    pub async fn create_country(&self, country: &NewCountry) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/country", country).await
    }

    /// Create a city within a country.
    pub async fn create_city(&self, city: &NewCity) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/city", city).await
    }

    /// Create an airport within a city.
    pub async fn create_airport(&self, airport: &NewAirport) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/airport", airport).await
    }

    /// Create an airplane with its seat distribution.
    pub async fn create_airplane(
        &self,
        airplane: &NewAirplane,
    ) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/airplane", airplane).await
    }

    /// Create a standalone flight.
    pub async fn create_flight(&self, flight: &NewFlight) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/flight", flight).await
    }

    /// Submit a flight cycle.
    pub async fn create_flight_cycle(
        &self,
        cycle: &CyclePayload,
    ) -> Result<CreatedEntity, BackendError> {
        self.post_created("/flight/flight/cycle", cycle).await
    }

    /// Autocomplete search over one entity kind.
    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
    ) -> Result<Vec<SearchHit>, BackendError> {
        let segment = kind.path_segment();
        let url = format!("{}/flight/{segment}/{segment}/search/{query}", self.base_url);
        let response = self.http.get(&url).send().await?;
        let envelope: ApiEnvelope<Vec<SearchHit>> = Self::read_envelope(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// POST a body and unwrap the envelope's data.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;
        let envelope: ApiEnvelope<T> = Self::read_envelope(response).await?;
        envelope.data.ok_or_else(|| BackendError::Json {
            message: "response envelope has no data".to_string(),
            body: None,
        })
    }

    /// POST a body to a creation endpoint, tolerating a missing echo.
    async fn post_created<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<CreatedEntity, BackendError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;
        let envelope: ApiEnvelope<CreatedEntity> = Self::read_envelope(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Turn a raw response into a checked envelope.
    ///
    /// Maps 401 to `Unauthorized`, other non-2xx statuses to `Api`, and an
    /// `ok: false` envelope inside a 2xx response to `Rejected`.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, BackendError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| BackendError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        if !envelope.ok {
            return Err(BackendError::Rejected(envelope.message));
        }

        Ok(envelope)
    }
}
