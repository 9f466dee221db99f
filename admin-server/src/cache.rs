//! Caching layer for backend search responses.
//!
//! Autocomplete fires a search request on every keystroke, and admins
//! retype the same prefixes constantly. We cache search results per
//! (kind, normalized query) for a short TTL; mutations bypass the cache
//! entirely since the entity lists they change are small and re-fetched
//! on the next keystroke anyway.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::backend::{
    AdminUser, BackendClient, BackendError, CreatedEntity, CyclePayload, NewAirplane, NewAirport,
    NewCity, NewCountry, NewFlight, SearchHit, SearchKind,
};

/// Cache key for search results: (entity kind, normalized query).
type SearchKey = (SearchKind, String);

/// Cached search result list.
type SearchEntry = Arc<Vec<SearchHit>>;

/// Case-fold a query into its cache key. Only the key is folded; the
/// upstream request keeps the admin's original spelling.
fn cache_key(kind: SearchKind, trimmed_query: &str) -> SearchKey {
    (kind, trimmed_query.to_lowercase())
}

/// Configuration for the search cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 500,
        }
    }
}

/// Cache for backend search responses.
pub struct SearchCache {
    hits: MokaCache<SearchKey, SearchEntry>,
}

impl SearchCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let hits = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { hits }
    }

    /// Get a cached search entry.
    pub async fn get(&self, key: &SearchKey) -> Option<SearchEntry> {
        self.hits.get(key).await
    }

    /// Insert a search entry into the cache.
    pub async fn insert(&self, key: SearchKey, entry: SearchEntry) {
        self.hits.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.hits.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.hits.invalidate_all();
    }
}

/// Backend client with search caching.
///
/// Wraps a `BackendClient` and caches autocomplete responses. All other
/// operations pass straight through.
pub struct CachedBackend {
    client: BackendClient,
    cache: SearchCache,
}

impl CachedBackend {
    /// Create a new cached client.
    pub fn new(client: BackendClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: SearchCache::new(cache_config),
        }
    }

    /// Search one entity kind, using the cache if available.
    ///
    /// The cache key is case-folded so "Lon" and "lon " share an entry,
    /// but the query forwarded to the backend is exactly what the admin
    /// typed (minus surrounding whitespace) - the backend decides its own
    /// matching rules.
    pub async fn search(
        &self,
        kind: SearchKind,
        query: &str,
    ) -> Result<SearchEntry, BackendError> {
        let trimmed = query.trim();
        let key = cache_key(kind, trimmed);

        // Try cache first
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        // Fetch from the backend
        let hits = self.client.search(kind, trimmed).await?;
        let entry = Arc::new(hits);

        // Cache and return
        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Log in as an admin.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, BackendError> {
        self.client.login(email, password).await
    }

    /// End the admin session.
    pub async fn logout(&self) -> Result<(), BackendError> {
        self.client.logout().await
    }

    /// Create a country. Invalidates cached country searches.
    pub async fn create_country(
        &self,
        country: &NewCountry,
    ) -> Result<CreatedEntity, BackendError> {
        let created = self.client.create_country(country).await?;
        self.cache.invalidate_all();
        Ok(created)
    }

    /// Create a city.
    pub async fn create_city(&self, city: &NewCity) -> Result<CreatedEntity, BackendError> {
        let created = self.client.create_city(city).await?;
        self.cache.invalidate_all();
        Ok(created)
    }

    /// Create an airport.
    pub async fn create_airport(
        &self,
        airport: &NewAirport,
    ) -> Result<CreatedEntity, BackendError> {
        let created = self.client.create_airport(airport).await?;
        self.cache.invalidate_all();
        Ok(created)
    }

    /// Create an airplane.
    pub async fn create_airplane(
        &self,
        airplane: &NewAirplane,
    ) -> Result<CreatedEntity, BackendError> {
        let created = self.client.create_airplane(airplane).await?;
        self.cache.invalidate_all();
        Ok(created)
    }

    /// Create a standalone flight.
    pub async fn create_flight(&self, flight: &NewFlight) -> Result<CreatedEntity, BackendError> {
        self.client.create_flight(flight).await
    }

    /// Submit a flight cycle.
    pub async fn create_flight_cycle(
        &self,
        cycle: &CyclePayload,
    ) -> Result<CreatedEntity, BackendError> {
        self.client.create_flight_cycle(cycle).await
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
