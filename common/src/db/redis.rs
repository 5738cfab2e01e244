// Lazily-connected Redis client
//
// Callers degrade gracefully when Redis is absent: the accessor hands out
// `None` instead of an error, both when no URL is configured and when the
// one connection attempt failed.

use redis::aio::ConnectionManager;
use redis::Client;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

enum CacheState {
    Uninit,
    Ready(ConnectionManager),
    Unavailable,
}

/// Shared Redis handle with lazy, at-most-once connection establishment.
///
/// Constructed once at startup and passed into the application state; the
/// mutex doubles as the initialization guard, so concurrent first calls
/// cannot race into duplicate connections. A failed attempt is sticky until
/// `close` resets the cache.
pub struct RedisCache {
    url: Option<String>,
    state: Mutex<CacheState>,
}

impl RedisCache {
    /// Store the configuration without connecting.
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            state: Mutex::new(CacheState::Uninit),
        }
    }

    /// Get the Redis connection, establishing it on first use.
    ///
    /// Returns `None` when no REDIS_URL is configured or when the connection
    /// attempt failed; a failure is logged as a warning and never raised.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Option<ConnectionManager> {
        let url = self.url.as_deref()?;
        let mut state = self.state.lock().await;

        match &*state {
            CacheState::Ready(manager) => Some(manager.clone()),
            CacheState::Unavailable => None,
            CacheState::Uninit => match Self::connect(url).await {
                Ok(manager) => {
                    info!("Redis connection established");
                    *state = CacheState::Ready(manager.clone());
                    Some(manager)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to connect to Redis, continuing without it");
                    *state = CacheState::Unavailable;
                    None
                }
            },
        }
    }

    async fn connect(url: &str) -> Result<ConnectionManager, redis::RedisError> {
        let client = Client::open(url)?;
        let mut manager = ConnectionManager::new(client).await?;

        let response: String = redis::cmd("PING").query_async(&mut manager).await?;
        if response != "PONG" {
            return Err((redis::ErrorKind::ResponseError, "Unexpected PING response").into());
        }

        Ok(manager)
    }

    /// Close the connection and clear the cache.
    ///
    /// Idempotent; after teardown the next `get` may connect again.
    #[instrument(skip(self))]
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if matches!(&*state, CacheState::Ready(_)) {
            info!("Redis connection closed");
        }
        *state = CacheState::Uninit;
    }
}
