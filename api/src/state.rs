use std::sync::Arc;

use common::config::Settings;
use common::db::{DbPool, RedisCache};

/// Application state shared across all handlers
///
/// Settings and the Redis handle are constructed once in `main` and owned
/// here; handlers receive clones of this state rather than reaching for
/// globals.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub redis: Arc<RedisCache>,
    pub config: Arc<Settings>,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(db_pool: DbPool, redis: RedisCache, config: Settings) -> Self {
        Self {
            db_pool,
            redis: Arc::new(redis),
            config: Arc::new(config),
        }
    }
}
