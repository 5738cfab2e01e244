// Database layer module

pub mod pool;
pub mod redis;
pub mod transaction;

pub use pool::DbPool;
pub use redis::RedisCache;
pub use transaction::with_transaction;
