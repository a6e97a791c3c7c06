//! Cache module for Redis-based caching

pub mod page_cache;
pub mod redis_client;


pub use page_cache::{RedisPageCache, PAGE_CACHE_MAX_ATTEMPTS};
pub use redis_client::RedisClient;
