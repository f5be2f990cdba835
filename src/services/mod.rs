// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;

pub use auth::{AuthError, AuthUser, Claims, TokenValidator};
pub use cache::{CacheError, CacheKey, CacheManager};
pub use postgres::{PostgresClient, StoreError};
