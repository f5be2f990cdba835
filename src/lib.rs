//! Amora API - backend service for the Amora dating app
//!
//! Profiles, swipe-based discovery, mutual-match detection, match-scoped
//! messaging, and moderation, over a PostgreSQL store with a two-tier cache.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_candidates, is_mutual_like, normalize_pair, ExclusionSet};
pub use crate::errors::{ApiError, ApiResult};
pub use crate::models::{
    Match, MatchWithProfiles, Message, Profile, Swipe, SwipeAction, SwipeResponse,
};
