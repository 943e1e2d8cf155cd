//! Application configuration, loaded from environment variables.
//!
//! - [`cors`]: allowed cross-origin callers (`ALLOWED_ORIGINS`)
//! - [`database`]: PostgreSQL pool initialization (`DATABASE_URL`)

pub mod cors;
pub mod database;
