//! Database module - AppState and database operations
//!
//! This module is split into submodules for better separation of concerns:
//! - `employee` - Employee master-data operations
//! - `leave_request` - Leave-request operations (incl. the employee join)
//! - `users` - Application-user operations for authentication

mod employee;
mod leave_request;
mod users;

use dotenvy::dotenv;
use moka::future::Cache;
use sqlx::PgPool;
use std::env;
use std::time::Duration;

/// Cache key for the full employee listing.
pub const EMPLOYEE_CACHE_KEY: &str = "employees:all";
/// Cache key for the joined leave-request history listing.
pub const LEAVE_REQUEST_CACHE_KEY: &str = "leave_requests:all";

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub employee_cache: Cache<String, Vec<crate::employee::models::Employee>>,
    pub leave_request_cache:
        Cache<String, Vec<crate::leave_request::models::LeaveRequestWithEmployee>>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenv().ok();
        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(50)
            .min_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(900))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&database_url)
            .await?;

        Ok(Self::with_pool(pool))
    }

    /// Build state around an existing pool (used by tests).
    pub fn with_pool(pool: PgPool) -> Self {
        let employee_cache = Cache::builder()
            .time_to_live(Duration::from_secs(10 * 60))
            .max_capacity(10)
            .build();

        let leave_request_cache = Cache::builder()
            .time_to_live(Duration::from_secs(10 * 60))
            .max_capacity(10)
            .build();

        AppState {
            pool,
            employee_cache,
            leave_request_cache,
        }
    }
}
