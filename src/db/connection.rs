//! Postgres pool setup

use std::time::Duration;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

use crate::{config::DatabaseConfig, constants::DATABASE_APPLICATION_NAME};

/// Connection options parsed from `DATABASE_URL`, tagged with this service's name
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let options: PgConnectOptions = config.url.parse()?;
    Ok(options.application_name(DATABASE_APPLICATION_NAME))
}

/// Pool sizing and acquire timeout from [`DatabaseConfig`]
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}

/// Open the process-wide pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect_with(connect_options(config)?)
        .await
}

/// Round-trip a trivial query; used at startup and by the health check
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 7,
            acquire_timeout_secs: 3,
        }
    }

    #[test]
    fn test_connect_options_carry_application_name() {
        let options = connect_options(&config("postgres://app:pw@db.internal:5433/competitions"))
            .unwrap();
        assert_eq!(options.get_application_name(), Some(DATABASE_APPLICATION_NAME));
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("competitions"));
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        assert!(connect_options(&config("not a url")).is_err());
    }

    #[test]
    fn test_pool_options_follow_config() {
        let options = pool_options(&config("postgres://localhost/competitions"));
        assert_eq!(options.get_max_connections(), 7);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(3));
    }
}
