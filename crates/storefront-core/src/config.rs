use crate::app_config::{AppConfig, Environment};
use crate::pricing::Locale;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw.trim_end_matches('/').to_string())
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let recommend_project_number = require("STOREFRONT_RECOMMEND_PROJECT_NUMBER")?;
    let recommend_api_key = require("STOREFRONT_RECOMMEND_API_KEY")?;

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"));
    let bind_addr = parse_addr("STOREFRONT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "STOREFRONT_CATALOG_PATH",
        "./config/catalog.yaml",
    ));

    let recommend_base_url = parse_url(
        "STOREFRONT_RECOMMEND_BASE_URL",
        "https://recommendationengine.clients6.google.com",
    )?;
    let recommend_canonical_host = parse_url(
        "STOREFRONT_RECOMMEND_CANONICAL_HOST",
        "https://recommend.superfast.shop",
    )?;
    let recommend_user_agent = or_default(
        "STOREFRONT_RECOMMEND_USER_AGENT",
        "storefront/0.1 (recommendations)",
    );

    let locale = Locale {
        locale: or_default("STOREFRONT_LOCALE", "en"),
        currency: or_default("STOREFRONT_CURRENCY", "USD"),
        default_price_variant: or_default("STOREFRONT_DEFAULT_PRICE_VARIANT", "default"),
        discount_price_variant: lookup("STOREFRONT_DISCOUNT_PRICE_VARIANT")
            .ok()
            .filter(|v| !v.is_empty()),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        recommend_project_number,
        recommend_api_key,
        recommend_base_url,
        recommend_canonical_host,
        recommend_user_agent,
        locale,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
