use crate::app_config::{AppConfig, Environment, GroupingMode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("VITRINE_ENV", "development"));
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");

    // Checked by `AppConfig::require_erp_base_url`, so offline commands
    // still start with a bad value here.
    let erp_base_url = optional("VITRINE_ERP_BASE_URL");
    let erp_products_path = or_default("VITRINE_ERP_PRODUCTS_PATH", "/api/products");
    let erp_fallback_urls = optional("VITRINE_ERP_FALLBACK_URLS")
        .map(|raw| parse_url_list(&raw))
        .unwrap_or_default();
    let erp_local_fallback_path = optional("VITRINE_ERP_LOCAL_FALLBACK_PATH").map(PathBuf::from);

    let erp_request_timeout_secs = parse_u64("VITRINE_ERP_REQUEST_TIMEOUT_SECS", "30")?;
    let erp_user_agent = or_default("VITRINE_ERP_USER_AGENT", "vitrine/0.1 (catalog)");
    let erp_max_retries = parse_u32("VITRINE_ERP_MAX_RETRIES", "3")?;
    let erp_retry_backoff_base_secs = parse_u64("VITRINE_ERP_RETRY_BACKOFF_BASE_SECS", "1")?;

    let grouping_mode = or_default("VITRINE_GROUPING_MODE", "sku-prefix")
        .parse::<GroupingMode>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "VITRINE_GROUPING_MODE".to_string(),
            reason,
        })?;

    let items_per_page = or_default("VITRINE_ITEMS_PER_PAGE", "15")
        .parse::<usize>()
        .map_err(|e| e.to_string())
        .and_then(|n| {
            if n == 0 {
                Err("must be at least 1".to_string())
            } else {
                Ok(n)
            }
        })
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "VITRINE_ITEMS_PER_PAGE".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        env,
        log_level,
        erp_base_url,
        erp_products_path,
        erp_fallback_urls,
        erp_local_fallback_path,
        erp_request_timeout_secs,
        erp_user_agent,
        erp_max_retries,
        erp_retry_backoff_base_secs,
        grouping_mode,
        items_per_page,
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

/// Splits a comma-separated URL list, dropping blank entries.
fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
