use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("BRANDLENS_ENV", "development"));
    let bind_addr = parse_addr("BRANDLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BRANDLENS_LOG_LEVEL", "info");
    let markets_path = PathBuf::from(or_default("BRANDLENS_MARKETS_PATH", "./config/markets.yaml"));
    let keyword_api_key = lookup("KEYWORD_API_KEY").ok();

    let provider_timeout_secs = parse_u64("BRANDLENS_PROVIDER_TIMEOUT_SECS", "30")?;
    let provider_max_retries = parse_u32("BRANDLENS_PROVIDER_MAX_RETRIES", "3")?;
    let provider_retry_backoff_ms = parse_u64("BRANDLENS_PROVIDER_RETRY_BACKOFF_MS", "1000")?;
    let ranked_keywords_limit = parse_u32("BRANDLENS_RANKED_KEYWORDS_LIMIT", "100")?;
    let max_concurrent_markets = parse_usize("BRANDLENS_MAX_CONCURRENT_MARKETS", "2")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        markets_path,
        keyword_api_key,
        provider_timeout_secs,
        provider_max_retries,
        provider_retry_backoff_ms,
        ranked_keywords_limit,
        max_concurrent_markets,
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
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn empty_environment_uses_all_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.markets_path.to_string_lossy(),
            "./config/markets.yaml"
        );
        assert!(cfg.keyword_api_key.is_none());
        assert_eq!(cfg.provider_timeout_secs, 30);
        assert_eq!(cfg.provider_max_retries, 3);
        assert_eq!(cfg.provider_retry_backoff_ms, 1_000);
        assert_eq!(cfg.ranked_keywords_limit, 100);
        assert_eq!(cfg.max_concurrent_markets, 2);
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRANDLENS_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLENS_BIND_ADDR"),
            "expected InvalidEnvVar(BRANDLENS_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRANDLENS_PROVIDER_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRANDLENS_PROVIDER_TIMEOUT_SECS"),
            "expected InvalidEnvVar(BRANDLENS_PROVIDER_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn api_key_is_picked_up_when_present() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("KEYWORD_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.keyword_api_key.as_deref(), Some("secret-key"));
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("KEYWORD_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("secret-key"), "got: {debug}");
        assert!(debug.contains("[redacted]"), "got: {debug}");
    }

    #[test]
    fn overrides_are_applied() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRANDLENS_ENV", "production");
        map.insert("BRANDLENS_PROVIDER_MAX_RETRIES", "5");
        map.insert("BRANDLENS_RANKED_KEYWORDS_LIMIT", "250");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.provider_max_retries, 5);
        assert_eq!(cfg.ranked_keywords_limit, 250);
    }
}
