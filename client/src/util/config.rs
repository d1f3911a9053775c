//! Build-time configuration for the browser bundle.
//!
//! `VITE_*` values are baked in when the WASM is compiled, the same way a
//! bundler inlines them, then resolved through the core crate's lookup rules.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use storefront::StorefrontConfig;
use storefront::config::{API_URL_FALLBACK_KEY, API_URL_KEY, ConfigError};

/// Value of `key` captured at compile time, if any.
pub fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        API_URL_KEY => option_env!("VITE_API_URL_V1"),
        API_URL_FALLBACK_KEY => option_env!("VITE_API_URL"),
        "VITE_NOTICE_MS" => option_env!("VITE_NOTICE_MS"),
        "VITE_GUARD_DELAY_MS" => option_env!("VITE_GUARD_DELAY_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Resolve the bundle's configuration.
///
/// # Errors
///
/// Returns [`ConfigError`] when no backend URL was baked in or it is malformed.
pub fn web_config() -> Result<StorefrontConfig, ConfigError> {
    StorefrontConfig::from_lookup(build_time_value)
}
