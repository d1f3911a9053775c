use super::*;

#[test]
fn unknown_keys_are_never_baked_in() {
    assert_eq!(build_time_value("HOME"), None);
    assert_eq!(build_time_value(""), None);
}

#[test]
fn web_config_agrees_with_baked_values() {
    let non_blank = |key: &str| build_time_value(key).filter(|v| !v.trim().is_empty());
    let baked = non_blank(API_URL_KEY).or_else(|| non_blank(API_URL_FALLBACK_KEY));
    match web_config() {
        Ok(config) => assert!(baked.is_some_and(|url| url.contains(config.api_url.as_str()))),
        Err(err) => assert!(baked.is_none() || matches!(err, ConfigError::InvalidApiUrl(_))),
    }
}
