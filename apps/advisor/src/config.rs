use std::str::FromStr;

use anyhow::{Context, Result};

use crate::render::TopRolesLayout;
use crate::wizard::PredictMode;

pub const DEFAULT_API_BASE: &str = "https://sca-backend-n7ic.onrender.com";

/// Client configuration loaded from environment variables.
/// Every field has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    /// Raw `Cookie` header value for an already-authenticated backend session.
    pub session_cookie: Option<String>,
    pub predict_mode: PredictMode,
    pub top_roles_layout: TopRolesLayout,
    pub auto_advance: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base = lookup("ADVISOR_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Config {
            api_base: normalize_base(&api_base),
            session_cookie: lookup("ADVISOR_SESSION_COOKIE").filter(|v| !v.trim().is_empty()),
            predict_mode: parse_or_default(&lookup, "ADVISOR_PREDICT_MODE")?,
            top_roles_layout: parse_or_default(&lookup, "ADVISOR_TOP_ROLES_LAYOUT")?,
            auto_advance: match lookup("ADVISOR_AUTO_ADVANCE") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("ADVISOR_AUTO_ADVANCE must be a boolean, got '{v}'"))?,
                None => false,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Strips trailing slashes so endpoint paths can be appended verbatim.
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<T>
where
    T: FromStr<Err = anyhow::Error> + Default,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<T>()
            .with_context(|| format!("Invalid value for {key}")),
        _ => Ok(T::default()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.session_cookie.is_none());
        assert_eq!(config.predict_mode, PredictMode::Explicit);
        assert_eq!(config.top_roles_layout, TopRolesLayout::List);
        assert!(!config.auto_advance);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_vars(vars(&[
            ("ADVISOR_API_BASE", "http://localhost:5000/"),
            ("ADVISOR_SESSION_COOKIE", "session=abc"),
            ("ADVISOR_PREDICT_MODE", "on-entry"),
            ("ADVISOR_TOP_ROLES_LAYOUT", "slots"),
            ("ADVISOR_AUTO_ADVANCE", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.session_cookie.as_deref(), Some("session=abc"));
        assert_eq!(config.predict_mode, PredictMode::OnEntry);
        assert_eq!(config.top_roles_layout, TopRolesLayout::FixedSlots);
        assert!(config.auto_advance);
    }

    #[test]
    fn test_invalid_predict_mode_is_rejected() {
        let err = Config::from_vars(vars(&[("ADVISOR_PREDICT_MODE", "sometimes")])).unwrap_err();
        assert!(err.to_string().contains("ADVISOR_PREDICT_MODE"));
    }

    #[test]
    fn test_invalid_auto_advance_is_rejected() {
        assert!(Config::from_vars(vars(&[("ADVISOR_AUTO_ADVANCE", "maybe")])).is_err());
    }

    #[test]
    fn test_blank_cookie_is_ignored() {
        let config = Config::from_vars(vars(&[("ADVISOR_SESSION_COOKIE", "  ")])).unwrap();
        assert!(config.session_cookie.is_none());
    }
}
