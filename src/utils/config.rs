use std::path::PathBuf;

use thiserror::Error;

use crate::api::mindicador::MindicadorClient;
use crate::services::series_service::DEFAULT_MAX_POINTS;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub chart_output_path: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    pub max_points: usize,
    /// Who the user should forward error messages to
    pub support_contact: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: MindicadorClient::DEFAULT_BASE_URL.to_string(),
            chart_output_path: PathBuf::from("grafico.png"),
            chart_width: 800,
            chart_height: 480,
            max_points: DEFAULT_MAX_POINTS,
            support_contact: "@Pipexlul".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            base_url: lookup("MINDICADOR_BASE_URL").unwrap_or(defaults.base_url),
            chart_output_path: lookup("CHART_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.chart_output_path),
            chart_width: parse_number(&lookup, "CHART_WIDTH", defaults.chart_width)?,
            chart_height: parse_number(&lookup, "CHART_HEIGHT", defaults.chart_height)?,
            max_points: parse_number(&lookup, "SERIES_MAX_POINTS", defaults.max_points)?,
            support_contact: lookup("SUPPORT_CONTACT").unwrap_or(defaults.support_contact),
        })
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_points, 10);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MINDICADOR_BASE_URL", "http://localhost:3000/api"),
            ("CHART_WIDTH", "1024"),
            ("SERIES_MAX_POINTS", "30"),
            ("SUPPORT_CONTACT", "@soporte"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.chart_width, 1024);
        assert_eq!(config.chart_height, 480);
        assert_eq!(config.max_points, 30);
        assert_eq!(config.support_contact, "@soporte");
    }

    #[test]
    fn test_invalid_number() {
        let result = AppConfig::from_lookup(lookup_from(&[("CHART_HEIGHT", "tall")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber { name: "CHART_HEIGHT", value: "tall".to_string() })
        );

        assert!(AppConfig::from_lookup(lookup_from(&[("CHART_WIDTH", "0")])).is_err());
    }
}
