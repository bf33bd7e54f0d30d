use reqwest::Client as HttpClient;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::models::{ApiError, CurrencySeriesResponse, RawIndicator};
use crate::api::IndicatorSource;

/// mindicador.cl API client for the daily indicator list and per-currency series
pub struct MindicadorClient {
    http_client: HttpClient,
    base_url: String,
}

impl MindicadorClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://mindicador.cl/api";

    /// Create a new client against the public API
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success status to the matching error
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            404 => ApiError::NotFound(body_text),
            _ => {
                warn!("Indicator API returned {}: {}", status_code, body_text);
                ApiError::Http(status_code, body_text)
            }
        }
    }

    /// GET the url and hand back the raw body text
    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);

        let response = self.http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))
    }
}

impl Default for MindicadorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorSource for MindicadorClient {
    /// GET /
    ///
    /// Returns every object-valued entry of the list in response order.
    async fn fetch_all_indicators(&self) -> Result<Vec<RawIndicator>, ApiError> {
        let url = format!("{}/", self.base_url);
        let body = self.get_text(&url).await?;
        parse_indicator_list(&body)
    }

    /// GET /{code}/
    ///
    /// Returns the full series for `code`, newest first.
    async fn fetch_currency_series(&self, code: &str) -> Result<CurrencySeriesResponse, ApiError> {
        validate_code(code)?;

        let url = format!("{}/{}/", self.base_url, code);
        let body = self.get_text(&url).await?;
        parse_currency_series(code, &body)
    }
}

/// Codes are plain identifiers such as `dolar` or `tasa_desempleo`
pub fn validate_code(code: &str) -> Result<(), ApiError> {
    let valid = !code.is_empty()
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidCode(code.to_string()))
    }
}

/// Parse the indicator list body
///
/// Top-level keys whose value is not an object (`version`, `autor`,
/// `fecha`) are metadata and skipped. Entries that are objects but do not
/// fit [`RawIndicator`] are logged and skipped.
pub fn parse_indicator_list(body: &str) -> Result<Vec<RawIndicator>, ApiError> {
    let root: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("Failed to parse indicator list: {}", e)))?;

    let mut indicators = Vec::new();

    for (key, value) in root {
        if !value.is_object() {
            continue;
        }

        match serde_json::from_value::<RawIndicator>(value) {
            Ok(mut indicator) => {
                if indicator.code.is_empty() {
                    indicator.code = key;
                }
                indicators.push(indicator);
            }
            Err(e) => {
                warn!("Skipping indicator '{}': {}", key, e);
            }
        }
    }

    debug!("Parsed {} indicators", indicators.len());
    Ok(indicators)
}

/// Parse a per-currency body; a body without `serie` means an unknown code
pub fn parse_currency_series(code: &str, body: &str) -> Result<CurrencySeriesResponse, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("Failed to parse series for '{}': {}", code, e)))?;

    if value.get("serie").is_none() {
        return Err(ApiError::NotFound(format!("No series published for '{}'", code)));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::Parse(format!("Unexpected series shape for '{}': {}", code, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_BODY: &str = r#"{
        "version": "1.7.0",
        "autor": "mindicador.cl",
        "fecha": "2024-05-10T20:00:00.000Z",
        "uf": {"codigo": "uf", "nombre": "Unidad de fomento (UF)", "unidad_medida": "Pesos", "fecha": "2024-05-10T04:00:00.000Z", "valor": 37445.12},
        "dolar": {"codigo": "dolar", "nombre": "Dólar observado", "unidad_medida": "Pesos", "fecha": "2024-05-10T04:00:00.000Z", "valor": 923.4},
        "ipc": {"codigo": "ipc", "nombre": "Indice de Precios al Consumidor (IPC)", "unidad_medida": "Porcentaje", "fecha": "2024-04-01T04:00:00.000Z", "valor": 0.5}
    }"#;

    #[test]
    fn test_parse_list_skips_metadata_and_keeps_order() {
        let indicators = parse_indicator_list(LIST_BODY).expect("list should parse");

        let codes: Vec<&str> = indicators.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["uf", "dolar", "ipc"]);
        assert_eq!(indicators[1].value, Some(923.4));
        assert!(indicators[0].date.is_some());
    }

    #[test]
    fn test_parse_list_uses_key_when_code_missing() {
        let body = r#"{"euro": {"nombre": "Euro", "unidad_medida": "Pesos", "valor": 1000.0}}"#;
        let indicators = parse_indicator_list(body).unwrap();

        assert_eq!(indicators.len(), 1);
        assert_eq!(indicators[0].code, "euro");
    }

    #[test]
    fn test_parse_list_keeps_entries_with_odd_date_or_null_code() {
        let body = r#"{
            "dolar": {"codigo": "dolar", "nombre": "Dolar", "unidad_medida": "Pesos", "valor": 900, "fecha": "2024-05-10"},
            "euro": {"codigo": null, "nombre": "Euro", "unidad_medida": "Pesos", "valor": 1000, "fecha": 12345}
        }"#;
        let indicators = parse_indicator_list(body).unwrap();

        assert_eq!(indicators.len(), 2);
        assert_eq!(indicators[0].code, "dolar");
        assert_eq!(indicators[0].date, None);
        assert_eq!(indicators[1].code, "euro");
        assert_eq!(indicators[1].date, None);

        let catalog = crate::services::catalog_service::CurrencyCatalog::build(indicators);
        assert!(catalog.find_by_code("dolar").is_some());
        assert!(catalog.find_by_code("euro").is_some());
    }

    #[test]
    fn test_parse_list_rejects_malformed_json() {
        let result = parse_indicator_list("<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_parse_series() {
        let body = r#"{
            "version": "1.7.0",
            "codigo": "dolar",
            "nombre": "Dólar observado",
            "unidad_medida": "Pesos",
            "serie": [
                {"fecha": "2024-05-10T04:00:00.000Z", "valor": 923.4},
                {"fecha": "2024-05-09T04:00:00.000Z", "valor": 925.1}
            ]
        }"#;

        let series = parse_currency_series("dolar", body).unwrap();
        assert_eq!(series.entries.len(), 2);
        assert_eq!(series.entries[0].timestamp, "2024-05-10T04:00:00.000Z");
        assert_eq!(series.entries[1].value, 925.1);
    }

    #[test]
    fn test_parse_series_without_serie_is_not_found() {
        let result = parse_currency_series("zzz", r#"{"version": "1.7.0"}"#);
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_parse_series_bad_record_is_parse_error() {
        let body = r#"{"serie": [{"fecha": "2024-05-10T04:00:00.000Z", "valor": "n/a"}]}"#;
        let result = parse_currency_series("dolar", body);
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("dolar").is_ok());
        assert!(validate_code("tasa_desempleo").is_ok());
        assert!(matches!(validate_code(""), Err(ApiError::InvalidCode(_))));
        assert!(matches!(validate_code("../etc"), Err(ApiError::InvalidCode(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MindicadorClient::with_base_url("http://localhost:8080/api/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
