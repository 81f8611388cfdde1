use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{RATES, RatesConfig};
use crate::domain::Currency;

/// Why a rate refresh produced no usable data
#[derive(Debug, Clone, PartialEq)]
pub enum RateSourceError {
    /// Transport failure (DNS, TLS, connection reset, ...)
    Network(String),
    /// Non-success HTTP status
    Status(u16),
    /// The API answered but reported an error of its own
    Api(String),
    /// Body could not be read as a rate table
    Malformed(String),
    /// Networking disabled for this run
    Disabled,
}

impl fmt::Display for RateSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateSourceError::Network(msg) => write!(f, "Network error: {}", msg),
            RateSourceError::Status(code) => write!(f, "Rate API returned HTTP {}", code),
            RateSourceError::Api(msg) => write!(f, "Rate API error: {}", msg),
            RateSourceError::Malformed(msg) => write!(f, "Malformed rate response: {}", msg),
            RateSourceError::Disabled => write!(f, "Live rates disabled"),
        }
    }
}

impl std::error::Error for RateSourceError {}

/// Response body of the rates endpoint. Only `rates` is required; the v6 API
/// names it `conversion_rates`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LiveRates {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
    #[serde(default, alias = "conversion_rates")]
    pub rates: HashMap<String, f64>,
}

impl LiveRates {
    pub fn parse(body: &str) -> Result<Self, RateSourceError> {
        let parsed: LiveRates =
            serde_json::from_str(body).map_err(|e| RateSourceError::Malformed(e.to_string()))?;

        if let Some(result) = parsed.result.as_deref() {
            if result != "success" {
                let reason = parsed.error_type.clone().unwrap_or_else(|| result.to_string());
                return Err(RateSourceError::Api(reason));
            }
        }
        if parsed.rates.is_empty() {
            return Err(RateSourceError::Malformed("no rates in response".to_string()));
        }
        Ok(parsed)
    }
}

/// Somewhere exchange rates can be fetched from.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateSource: Send + Sync {
    /// Fetch the latest multipliers relative to `base`.
    async fn fetch_rates(&self, base: Currency) -> Result<LiveRates, RateSourceError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// exchangerate-api.com (v6) client
pub struct ExchangeRateApi {
    api_base_url: String,
}

impl ExchangeRateApi {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Endpoint from `RATES_API_URL` if set, otherwise the configured default
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let url = std::env::var(RATES.api_url_env)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| RATES.api_base_url.to_string());
        Self::new(url)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::new(RATES.api_base_url)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for ExchangeRateApi {
    fn default() -> Self {
        Self::new(RATES.api_base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateSource for ExchangeRateApi {
    fn signature(&self) -> &'static str {
        "exchangerate-api.com"
    }

    async fn fetch_rates(&self, base: Currency) -> Result<LiveRates, RateSourceError> {
        let url = RatesConfig::latest_url(&self.api_base_url, base);

        // One client per fetch: nothing is pooled between refreshes
        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .map_err(|e| RateSourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateSourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RateSourceError::Network(e.to_string()))?;
        LiveRates::parse(&body)
    }
}

/// Source used with `--offline`: every refresh fails, so the fallback table
/// stays authoritative.
pub struct OfflineRates;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RateSource for OfflineRates {
    fn signature(&self) -> &'static str {
        "Offline"
    }

    async fn fetch_rates(&self, _base: Currency) -> Result<LiveRates, RateSourceError> {
        Err(RateSourceError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rates_key() {
        let live = LiveRates::parse(r#"{ "base": "KZT", "rates": { "RUB": 0.17, "USD": 0.002 } }"#)
            .unwrap();
        assert_eq!(live.rates.get("RUB"), Some(&0.17));
        assert_eq!(live.rates.get("USD"), Some(&0.002));
    }

    #[test]
    fn parses_v6_conversion_rates_key() {
        let body = r#"{
            "result": "success",
            "base_code": "KZT",
            "conversion_rates": { "KZT": 1, "RUB": 0.1612, "USD": 0.00198 }
        }"#;
        let live = LiveRates::parse(body).unwrap();
        assert_eq!(live.base_code.as_deref(), Some("KZT"));
        assert_eq!(live.rates.get("KZT"), Some(&1.0));
        assert_eq!(live.rates.get("USD"), Some(&0.00198));
    }

    #[test]
    fn api_error_result_is_reported() {
        let body = r#"{ "result": "error", "error-type": "invalid-key" }"#;
        assert_eq!(
            LiveRates::parse(body),
            Err(RateSourceError::Api("invalid-key".to_string()))
        );
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(matches!(
            LiveRates::parse("<html>busy</html>"),
            Err(RateSourceError::Malformed(_))
        ));
        assert!(matches!(
            LiveRates::parse(r#"{ "rates": { "USD": "cheap" } }"#),
            Err(RateSourceError::Malformed(_))
        ));
        assert!(matches!(
            LiveRates::parse(r#"{ "result": "success" }"#),
            Err(RateSourceError::Malformed(_))
        ));
    }

    #[test]
    fn default_client_uses_configured_endpoint() {
        let api = ExchangeRateApi::default();
        assert_eq!(api.api_base_url(), RATES.api_base_url);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use super::*;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        async fn server_answering(template: ResponseTemplate) -> MockServer {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/latest/KZT"))
                .respond_with(template)
                .expect(1)
                .mount(&mock_server)
                .await;
            mock_server
        }

        #[tokio::test]
        async fn v6_body_is_parsed() {
            let body = r#"{
                "result": "success",
                "base_code": "KZT",
                "conversion_rates": { "KZT": 1, "RUB": 0.1612, "USD": 0.00198 }
            }"#;
            let mock_server =
                server_answering(ResponseTemplate::new(200).set_body_string(body)).await;

            let live = ExchangeRateApi::new(mock_server.uri())
                .fetch_rates(Currency::Kzt)
                .await
                .unwrap();

            assert_eq!(live.rates.get("RUB"), Some(&0.1612));
            assert_eq!(live.rates.get("USD"), Some(&0.00198));
        }

        #[tokio::test]
        async fn server_error_status_is_a_failure() {
            let mock_server = server_answering(ResponseTemplate::new(500)).await;

            let result = ExchangeRateApi::new(mock_server.uri())
                .fetch_rates(Currency::Kzt)
                .await;

            assert_eq!(result, Err(RateSourceError::Status(500)));
        }

        #[tokio::test]
        async fn html_body_is_malformed() {
            let mock_server = server_answering(
                ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
            )
            .await;

            let result = ExchangeRateApi::new(mock_server.uri())
                .fetch_rates(Currency::Kzt)
                .await;

            assert!(matches!(result, Err(RateSourceError::Malformed(_))));
        }

        #[tokio::test]
        async fn request_targets_latest_for_base() {
            let mock_server = server_answering(
                ResponseTemplate::new(200).set_body_string(r#"{ "rates": { "USD": 0.002 } }"#),
            )
            .await;

            ExchangeRateApi::new(mock_server.uri())
                .fetch_rates(Currency::Kzt)
                .await
                .unwrap();

            let requests = mock_server.received_requests().await.unwrap_or_default();
            assert_eq!(requests.len(), 1);
            assert!(requests[0].url.path().ends_with("/latest/KZT"));
        }

        #[tokio::test]
        async fn unreachable_host_is_a_network_failure() {
            // Reserve a free port, then close it again
            let addr = std::net::TcpListener::bind("127.0.0.1:0")
                .and_then(|listener| listener.local_addr())
                .unwrap();

            let result = ExchangeRateApi::new(format!("http://{}", addr))
                .fetch_rates(Currency::Kzt)
                .await;

            assert!(matches!(result, Err(RateSourceError::Network(_))));
        }
    }
}
