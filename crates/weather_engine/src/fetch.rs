use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use weather_core::{City, ClientData};
use weather_logging::{weather_debug, weather_info};

use crate::{FailureKind, FetchError};

pub const DEFAULT_POSITION_URL: &str = "https://ipinfo.io/json";
pub const DEFAULT_CATALOG_URL: &str = "https://geo-weather-json.herokuapp.com/db";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub position_url: String,
    /// Appended as `?token=` to the position request when set.
    pub position_token: Option<String>,
    pub catalog_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            position_url: DEFAULT_POSITION_URL.to_string(),
            position_token: None,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// Remote source of the client position and the city catalog.
///
/// Each call is a single request; failures are returned, never retried.
#[async_trait::async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_position(&self) -> Result<ClientData, FetchError>;
    async fn fetch_catalog(&self) -> Result<Vec<City>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    cities: Vec<City>,
}

#[derive(Debug, Clone)]
pub struct ReqwestWeatherSource {
    settings: FetchSettings,
}

impl ReqwestWeatherSource {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<T, FetchError> {
        let client = self.build_client()?;
        weather_debug!("GET {}", url);

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::InvalidPayload, err.to_string()))
    }
}

#[async_trait::async_trait]
impl WeatherSource for ReqwestWeatherSource {
    async fn fetch_position(&self) -> Result<ClientData, FetchError> {
        let mut url = parse_url(&self.settings.position_url)?;
        if let Some(token) = &self.settings.position_token {
            url.query_pairs_mut().append_pair("token", token);
        }
        let client: ClientData = self.get_json(url).await?;
        weather_info!("position resolved to {:?}", client.city);
        Ok(client)
    }

    async fn fetch_catalog(&self) -> Result<Vec<City>, FetchError> {
        let url = parse_url(&self.settings.catalog_url)?;
        let payload: CatalogPayload = self.get_json(url).await?;
        weather_info!("catalog fetched with {} cities", payload.cities.len());
        Ok(payload.cities)
    }
}

fn parse_url(raw: &str) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse(raw)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
