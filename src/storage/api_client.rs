//! HTTP client for the webhook API
//!
//! One request per call: no retries, no request de-duplication, and no
//! timeout beyond the transport default. The API key, when configured, is
//! sent as `X-API-Key` on every request.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::RemoteSettings;
use crate::error::{TrackerError, TrackerResult};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL, e.g. `http://localhost:5678`.
    pub base_url: String,
    /// Static key for the `X-API-Key` header.
    pub api_key: Option<String>,
}

impl From<&RemoteSettings> for ApiClientConfig {
    fn from(settings: &RemoteSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
        }
    }
}

/// Blocking JSON client for the collection endpoints
pub struct ApiClient {
    http: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> TrackerResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn get(&self, path: &str) -> TrackerResult<Value> {
        self.execute(self.request(Method::GET, path), Method::GET, path)
    }

    pub fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> TrackerResult<Value> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(request, Method::GET, path)
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> TrackerResult<Value> {
        let request = self.request(Method::POST, path).json(body);
        self.execute(request, Method::POST, path)
    }

    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> TrackerResult<Value> {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute(request, Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> TrackerResult<Value> {
        self.execute(self.request(Method::DELETE, path), Method::DELETE, path)
    }

    /// Builder with the JSON content type and the API key attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send the request and decode the body.
    ///
    /// A response without a JSON content type decodes as an empty object.
    fn execute(&self, request: RequestBuilder, method: Method, path: &str) -> TrackerResult<Value> {
        debug!(%method, path, "API request");

        let response = request.send().map_err(|e| {
            warn!(%method, path, error = %e, "API request error");
            TrackerError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(%method, path, status = status.as_u16(), body = %body, "API request failed");
            return Err(TrackerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Ok(Value::Object(Map::new()));
        }

        let text = response.text()?;
        serde_json::from_str(&text).map_err(|e| {
            warn!(%method, path, error = %e, "API response is not valid JSON");
            TrackerError::Json(format!("Invalid response from {}: {}", path, e))
        })
    }
}

/// `true` for the placeholder a non-JSON response decodes to
pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().map(Map::is_empty).unwrap_or(false)
}
