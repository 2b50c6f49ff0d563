//! REST implementation of the source platform
//!
//! Talks to a BigCommerce-style v2 API: collection endpoints under
//! `{base_url}/stores/{store_hash}/v2`, authenticated with
//! `X-Auth-Client`/`X-Auth-Token` headers. Connection bootstrap pings the
//! `/time` endpoint and fails fast when the store is unreachable or the
//! credentials are bad.

use crate::adapters::platform::client::SourcePlatform;
use crate::config::PlatformConfig;
use crate::domain::{OrderId, PlatformError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// REST client for the source platform's order API
pub struct RestPlatform {
    http: reqwest::Client,
    api_root: String,
}

impl RestPlatform {
    /// Creates a client without contacting the platform
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable (bad URL, header
    /// material that is not valid ASCII).
    pub fn new(config: &PlatformConfig) -> Result<Self> {
        let api_root = format!(
            "{}/stores/{}/v2",
            config.base_url.trim_end_matches('/'),
            config.store_hash
        );
        url::Url::parse(&api_root).map_err(|e| {
            PlatformError::ConnectionFailed(format!("Invalid platform URL {api_root}: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Auth-Client",
            HeaderValue::from_str(&config.client_id).map_err(|_| {
                PlatformError::AuthenticationFailed("client_id is not a valid header".to_string())
            })?,
        );
        let mut token = HeaderValue::from_str(config.auth_token.expose_secret().as_ref())
            .map_err(|_| {
                PlatformError::AuthenticationFailed("auth_token is not a valid header".to_string())
            })?;
        token.set_sensitive(true);
        headers.insert("X-Auth-Token", token);
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()
            .map_err(|e| PlatformError::ConnectionFailed(e.to_string()))?;

        Ok(Self { http, api_root })
    }

    /// Creates a client and validates connectivity with a `/time` ping
    pub async fn connect(config: &PlatformConfig) -> Result<Self> {
        let platform = Self::new(config)?;
        platform.ping().await?;
        tracing::info!(api_root = %platform.api_root, "Connected to source platform");
        Ok(platform)
    }

    /// Issues a GET and decodes the JSON body
    ///
    /// A 204 No Content collection response decodes to `Value::Null`.
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{}", self.api_root, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| classify_transport_error(&url, e))?;

        let status = response.status();
        match status {
            StatusCode::NO_CONTENT => Ok(Value::Null),
            s if s.is_success() => response.json::<Value>().await.map_err(|e| {
                PlatformError::InvalidResponse(format!("{url}: {e}")).into()
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                PlatformError::AuthenticationFailed(format!("{url}: HTTP {status}")).into(),
            ),
            StatusCode::NOT_FOUND => {
                Err(PlatformError::OrderNotFound(url).into())
            }
            s if s.is_client_error() => Err(PlatformError::ClientError {
                status: s.as_u16(),
                message: url,
            }
            .into()),
            s => Err(PlatformError::ServerError {
                status: s.as_u16(),
                message: url,
            }
            .into()),
        }
    }

    /// Decodes a collection response into a Vec of records
    fn into_records(body: Value, endpoint: &str) -> Result<Vec<Value>> {
        match body {
            Value::Null => Ok(Vec::new()),
            Value::Array(records) => Ok(records),
            other => Err(PlatformError::InvalidResponse(format!(
                "{endpoint}: expected a list, got {}",
                json_type_name(&other)
            ))
            .into()),
        }
    }
}

#[async_trait]
impl SourcePlatform for RestPlatform {
    async fn ping(&self) -> Result<()> {
        let body = self.get_json("/time", &[]).await.map_err(|e| {
            tracing::error!(error = %e, "Platform ping failed");
            e
        })?;
        if body.is_null() {
            return Err(
                PlatformError::InvalidResponse("empty response from /time".to_string()).into(),
            );
        }
        Ok(())
    }

    async fn list_orders(
        &self,
        limit: usize,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<Value>> {
        let mut query: Vec<(String, String)> = filters
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if limit > 0 {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let body = self.get_json("/orders", &query).await?;
        let orders = Self::into_records(body, "/orders")?;
        tracing::debug!(count = orders.len(), "Fetched orders from platform");
        Ok(orders)
    }

    async fn order_shipping_addresses(
        &self,
        order_id: &OrderId,
        limit: usize,
    ) -> Result<Vec<Value>> {
        let path = format!("/orders/{}/shipping_addresses", order_id.as_str());
        let mut query = Vec::new();
        if limit > 0 {
            query.push(("limit".to_string(), limit.to_string()));
        }

        let body = self.get_json(&path, &query).await?;
        Self::into_records(body, &path)
    }

    async fn order_line_items(&self, order_id: &OrderId) -> Result<Vec<Value>> {
        let path = format!("/orders/{}/products", order_id.as_str());
        let body = self.get_json(&path, &[]).await?;
        Self::into_records(body, &path)
    }

    fn base_url(&self) -> &str {
        &self.api_root
    }
}

fn classify_transport_error(url: &str, err: reqwest::Error) -> crate::domain::ImportError {
    if err.is_timeout() {
        PlatformError::Timeout(url.to_string()).into()
    } else {
        PlatformError::ConnectionFailed(format!("{url}: {err}")).into()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
