//! REST implementation of the order store
//!
//! Speaks to an order-management service that exposes header and line
//! resources: `GET/PUT /orders/{session}/{order}` and
//! `PUT /orders/{order}/lines/{line}`. An HTTP 2xx answer is a persisted
//! record, any other store answer is a rejection (`Ok(false)`); only
//! transport failures and credential problems surface as errors.

use crate::adapters::store::traits::OrderStore;
use crate::config::StoreConfig;
use crate::domain::{Result, SessionId, StoreError, TargetRecord};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use std::time::Duration;

/// REST client for the target order-management store
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
}

impl RestStore {
    /// Creates a client from configuration
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|e| {
            StoreError::ConnectionFailed(format!("Invalid store URL {base_url}: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
                    .map_err(|_| {
                        StoreError::AuthenticationFailed(
                            "api_key is not a valid header".to_string(),
                        )
                    })?;
            value.set_sensitive(true);
            headers.insert("Authorization", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Sends a record with PUT and classifies the answer
    async fn put_record(&self, path: &str, record: &TargetRecord) -> Result<bool> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        classify_write(&url, response.status())
    }

    fn record_field(record: &TargetRecord, field: &str) -> Result<String> {
        record
            .get(field)
            .map(str::to_string)
            .ok_or_else(|| StoreError::InvalidRecord(format!("missing '{field}' field")).into())
    }
}

#[async_trait]
impl OrderStore for RestStore {
    async fn exists(&self, session: &SessionId, order_number: &str) -> Result<bool> {
        let url = format!("{}/orders/{}/{}", self.base_url, session.as_str(), order_number);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        match response.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(StoreError::AuthenticationFailed(format!("{url}: HTTP 401/403")).into())
            }
            s => Err(StoreError::QueryFailed(format!("{url}: HTTP {s}")).into()),
        }
    }

    async fn create_order(&self, record: &TargetRecord) -> Result<bool> {
        let url = format!("{}/orders", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        classify_write(&url, response.status())
    }

    async fn update_order(&self, record: &TargetRecord) -> Result<bool> {
        let session = Self::record_field(record, "sessionid")?;
        let orderno = Self::record_field(record, "orderno")?;
        self.put_record(&format!("/orders/{session}/{orderno}"), record)
            .await
    }

    async fn save_line(&self, record: &TargetRecord) -> Result<bool> {
        let orderno = Self::record_field(record, "orderno")?;
        let linenbr = Self::record_field(record, "linenbr")?;
        self.put_record(&format!("/orders/{orderno}/lines/{linenbr}"), record)
            .await
    }

    fn backend_name(&self) -> &str {
        "rest"
    }
}

fn classify_write(url: &str, status: StatusCode) -> Result<bool> {
    match status {
        s if s.is_success() => Ok(true),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(StoreError::AuthenticationFailed(format!("{url}: HTTP {status}")).into())
        }
        s => {
            tracing::warn!(url, status = s.as_u16(), "Store rejected record");
            Ok(false)
        }
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> crate::domain::ImportError {
    if err.is_timeout() {
        StoreError::Timeout(url.to_string()).into()
    } else {
        StoreError::ConnectionFailed(format!("{url}: {err}")).into()
    }
}
