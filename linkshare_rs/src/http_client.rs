// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::client::Result;
use async_trait::async_trait;
use bytes::Bytes;
use linkshare_base::error::{ErrorCode, LinkShareError};
use linkshare_base::{invalid_argument, unknown};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// A fully formed request to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }
}

/// Performs requests against the provider.
///
/// Returns the raw body of a successful response. Authentication, timeouts and connection
/// handling belong to the implementation.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Bytes>;
}

/// Request executor on top of reqwest.
pub struct HttpClient {
    client: reqwest::Client,
}

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MASHERY_ERROR_HEADER: &str = "x-mashery-error-code";

impl HttpClient {
    pub fn new(api_token: &str, timeout: Duration, verify_ssl: bool) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if !api_token.is_empty() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_token))
                .map_err(|_| invalid_argument!("API token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .map_err(|e| unknown!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<Bytes> {
        debug!("{} {}", request.method, request.url);

        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let mut builder = self
            .client
            .request(method.clone(), url.as_str())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        if response.status().is_success() {
            return response.bytes().await.map_err(map_transport_error);
        }

        let err = error_from_response(response).await;
        warn!("{} {} failed: {}", method, url, err);
        Err(err)
    }
}

fn map_transport_error(error: reqwest::Error) -> LinkShareError {
    if error.is_connect() {
        LinkShareError::new(ErrorCode::ConnectionError, &error.to_string())
    } else if error.is_timeout() {
        LinkShareError::new(ErrorCode::Timeout, &error.to_string())
    } else {
        unknown!("{}", error)
    }
}

async fn error_from_response(response: Response) -> LinkShareError {
    let status = response.status();
    let header_message = response
        .headers()
        .get(MASHERY_ERROR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let body = response.text().await.unwrap_or_default();

    let message = message_from_body(&body)
        .or(header_message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
    LinkShareError::new(ErrorCode::from(status), &message)
}

/// The provider reports errors in a few different JSON shapes.
fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["errorMessage", "message", "msg"] {
        if let Some(message) = value.get(key).and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }

    value
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|error| {
            error
                .get("description")
                .or_else(|| error.get("msg"))
                .and_then(Value::as_str)
        })
        .next()
        .map(|message| message.to_string())
}
