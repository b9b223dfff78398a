// --- File: crates/bookcheck_api/src/client.rs ---
//! HTTP client for the booking service.
//!
//! One method per endpoint. Mutating calls send `Content-Type:
//! application/json`; authenticated calls carry the session token as a
//! `Cookie: token=<token>` header, which is the only auth scheme the
//! service understands. Every request runs under the configured timeout.

use std::collections::BTreeMap;

use bookcheck_config::ApiConfig;
use http::StatusCode;
use reqwest::{header, Client};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::{AuthRequest, AuthResponse, BookingFilter, BookingId, BookingRequest, BookingResponse};

const AUTH_ENDPOINT: &str = "/auth";
const BOOKING_ENDPOINT: &str = "/booking";
const PING_ENDPOINT: &str = "/ping";
const TOKEN_PREFIX: &str = "token=";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Status and (when the call answered JSON) parsed body of the most recent
/// call, retained by the facade for step-level assertions.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

/// Client for the booking service REST API.
pub struct BookingApiClient {
    client: Client,
    base_url: String,
}

impl BookingApiClient {
    /// Creates a client from the target API configuration. The configured
    /// request timeout applies to every call made through this client.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = bookcheck_common::create_client(config.request_timeout_secs, true)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn booking_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, BOOKING_ENDPOINT, id)
    }

    /// `GET /ping`. Returns the raw status; the service signals "up"
    /// with 201, which the health scenario asserts literally.
    pub async fn ping(&self) -> Result<StatusCode, ApiError> {
        let response = self.client.get(self.url(PING_ENDPOINT)).send().await?;
        let status = response.status();
        info!("Ping status code: {}", status);
        Ok(status)
    }

    /// `POST /auth`. Returns the generated token, or `AuthRejected` when
    /// the service answers with a reason instead of a token.
    pub async fn create_token(&self, request: &AuthRequest) -> Result<String, ApiError> {
        info!("Requesting auth token for user: {}", request.username());
        let response = self
            .client
            .post(self.url(AUTH_ENDPOINT))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Auth response status code: {}", status);
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let auth: AuthResponse = response.json().await?;
        match auth.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::AuthRejected(
                auth.reason
                    .unwrap_or_else(|| "token missing in response".to_string()),
            )),
        }
    }

    /// `POST /booking`. Parses the created booking and rejects a
    /// non-positive assigned id outright.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingResponse, ApiError> {
        info!(
            "Creating booking for {} {}",
            request.firstname(),
            request.lastname()
        );
        let response = self
            .client
            .post(self.url(BOOKING_ENDPOINT))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let created: BookingResponse = response.json().await?;
        if created.bookingid() <= 0 {
            return Err(ApiError::InvalidBookingId(created.bookingid()));
        }
        info!("Created booking with ID: {}", created.bookingid());
        Ok(created)
    }

    /// `GET /booking/{id}`. The body is parsed only on 200; other statuses
    /// (e.g. 404 after a delete) are legitimate and carried in the status.
    pub async fn get_booking(&self, id: i64) -> Result<ApiResponse, ApiError> {
        debug!("Fetching booking with ID: {}", id);
        let response = self.client.get(self.booking_url(id)).send().await?;
        let status = response.status();
        let body = if status == StatusCode::OK {
            Some(response.json::<Value>().await?)
        } else {
            None
        };
        Ok(ApiResponse { status, body })
    }

    /// `PUT /booking/{id}` with the session token cookie.
    pub async fn update_booking(
        &self,
        id: i64,
        request: &BookingRequest,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        info!("Updating booking with ID: {}", id);
        let response = self
            .client
            .put(self.booking_url(id))
            .header(header::ACCEPT, CONTENT_TYPE_JSON)
            .header(header::COOKIE, format!("{}{}", TOKEN_PREFIX, token))
            .json(request)
            .send()
            .await?;
        self.into_api_response(response).await
    }

    /// `PATCH /booking/{id}`. `checkin`/`checkout` keys are nested under a
    /// `bookingdates` object before sending, matching the wire shape the
    /// service expects for partial date updates.
    pub async fn partial_update_booking(
        &self,
        id: i64,
        fields: &BTreeMap<String, String>,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        info!("Partially updating booking with ID: {}", id);
        let payload = nest_date_fields(fields);
        debug!("Partial update payload: {}", payload);
        let response = self
            .client
            .patch(self.booking_url(id))
            .header(header::COOKIE, format!("{}{}", TOKEN_PREFIX, token))
            .json(&payload)
            .send()
            .await?;
        self.into_api_response(response).await
    }

    /// `DELETE /booking/{id}`. The service answers 201 on success.
    pub async fn delete_booking(&self, id: i64, token: &str) -> Result<ApiResponse, ApiError> {
        info!("Deleting booking with ID: {}", id);
        let response = self
            .client
            .delete(self.booking_url(id))
            .header(header::ACCEPT, CONTENT_TYPE_JSON)
            .header(header::COOKIE, format!("{}{}", TOKEN_PREFIX, token))
            .send()
            .await?;
        Ok(ApiResponse {
            status: response.status(),
            body: None,
        })
    }

    /// `GET /booking` with optional name or date filters.
    pub async fn booking_ids(
        &self,
        filter: Option<&BookingFilter>,
    ) -> Result<Vec<BookingId>, ApiError> {
        let mut request = self.client.get(self.url(BOOKING_ENDPOINT));
        if let Some(filter) = filter {
            request = request.query(filter);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let ids: Vec<BookingId> = response.json().await?;
        debug!("Listing returned {} booking ids", ids.len());
        Ok(ids)
    }

    async fn into_api_response(&self, response: reqwest::Response) -> Result<ApiResponse, ApiError> {
        let status = response.status();
        debug!("Response status code: {}", status);
        let body = if status == StatusCode::OK {
            Some(response.json::<Value>().await?)
        } else {
            None
        };
        Ok(ApiResponse { status, body })
    }
}

/// Moves `checkin`/`checkout` entries under a `bookingdates` object and
/// leaves every other field at the top level.
fn nest_date_fields(fields: &BTreeMap<String, String>) -> Value {
    let mut top = serde_json::Map::new();
    let mut dates = serde_json::Map::new();
    for (field, value) in fields {
        if field == "checkin" || field == "checkout" {
            dates.insert(field.clone(), Value::String(value.clone()));
        } else {
            top.insert(field.clone(), Value::String(value.clone()));
        }
    }
    if !dates.is_empty() {
        top.insert("bookingdates".to_string(), Value::Object(dates));
    }
    Value::Object(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_fields_are_nested_under_bookingdates() {
        let mut fields = BTreeMap::new();
        fields.insert("checkin".to_string(), "2024-02-01".to_string());
        fields.insert("firstname".to_string(), "James".to_string());

        let payload = nest_date_fields(&fields);
        assert_eq!(
            payload,
            serde_json::json!({
                "firstname": "James",
                "bookingdates": {"checkin": "2024-02-01"}
            })
        );
    }

    #[test]
    fn payload_without_date_fields_has_no_bookingdates_object() {
        let mut fields = BTreeMap::new();
        fields.insert("additionalneeds".to_string(), "Dinner".to_string());

        let payload = nest_date_fields(&fields);
        assert_eq!(payload, serde_json::json!({"additionalneeds": "Dinner"}));
    }
}
