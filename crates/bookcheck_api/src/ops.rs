// --- File: crates/bookcheck_api/src/ops.rs ---
//! Booking operations facade.
//!
//! Owns the per-scenario fixture state: the prepared booking request, the
//! id assigned at creation, and the last response. Steps mutate this state;
//! the verification engine only reads it back through [`BookingOps::fetch_current`].

use std::collections::BTreeMap;

use http::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{ApiResponse, BookingApiClient};
use crate::error::ApiError;
use crate::models::{BookingFilter, BookingRequest};

pub struct BookingOps {
    client: BookingApiClient,
    current_request: Option<BookingRequest>,
    booking_id: Option<i64>,
    last_response: Option<ApiResponse>,
}

impl BookingOps {
    pub fn new(client: BookingApiClient) -> Self {
        Self {
            client,
            current_request: None,
            booking_id: None,
            last_response: None,
        }
    }

    pub fn client(&self) -> &BookingApiClient {
        &self.client
    }

    /// Stages the request the next `create_booking` call will send.
    pub fn prepare_booking(&mut self, request: BookingRequest) {
        debug!(
            "Prepared booking request for {} {}",
            request.firstname(),
            request.lastname()
        );
        self.current_request = Some(request);
    }

    /// The request staged by `prepare_booking`, also the expected state
    /// for complete-booking verification.
    pub fn current_request(&self) -> Result<&BookingRequest, ApiError> {
        self.current_request
            .as_ref()
            .ok_or(ApiError::NoPreparedRequest)
    }

    /// The id assigned when the current booking was created.
    pub fn booking_id(&self) -> Result<i64, ApiError> {
        self.booking_id.ok_or(ApiError::NoCurrentBooking)
    }

    /// Status and body of the most recent call, when one was made.
    pub fn last_response(&self) -> Option<&ApiResponse> {
        self.last_response.as_ref()
    }

    /// Creates the prepared booking and retains the assigned id.
    pub async fn create_booking(&mut self) -> Result<i64, ApiError> {
        let request = self.current_request()?.clone();
        let created = self.client.create_booking(&request).await?;
        self.booking_id = Some(created.bookingid());
        self.last_response = Some(ApiResponse {
            status: StatusCode::OK,
            body: Some(serde_json::to_value(&created)?),
        });
        info!("Current booking ID is now: {}", created.bookingid());
        Ok(created.bookingid())
    }

    /// Fetches any booking by id, retaining the response.
    pub async fn get_booking(&mut self, id: i64) -> Result<&ApiResponse, ApiError> {
        let response = self.client.get_booking(id).await?;
        Ok(self.last_response.insert(response))
    }

    /// Fetches the current booking, retaining the response.
    pub async fn get_current(&mut self) -> Result<&ApiResponse, ApiError> {
        let id = self.booking_id()?;
        self.get_booking(id).await
    }

    /// Read-only fetch of the current booking's JSON representation, the
    /// callback the verification engine polls. Any status other than 200
    /// is a fatal failure here, never a mismatch.
    pub async fn fetch_current(&self) -> Result<Value, ApiError> {
        let id = self.booking_id()?;
        let response = self.client.get_booking(id).await?;
        match response.body {
            Some(body) if response.status == StatusCode::OK => Ok(body),
            _ => Err(ApiError::UnexpectedStatus {
                status: response.status.as_u16(),
                body: format!("fetching booking {} for verification", id),
            }),
        }
    }

    /// Full update of the current booking. The updated request becomes the
    /// new expected state.
    pub async fn update_current(
        &mut self,
        request: BookingRequest,
        token: &str,
    ) -> Result<StatusCode, ApiError> {
        let id = self.booking_id()?;
        let response = self.client.update_booking(id, &request, token).await?;
        let status = response.status;
        self.current_request = Some(request);
        self.last_response = Some(response);
        Ok(status)
    }

    /// Partial update of the current booking.
    pub async fn partial_update_current(
        &mut self,
        fields: &BTreeMap<String, String>,
        token: &str,
    ) -> Result<StatusCode, ApiError> {
        let id = self.booking_id()?;
        let response = self.client.partial_update_booking(id, fields, token).await?;
        let status = response.status;
        self.last_response = Some(response);
        Ok(status)
    }

    /// Deletes the current booking.
    pub async fn delete_current(&mut self, token: &str) -> Result<StatusCode, ApiError> {
        let id = self.booking_id()?;
        let response = self.client.delete_booking(id, token).await?;
        let status = response.status;
        self.last_response = Some(response);
        Ok(status)
    }

    /// Existence probe: a 200 on `GET /booking/{id}` means the booking is
    /// still there. Transport failures propagate instead of reading as
    /// "absent".
    pub async fn booking_exists(&self, id: i64) -> Result<bool, ApiError> {
        let response = self.client.get_booking(id).await?;
        Ok(response.status == StatusCode::OK)
    }

    /// Lists booking ids, optionally filtered.
    pub async fn list_ids(&self, filter: Option<&BookingFilter>) -> Result<Vec<i64>, ApiError> {
        let ids = self.client.booking_ids(filter).await?;
        Ok(ids.into_iter().map(|entry| entry.bookingid).collect())
    }
}
