// --- File: crates/bookcheck_api/src/models.rs ---
//! Wire models for the booking service.
//!
//! Request types enforce their invariants at construction: a value that
//! exists is a value that is safe to send. Response types are plain
//! deserialization targets; their contents are checked by the verification
//! engine, not by the type system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Additional needs applied when the caller does not specify any.
pub const DEFAULT_ADDITIONAL_NEEDS: &str = "Breakfast";

/// Construction-time validation failures. These never reach the network.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Firstname cannot be empty")]
    EmptyFirstname,

    #[error("Lastname cannot be empty")]
    EmptyLastname,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Checkin date {checkin} cannot be after checkout date {checkout}")]
    CheckinAfterCheckout {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },
}

/// Checkin/checkout pair. Serializes as `yyyy-MM-dd` strings; both values
/// are UTC calendar dates with no time-of-day component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl BookingDates {
    /// Builds a date pair, rejecting a checkin after the checkout.
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, ValidationError> {
        if checkin > checkout {
            return Err(ValidationError::CheckinAfterCheckout { checkin, checkout });
        }
        Ok(Self { checkin, checkout })
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }
}

/// A booking as sent to (and echoed back by) the service.
/// Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    firstname: String,
    lastname: String,
    totalprice: i64,
    depositpaid: bool,
    bookingdates: BookingDates,
    #[serde(default = "default_additional_needs")]
    additionalneeds: String,
}

fn default_additional_needs() -> String {
    DEFAULT_ADDITIONAL_NEEDS.to_string()
}

impl BookingRequest {
    /// Builds a booking request. Names must be non-empty; the dates pair
    /// carries its own checkin/checkout invariant. `additionalneeds`
    /// defaults to "Breakfast" when absent.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        totalprice: i64,
        depositpaid: bool,
        bookingdates: BookingDates,
        additionalneeds: Option<String>,
    ) -> Result<Self, ValidationError> {
        let firstname = firstname.into();
        let lastname = lastname.into();
        if firstname.trim().is_empty() {
            return Err(ValidationError::EmptyFirstname);
        }
        if lastname.trim().is_empty() {
            return Err(ValidationError::EmptyLastname);
        }
        Ok(Self {
            firstname,
            lastname,
            totalprice,
            depositpaid,
            bookingdates,
            additionalneeds: additionalneeds.unwrap_or_else(default_additional_needs),
        })
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn totalprice(&self) -> i64 {
        self.totalprice
    }

    pub fn depositpaid(&self) -> bool {
        self.depositpaid
    }

    pub fn bookingdates(&self) -> &BookingDates {
        &self.bookingdates
    }

    pub fn additionalneeds(&self) -> &str {
        &self.additionalneeds
    }
}

/// A created or fetched booking together with its server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    bookingid: i64,
    booking: BookingRequest,
}

impl BookingResponse {
    pub fn bookingid(&self) -> i64 {
        self.bookingid
    }

    pub fn booking(&self) -> &BookingRequest {
        &self.booking
    }
}

/// Element of the `GET /booking` listing response.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct BookingId {
    pub bookingid: i64,
}

/// Query-parameter filters for the booking listing endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<NaiveDate>,
}

impl BookingFilter {
    pub fn by_name(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }

    pub fn by_dates(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self {
            checkin: Some(checkin),
            checkout: Some(checkout),
            ..Self::default()
        }
    }
}

/// Credentials for `POST /auth`. Both fields must be non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    username: String,
    password: String,
}

impl AuthRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// `POST /auth` response. The service answers 200 in both directions:
/// a `token` on success, a `reason` when the credentials are rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
