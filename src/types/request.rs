//! Request types for the WeDooGift API.
//!
//! All request types use the [`bon`](https://docs.rs/bon) crate for the
//! builder pattern.

use bon::Builder;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct as _;
use serde::{Serialize, Serializer};

use super::Amount;

/// Request body for creating a user in the company.
///
/// The caller contract is that the user does not already exist; the API is the
/// source of truth and rejects duplicates with a 4xx response.
///
/// # Example
///
/// ```
/// use wedoogift_client_sdk::types::request::CreateUserRequest;
///
/// let request = CreateUserRequest::builder()
///     .first_name("Jean")
///     .last_name("Dupont")
///     .email("jean.dupont@example.com")
///     .build();
///
/// assert_eq!(request.locale, "fr_FR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct CreateUserRequest {
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    /// Email address; also used as the account login.
    #[builder(into)]
    pub email: String,
    /// User locale (default: `fr_FR`).
    #[builder(into, default = String::from("fr_FR"))]
    pub locale: String,
}

impl Serialize for CreateUserRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CreateUserRequest", 5)?;
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("email", &self.email)?;
        // The API requires a login; it is always the email address.
        state.serialize_field("login", &self.email)?;
        state.serialize_field("locale", &self.locale)?;
        state.end()
    }
}

/// Input for [`Client::distribute`](crate::Client::distribute): a gift of
/// `value` minor units to a single user.
///
/// # Example
///
/// ```
/// use wedoogift_client_sdk::types::request::GiftRequest;
///
/// let request = GiftRequest::builder()
///     .reason_id(3)
///     .message("Joyeux anniversaire !")
///     .user_id(1528)
///     .value(50)
///     .build();
///
/// assert_eq!(request.currency, "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct GiftRequest {
    /// Platform-defined distribution reason identifier.
    pub reason_id: u64,
    /// Message shown to the beneficiary.
    #[builder(into)]
    pub message: String,
    /// Beneficiary user identifier.
    pub user_id: u64,
    /// Gift amount in the currency's minor units.
    pub value: i64,
    /// ISO 4217 currency code (default: `EUR`).
    #[builder(into, default = String::from("EUR"))]
    pub currency: String,
}

/// Wire body for `POST /company/{companyId}/distribution`.
///
/// Built by [`Client::distribute`](crate::Client::distribute) after a deposit
/// has been selected; `start_date` is the submission wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DistributionRequest {
    pub reason_id: u64,
    /// Identifier of the deposit the distribution draws from.
    pub deposit_id: u64,
    #[serde(serialize_with = "rfc3339_seconds")]
    pub start_date: DateTime<Utc>,
    #[builder(into)]
    pub message: String,
    pub beneficiaries: Vec<Beneficiary>,
}

/// A single recipient of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Beneficiary {
    pub user_id: u64,
    pub amount: Amount,
}

/// The API expects second-precision ISO 8601 with a numeric UTC offset
/// (`2024-05-01T12:00:00+00:00`), not the `Z` suffix chrono emits by default.
fn rfc3339_seconds<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Secs, false))
}
