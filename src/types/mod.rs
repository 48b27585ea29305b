//! Wire types for the WeDooGift API.
//!
//! Request bodies live in [`request`], response bodies in [`response`].
//! Monetary values on the wire are integer amounts carried as strings, the
//! currency alongside them as an ISO 4217 code.

pub mod request;
pub mod response;

use bon::Builder;
use serde::Serialize;

/// A monetary amount as the API represents it: an integer value carried as a
/// string plus an ISO 4217 currency code. Only ever sent, never received;
/// responses carry balances as [`response::Balance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[non_exhaustive]
pub struct Amount {
    /// Integer amount, stringified (e.g. `"50"`).
    #[builder(into)]
    pub value: String,
    /// ISO 4217 currency code (e.g. `"EUR"`).
    #[builder(into)]
    pub currency: String,
}
