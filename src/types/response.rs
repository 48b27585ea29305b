//! Response types for the WeDooGift API.
//!
//! Each endpoint's body is parsed into one of these structs; a body that does
//! not match the expected shape surfaces as a
//! [`Kind::Response`](crate::error::Kind::Response) error rather than being
//! navigated field by field.

use bon::Builder;
use serde::Deserialize;

/// Response from `GET /current`: the account the API key belongs to.
///
/// Only the owning company is of interest; everything else in the body is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CurrentAccount {
    /// Company that owns the API key; scopes all subsequent calls.
    pub created_by_company: CompanyRef,
}

/// Reference to a company by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct CompanyRef {
    pub id: u64,
}

/// Response from `POST /company/{companyId}/user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct CreatedUser {
    /// Identifier of the newly created user.
    pub id: u64,
}

/// One page of deposits from `GET /company/{companyId}/deposit`.
///
/// The client always requests a single oversized page, so `content` holds
/// every deposit the company has.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct DepositPage {
    pub content: Vec<Deposit>,
}

/// A funding pool holding a balance from which distributions are drawn.
///
/// Fetched fresh on every listing call, never cached. Deposits without a
/// balance do exist in API responses (e.g. expired pools) and are filtered out
/// by [`Client::list_deposits`](crate::Client::list_deposits).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Deposit {
    pub id: u64,
    #[serde(default)]
    pub balance: Option<Balance>,
}

/// Remaining balance of a deposit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Balance {
    /// Integer amount in minor units, carried as a string by the API.
    #[builder(into)]
    pub value: String,
    /// ISO 4217 currency code.
    #[builder(into)]
    pub currency: String,
}

impl Balance {
    /// Balance value parsed as an integer amount of minor units.
    ///
    /// A non-numeric value parses as 0, so such deposits never satisfy a
    /// positive minimum-balance filter.
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.value.parse().unwrap_or(0)
    }
}

/// Response from `POST /company/{companyId}/distribution`.
///
/// The platform runs distributions asynchronously; a freshly accepted task
/// reports `STARTING`. Only the status is inspected, the task is never polled
/// for completion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct DistributionTask {
    #[builder(into)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deposit_without_balance_deserializes() {
        let deposit: Deposit =
            serde_json::from_value(json!({"id": 2})).expect("deserialization failed");

        assert_eq!(deposit.id, 2);
        assert!(deposit.balance.is_none());
    }

    #[test]
    fn balance_minor_units_parses_numeric_string() {
        let balance = Balance::builder().value("50").currency("EUR").build();
        assert_eq!(balance.minor_units(), 50);
    }

    #[test]
    fn balance_minor_units_treats_garbage_as_zero() {
        let balance = Balance::builder().value("fifty").currency("EUR").build();
        assert_eq!(balance.minor_units(), 0);
    }

    #[test]
    fn current_account_extracts_company_id() {
        let account: CurrentAccount = serde_json::from_value(json!({
            "id": 9,
            "name": "demo account",
            "createdByCompany": {"id": 42, "name": "ACME"}
        }))
        .expect("deserialization failed");

        assert_eq!(account.created_by_company.id, 42);
    }

    #[test]
    fn deposit_page_rejects_non_array_content() {
        let result: Result<DepositPage, _> =
            serde_json::from_value(json!({"content": "oops"}));

        assert!(result.is_err(), "non-array content must not deserialize");
    }
}
