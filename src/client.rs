//! Client for the WeDooGift API.
//!
//! This module provides the HTTP client for the WeDooGift corporate gifting
//! platform: user creation, deposit listing and gift distribution, all scoped
//! to the company the API key belongs to.
//!
//! # Example
//!
//! ```no_run
//! use wedoogift_client_sdk::Client;
//! use wedoogift_client_sdk::types::request::GiftRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = Client::new("my-api-key")?;
//! client.init().await?;
//!
//! let request = GiftRequest::builder()
//!     .reason_id(3)
//!     .message("Bravo pour le lancement !")
//!     .user_id(1528)
//!     .value(50)
//!     .build();
//!
//! client.distribute(&request).await?;
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{self, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::error::Error;
use crate::types::Amount;
use crate::types::request::{Beneficiary, CreateUserRequest, DistributionRequest, GiftRequest};
use crate::types::response::{CreatedUser, CurrentAccount, Deposit, DepositPage, DistributionTask};
use crate::{BASE_URL, Result};

/// Page size large enough to fetch every deposit in a single page.
const DEPOSIT_PAGE_SIZE: u64 = 1_000_000_000;

/// Status a freshly accepted distribution task reports.
const TASK_STATUS_STARTING: &str = "STARTING";

/// HTTP client for the WeDooGift API.
///
/// The client is constructed with an API key, then [`init`](Client::init)
/// resolves the company the key belongs to. After that the client is
/// read-only: every other operation takes `&self` and the resolved company id
/// scopes all requests. A cloned or shared client is safe to use concurrently
/// once initialized.
///
/// # API Base URL
///
/// [`Client::new`] targets the reference deployment at
/// [`BASE_URL`](crate::BASE_URL); use [`Client::with_host`] for another
/// deployment.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    company_id: Option<u64>,
}

impl Client {
    /// Creates a client for the reference deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be created.
    pub fn new<K: Into<SecretString>>(api_key: K) -> Result<Client> {
        Client::with_host(api_key, BASE_URL)
    }

    /// Creates a client for a custom host URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The company API key, sent verbatim as the
    ///   `Authorization` header of every request (the API does not use
    ///   `Bearer` tokens).
    /// * `host` - The base URL of the API deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or API key is invalid or the HTTP client
    /// cannot be created.
    pub fn with_host<K: Into<SecretString>>(api_key: K, host: &str) -> Result<Client> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("wedoogift_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let mut authorization = HeaderValue::from_str(api_key.expose_secret())?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let mut host = Url::parse(host)?;
        // Endpoint paths are appended textually, so the base path must end
        // with a slash.
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            host,
            client,
            company_id: None,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Company context resolved by [`init`](Client::init), if any.
    #[must_use]
    pub fn company_id(&self) -> Option<u64> {
        self.company_id
    }

    fn require_init(&self) -> Result<u64> {
        self.company_id
            .ok_or_else(|| Error::validation("client is not initialized, call init() first"))
    }

    /// Resolves the company context for the API key.
    ///
    /// Issues `GET /current` and stores `createdByCompany.id` as the company
    /// identifier every other operation is scoped to. Must complete
    /// successfully before any other operation; calling it again re-resolves
    /// the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not carry
    /// the owning company.
    pub async fn init(&mut self) -> Result<()> {
        let request = self
            .client
            .request(Method::GET, format!("{}current", self.host))
            .build()?;

        let account: CurrentAccount = crate::request(&self.client, request)
            .await
            .map_err(|e| e.context("Unable to initialize client"))?;

        self.company_id = Some(account.created_by_company.id);
        Ok(())
    }

    /// Creates a user in the company and returns its identifier.
    ///
    /// The user must not already exist; the API rejects duplicates with a 4xx
    /// response, which surfaces here as a [`Kind::Status`] error. The user's
    /// login is their email address.
    ///
    /// [`Kind::Status`]: crate::error::Kind::Status
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not initialized or the request
    /// fails; failures carry the context `Unable to add user`.
    pub async fn add_user(&self, request: &CreateUserRequest) -> Result<u64> {
        let company_id = self.require_init()?;

        let http_request = self
            .client
            .request(
                Method::POST,
                format!("{}company/{company_id}/user", self.host),
            )
            .json(request)
            .build()?;

        let user: CreatedUser = crate::request(&self.client, http_request)
            .await
            .map_err(|e| e.context("Unable to add user"))?;

        Ok(user.id)
    }

    /// Lists the company's deposits that hold a balance, in server order.
    ///
    /// The API is asked for a single oversized page, so the result covers
    /// every deposit. Deposits without a balance are always excluded; when
    /// `min_value` is given, only deposits whose balance is at least
    /// `min_value` minor units are kept. An empty result is not an error.
    ///
    /// The server documents no ordering guarantee, so callers relying on
    /// "first deposit" semantics (as [`distribute`](Client::distribute) does)
    /// are at the mercy of server-side ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not initialized, the request fails,
    /// or the response body does not carry a deposit list; failures carry the
    /// context `Unable to list deposits`.
    pub async fn list_deposits(&self, min_value: Option<i64>) -> Result<Vec<Deposit>> {
        let company_id = self.require_init()?;

        let request = self
            .client
            .request(
                Method::GET,
                format!(
                    "{}company/{company_id}/deposit?page=0&size={DEPOSIT_PAGE_SIZE}",
                    self.host
                ),
            )
            .build()?;

        let page: DepositPage = crate::request(&self.client, request)
            .await
            .map_err(|e| e.context("Unable to list deposits"))?;

        Ok(page
            .content
            .into_iter()
            .filter(|deposit| match (&deposit.balance, min_value) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(balance), Some(min)) => balance.minor_units() >= min,
            })
            .collect())
    }

    /// Distributes a gift to a user from the first deposit with sufficient
    /// balance.
    ///
    /// Selection is first-fit in server order: the deposit list is filtered
    /// by the gift value and the first match is drawn from, regardless of how
    /// much balance it leaves over. The distribution starts immediately
    /// (`startDate` is the current time) and is accepted by the platform as
    /// an asynchronous task; this method only checks that the task reports
    /// `STARTING` and never polls for completion.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Validation`] error if no deposit has sufficient
    /// balance (no distribution request is sent in that case) or if the task
    /// reports any status other than `STARTING`. Transport and HTTP failures
    /// carry the context `Unable to distribute`.
    ///
    /// [`Kind::Validation`]: crate::error::Kind::Validation
    pub async fn distribute(&self, request: &GiftRequest) -> Result<()> {
        let company_id = self.require_init()?;

        let deposits = self.list_deposits(Some(request.value)).await?;
        let Some(deposit) = deposits.first() else {
            return Err(Error::validation(
                "Unable to distribute: no deposit with sufficient balance",
            ));
        };

        let body = DistributionRequest::builder()
            .reason_id(request.reason_id)
            .deposit_id(deposit.id)
            .start_date(Utc::now())
            .message(request.message.clone())
            .beneficiaries(vec![
                Beneficiary::builder()
                    .user_id(request.user_id)
                    .amount(
                        Amount::builder()
                            .value(request.value.to_string())
                            .currency(request.currency.clone())
                            .build(),
                    )
                    .build(),
            ])
            .build();

        let http_request = self
            .client
            .request(
                Method::POST,
                format!("{}company/{company_id}/distribution", self.host),
            )
            .json(&body)
            .build()?;

        let task: DistributionTask = crate::request(&self.client, http_request)
            .await
            .map_err(|e| e.context("Unable to distribute"))?;

        if task.status != TASK_STATUS_STARTING {
            return Err(Error::validation(
                "Unable to distribute: task status is not STARTING",
            ));
        }

        Ok(())
    }
}
