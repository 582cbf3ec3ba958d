//! Blocking client for the accounts resource: create, fetch, list, delete.
//!
//! Every call issues exactly one request. Remote failures are derived from
//! the response status alone.

use crate::account::ACCOUNT_TYPE;
use crate::error::{EnvelopeError, Error, Result};
use crate::models::{Account, AccountPage};
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1/organisation/accounts";
pub const BASE_URL_ENV: &str = "ACCOUNTAPI_BASE_URL";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

const ACCEPT_API_JSON: &str = "vnd.api+json";
const CONTENT_TYPE_API_JSON: &str = "application/vnd.api+json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolves the base address once: environment first, then `explicit`,
    /// then the built-in default.
    pub fn from_env(explicit: Option<&str>) -> Self {
        let env = std::env::var(BASE_URL_ENV).ok();
        Self::new(resolve_base_url(env.as_deref(), explicit))
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub fn resolve_base_url(env: Option<&str>, explicit: Option<&str>) -> String {
    [env, explicit]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base_url: Url,
    timeout: Duration,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder().build()?;
        Self::with_http_client(config, http)
    }

    /// Uses a caller-configured transport (proxies, TLS roots, pooling).
    pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|err| Error::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: config.base_url,
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Same client with another per-request deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    /// Rechecks type and attributes before sending; a decoded `Account`
    /// never went through `Account::new`.
    pub fn create(&self, account: &Account) -> Result<Account> {
        let account_type = account.data().account_type();
        if account_type != ACCOUNT_TYPE {
            return Err(EnvelopeError::InvalidAccountType {
                expected: ACCOUNT_TYPE,
                actual: account_type.to_string(),
            }
            .into());
        }
        account.attributes().validate()?;

        let url = self.base_url.clone();
        let body = serde_json::to_vec(account)?;
        let request = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_API_JSON)
            .body(body);
        let response = self.send("POST", &url, request)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(remote(Error::ResourceNotExists {
                resource: url.to_string(),
            })),
            StatusCode::CONFLICT => Err(remote(Error::DuplicateAccount {
                id: account.id().to_string(),
            })),
            status if !status.is_success() => Err(unexpected(status, &url)),
            _ => decode(response),
        }
    }

    pub fn fetch(&self, id: &str) -> Result<Account> {
        let account_id = parse_id(id)?;
        let url = self.account_url(&account_id)?;
        let response = self.send("GET", &url, self.http.get(url.clone()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(remote(Error::RecordNotExists { id: id.to_string() })),
            status if !status.is_success() => Err(unexpected(status, &url)),
            _ => decode(response),
        }
    }

    pub fn list(&self, page_number: u64, page_size: u64) -> Result<AccountPage> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page[number]", &page_number.to_string())
            .append_pair("page[size]", &page_size.to_string());
        let response = self.send("GET", &url, self.http.get(url.clone()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(remote(Error::ResourceNotExists {
                resource: url.to_string(),
            })),
            status if !status.is_success() => Err(unexpected(status, &url)),
            _ => decode(response),
        }
    }

    /// The service answers a stale version and a missing record the same
    /// way, so both surface as `InvalidVersion`.
    pub fn delete(&self, id: &str, version: u64) -> Result<()> {
        let account_id = parse_id(id)?;
        let mut url = self.account_url(&account_id)?;
        url.query_pairs_mut()
            .append_pair("version", &version.to_string());
        let response = self.send("DELETE", &url, self.http.delete(url.clone()))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::CONFLICT => {
                Err(remote(Error::InvalidVersion { version }))
            }
            status if !status.is_success() => Err(unexpected(status, &url)),
            _ => Ok(()),
        }
    }

    fn account_url(&self, id: &Uuid) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    fn send(&self, method: &str, url: &Url, request: RequestBuilder) -> Result<Response> {
        log::debug!("{method} {url}");
        let response = request
            .header(ACCEPT, ACCEPT_API_JSON)
            .timeout(self.timeout)
            .send()?;
        log::debug!("{method} {url} -> {}", response.status());
        Ok(response)
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|source| Error::InvalidId {
        value: id.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes()?;
    Ok(serde_json::from_slice(&body)?)
}

fn remote(err: Error) -> Error {
    log::warn!("{err}");
    err
}

fn unexpected(status: StatusCode, url: &Url) -> Error {
    remote(Error::UnexpectedStatus {
        status: status.as_u16(),
        resource: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_wins_over_explicit() {
        assert_eq!(
            resolve_base_url(Some("http://env:1/accounts"), Some("http://arg:2/accounts")),
            "http://env:1/accounts"
        );
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(
            resolve_base_url(Some("  "), Some("http://arg:2/accounts")),
            "http://arg:2/accounts"
        );
        assert_eq!(resolve_base_url(None, Some("")), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_base_url_fails_at_construction() {
        let err = Client::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));

        let err = Client::new(ClientConfig::new("mailto:ops@example.com")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn account_url_appends_id() {
        let client = Client::new(ClientConfig::default()).unwrap();
        let id = Uuid::parse_str("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").unwrap();
        assert_eq!(
            client.account_url(&id).unwrap().as_str(),
            "http://localhost:8080/v1/organisation/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"
        );

        let client = Client::new(ClientConfig::new("http://localhost:8080/accounts/")).unwrap();
        assert_eq!(
            client.account_url(&id).unwrap().as_str(),
            "http://localhost:8080/accounts/ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"
        );
    }

    #[test]
    fn malformed_id_is_rejected_before_any_request() {
        // Nothing listens on this port; an attempted request would be a transport error.
        let client = Client::new(ClientConfig::new("http://127.0.0.1:9/accounts")).unwrap();
        assert!(matches!(client.fetch("123"), Err(Error::InvalidId { .. })));
        assert!(matches!(client.delete("123", 0), Err(Error::InvalidId { .. })));
    }

    #[test]
    fn with_timeout_keeps_base_url() {
        let client = Client::new(ClientConfig::default()).unwrap();
        let short = client.with_timeout(Duration::from_millis(250));
        assert_eq!(short.timeout(), Duration::from_millis(250));
        assert_eq!(short.base_url(), client.base_url());
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }
}
