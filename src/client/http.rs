//! HTTP configuration and the transport seam.

use async_trait::async_trait;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Result;

/// Default Loading API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.loading.se";

/// Versioned path prefix, appended to the base URL on every request.
pub const API_VERSION: &str = "v1";

/// User agent sent on every request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:91.0) Gecko/20100101 Firefox/91.0";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests.
    pub base_url: String,
    /// Custom user agent.
    pub custom_user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            custom_user_agent: None,
        }
    }
}

impl HttpConfig {
    /// The user agent to send.
    pub fn user_agent(&self) -> &str {
        self.custom_user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    /// Resolve a relative API path to a full versioned URL.
    pub fn resolve_url(&self, api: &str) -> Result<Url> {
        let url = Url::parse(&self.base_url)?
            .join(&format!("{}/", API_VERSION))?
            .join(api)?;
        Ok(url)
    }
}

/// A single request, fully assembled by the client.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Resolved request URL.
    pub url: Url,
    /// Custom headers, User-Agent included.
    pub headers: Vec<(&'static str, String)>,
    /// Form-encoded body pairs. Empty for GET requests.
    pub form: Vec<(&'static str, String)>,
    /// Session cookies rendered as a `Cookie` header value.
    pub cookie: Option<String>,
}

impl ApiRequest {
    /// Look up a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The raw outcome of one request.
///
/// The body is kept as bytes and decoded on demand; paths that never look
/// at the body (the login success path) never decode it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Transport status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Cookies set by the response.
    pub cookies: Vec<(String, String)>,
}

impl RawResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// The HTTP capability the client is built on.
///
/// One call maps to one request/response round trip. Implementations do
/// not retry, redirect-chase cookies, or otherwise reinterpret the
/// exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the raw response.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// Default transport backed by reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build the default transport.
    pub fn new() -> Result<Self> {
        let client = Client::builder().gzip(true).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        log::debug!("{} {}", request.method, request.url);

        let mut req = self.client.request(request.method, request.url);

        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }

        if let Some(cookie) = &request.cookie {
            req = req.header(COOKIE, cookie);
        }

        if !request.form.is_empty() {
            req = req.form(&request.form);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        let cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| {
                let raw = value.to_str().ok()?;
                let pair = raw.split(';').next()?;
                let (name, value) = pair.split_once('=')?;
                Some((name.trim().to_owned(), value.trim().to_owned()))
            })
            .collect();

        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            body,
            cookies,
        })
    }
}
