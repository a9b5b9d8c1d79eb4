//! HTTP client and configuration.

mod http;
mod session;

pub use http::{
    ApiRequest, HttpConfig, HttpTransport, RawResponse, Transport, API_VERSION, DEFAULT_BASE_URL,
    USER_AGENT,
};
pub use session::Session;

use std::sync::Arc;

use reqwest::Method;

use crate::api::{AuthApi, ForumApi, LoginOutcome, PostApi, SearchApi, ThreadApi, UserApi};
use crate::error::Result;

/// Builder for creating a LoadingClient.
pub struct LoadingClientBuilder {
    config: HttpConfig,
    credentials: Option<(String, String)>,
    session: Option<Session>,
    transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for LoadingClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingClientBuilder")
            .field("config", &self.config)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|(email, _)| email),
            )
            .field("session", &self.session)
            .finish()
    }
}

impl Default for LoadingClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: HttpConfig::default(),
            credentials: None,
            session: None,
            transport: None,
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.custom_user_agent = Some(ua.into());
        self
    }

    /// Set login credentials for the authentication bootstrap performed by
    /// [`connect`](Self::connect).
    pub fn credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((email.into(), password.into()));
        self
    }

    /// Use a previously captured session instead of logging in.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Use a custom transport instead of the reqwest default.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    fn take_transport(&mut self) -> Result<Arc<dyn Transport>> {
        match self.transport.take() {
            Some(transport) => Ok(transport),
            None => Ok(Arc::new(HttpTransport::new()?)),
        }
    }

    /// Build the client without performing any network call.
    pub fn build(mut self) -> Result<LoadingClient> {
        let transport = self.take_transport()?;

        Ok(LoadingClient {
            inner: Arc::new(ClientInner {
                transport,
                config: self.config,
                session: self.session,
            }),
        })
    }

    /// Build the client, performing the login bootstrap when credentials
    /// were supplied.
    ///
    /// A rejected login leaves the client unauthenticated rather than
    /// failing construction; transport failures still surface as errors.
    /// When either credential is absent or empty, no request is made.
    pub async fn connect(mut self) -> Result<LoadingClient> {
        let transport = self.take_transport()?;
        let mut session = self.session;

        if session.is_none() {
            if let Some((email, password)) = &self.credentials {
                if !email.is_empty() && !password.is_empty() {
                    let bootstrap = Arc::new(ClientInner {
                        transport: transport.clone(),
                        config: self.config.clone(),
                        session: None,
                    });

                    match AuthApi::new(bootstrap).login(email, password).await? {
                        LoginOutcome::Granted(captured) => session = Some(captured),
                        LoginOutcome::Denied(err) => {
                            log::warn!("login rejected [{}]: {}", err.code, err.message);
                        }
                    }
                }
            }
        }

        Ok(LoadingClient {
            inner: Arc::new(ClientInner {
                transport,
                config: self.config,
                session,
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct ClientInner {
    pub transport: Arc<dyn Transport>,
    pub config: HttpConfig,
    pub session: Option<Session>,
}

impl ClientInner {
    fn request(
        &self,
        method: Method,
        api: &str,
        mut headers: Vec<(&'static str, String)>,
        form: Vec<(&'static str, String)>,
    ) -> Result<ApiRequest> {
        let url = self.config.resolve_url(api)?;
        headers.insert(0, ("User-Agent", self.config.user_agent().to_owned()));

        Ok(ApiRequest {
            method,
            url,
            headers,
            form,
            cookie: self.session.as_ref().map(Session::cookie_header),
        })
    }

    /// Execute a GET request.
    pub(crate) async fn get(
        &self,
        api: &str,
        headers: Vec<(&'static str, String)>,
    ) -> Result<RawResponse> {
        let request = self.request(Method::GET, api, headers, Vec::new())?;
        self.transport.send(request).await
    }

    /// Execute a form-encoded POST request.
    pub(crate) async fn post_form(
        &self,
        api: &str,
        form: Vec<(&'static str, String)>,
    ) -> Result<RawResponse> {
        let request = self.request(Method::POST, api, Vec::new(), form)?;
        self.transport.send(request).await
    }

    /// Execute a form-encoded PATCH request.
    pub(crate) async fn patch_form(
        &self,
        api: &str,
        form: Vec<(&'static str, String)>,
    ) -> Result<RawResponse> {
        let request = self.request(Method::PATCH, api, Vec::new(), form)?;
        self.transport.send(request).await
    }
}

/// Client for interacting with the Loading forum.
#[derive(Clone)]
pub struct LoadingClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl LoadingClient {
    /// Create a new client builder.
    pub fn builder() -> LoadingClientBuilder {
        LoadingClientBuilder::new()
    }

    /// Get the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.inner.clone())
    }

    /// Get the forum listing API.
    pub fn forums(&self) -> ForumApi {
        ForumApi::new(self.inner.clone())
    }

    /// Get the thread API.
    pub fn threads(&self) -> ThreadApi {
        ThreadApi::new(self.inner.clone())
    }

    /// Get the post API.
    pub fn posts(&self) -> PostApi {
        PostApi::new(self.inner.clone())
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.inner.clone())
    }

    /// Get the user API.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.inner.clone())
    }

    /// Check if the client holds a session.
    pub fn is_authenticated(&self) -> bool {
        self.inner.session.is_some()
    }

    /// Get the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.inner.session.as_ref()
    }
}

impl std::fmt::Debug for LoadingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}
