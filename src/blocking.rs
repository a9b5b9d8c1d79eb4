//! Blocking variant of the client.
//!
//! A thin facade over the async core: every method drives the matching
//! async operation to completion on a private runtime. No logic lives
//! here.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::client::{Session, Transport};
use crate::error::Result;
use crate::models::{ApiResponse, Envelope, Listing, Post, Profile};

fn runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Builder for the blocking client.
#[derive(Debug, Default)]
pub struct LoadingClientBuilder {
    inner: crate::LoadingClientBuilder,
}

impl LoadingClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            inner: crate::LoadingClientBuilder::new(),
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(ua);
        self
    }

    /// Set login credentials for [`connect`](Self::connect).
    pub fn credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.inner = self.inner.credentials(email, password);
        self
    }

    /// Use a previously captured session instead of logging in.
    pub fn session(mut self, session: Session) -> Self {
        self.inner = self.inner.session(session);
        self
    }

    /// Use a custom transport instead of the reqwest default.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the client without performing any network call.
    pub fn build(self) -> Result<LoadingClient> {
        Ok(LoadingClient {
            client: self.inner.build()?,
            runtime: runtime()?,
        })
    }

    /// Build the client, logging in when credentials were supplied.
    pub fn connect(self) -> Result<LoadingClient> {
        let runtime = runtime()?;
        let client = runtime.block_on(self.inner.connect())?;
        Ok(LoadingClient { client, runtime })
    }
}

/// Blocking client for interacting with the Loading forum.
pub struct LoadingClient {
    client: crate::LoadingClient,
    runtime: Runtime,
}

impl LoadingClient {
    /// Create a new client builder.
    pub fn builder() -> LoadingClientBuilder {
        LoadingClientBuilder::new()
    }

    /// Check if the client holds a session.
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    /// Get the current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.client.session()
    }

    /// List threads in the games category.
    pub fn get_games(&self, page: Option<i32>) -> Result<Envelope<Listing>> {
        let mut builder = self.client.forums().games();
        if let Some(page) = page {
            builder = builder.page(page);
        }
        self.runtime.block_on(builder.send())
    }

    /// List threads in the other category.
    pub fn get_other(&self, page: Option<i32>) -> Result<Envelope<Listing>> {
        let mut builder = self.client.forums().other();
        if let Some(page) = page {
            builder = builder.page(page);
        }
        self.runtime.block_on(builder.send())
    }

    /// List the editorial feed.
    pub fn get_editorials(
        &self,
        page: Option<i32>,
        post_type: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Envelope<Listing>> {
        let mut builder = self.client.forums().editorials();
        if let Some(page) = page {
            builder = builder.page(page);
        }
        if let Some(post_type) = post_type {
            builder = builder.post_type(post_type);
        }
        if let Some(sort) = sort {
            builder = builder.sort(sort);
        }
        self.runtime.block_on(builder.send())
    }

    /// Fetch a thread's starting post plus one page of replies.
    pub fn get_thread(&self, thread_id: &str, page: Option<i32>) -> Result<ApiResponse<Listing>> {
        let mut builder = self.client.threads().get(thread_id);
        if let Some(page) = page {
            builder = builder.page(page);
        }
        self.runtime.block_on(builder.send())
    }

    /// Fetch a thread trimmed down to its starting post and author.
    pub fn get_thread_starter(&self, thread_id: &str) -> Result<ApiResponse<Listing>> {
        self.runtime.block_on(self.client.threads().starter(thread_id))
    }

    /// Fetch a single post's payload.
    pub fn get_post(&self, post_id: &str) -> Result<ApiResponse<Listing>> {
        self.runtime.block_on(self.client.posts().get(post_id))
    }

    /// Search posts matching a query.
    pub fn search(&self, query: &str) -> Result<ApiResponse<Listing>> {
        self.runtime.block_on(self.client.search().query(query))
    }

    /// Fetch the authenticated user's profile.
    pub fn get_profile(&self) -> Result<ApiResponse<Profile>> {
        self.runtime.block_on(self.client.users().profile())
    }

    /// Create a new post in a thread.
    pub fn create_post(&self, thread_id: &str, message: &str) -> Result<ApiResponse<Post>> {
        self.runtime
            .block_on(self.client.posts().create(thread_id, message))
    }

    /// Edit an existing post.
    pub fn edit_post(&self, post_id: &str, message: &str) -> Result<ApiResponse<Post>> {
        self.runtime
            .block_on(self.client.posts().edit(post_id, message))
    }

    /// Create a new thread in a forum category.
    pub fn create_thread(
        &self,
        title: &str,
        message: &str,
        category_name: &str,
        post_type: Option<&str>,
    ) -> Result<ApiResponse<Post>> {
        self.runtime.block_on(
            self.client
                .threads()
                .create(title, message, category_name, post_type),
        )
    }

    /// Edit a thread's starting post.
    pub fn edit_thread(&self, thread_id: &str, message: &str) -> Result<ApiResponse<Post>> {
        self.runtime
            .block_on(self.client.threads().edit(thread_id, message))
    }
}

impl std::fmt::Debug for LoadingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::LoadingClient")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
