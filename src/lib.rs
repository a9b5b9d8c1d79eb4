//! Rust client library for the Loading forum.
//!
//! ```no_run
//! use rloading::LoadingClient;
//!
//! # async fn run() -> rloading::Result<()> {
//! let client = LoadingClient::builder()
//!     .credentials("email@example.com", "password")
//!     .connect()
//!     .await?;
//!
//! let games = client.forums().games().page(2).send().await?;
//! if let Some(listing) = games.data {
//!     println!("{} threads on page 2", listing.posts.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod blocking;
pub mod client;
pub mod error;
pub mod models;

// Re-export main types
pub use client::{
    HttpConfig, LoadingClient, LoadingClientBuilder, Session, Transport, DEFAULT_BASE_URL,
    USER_AGENT,
};
pub use error::{Error, Result};

// Re-export commonly used models
pub use models::{
    ApiResponse, Category, EditorialPostType, EditorialSort, Envelope, FieldError, Listing, Post,
    Profile, UpstreamError, User,
};

// Re-export API types
pub use api::{
    AuthApi, CategoryThreadsBuilder, EditorialsBuilder, ForumApi, LoginOutcome, PostApi,
    SearchApi, ThreadApi, ThreadBuilder, UserApi,
};
