//! Forum listing API.
//!
//! Category pages and the editorial feed share one page-existence policy:
//! a selector below the valid range fails locally before any request, and
//! an empty result page is the only signal the service gives that the
//! selector ran past the end.

use std::sync::Arc;

use crate::api::{messages, paging};
use crate::client::ClientInner;
use crate::error::Result;
use crate::models::{Category, EditorialPostType, EditorialSort, Envelope, Listing};

/// API for forum listing operations.
pub struct ForumApi {
    client: Arc<ClientInner>,
}

impl ForumApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// List threads in a forum category.
    pub fn category(&self, category: Category) -> CategoryThreadsBuilder {
        CategoryThreadsBuilder {
            client: self.client.clone(),
            category,
            page: None,
        }
    }

    /// List threads in the games category.
    pub fn games(&self) -> CategoryThreadsBuilder {
        self.category(Category::Games)
    }

    /// List threads in the other category.
    pub fn other(&self) -> CategoryThreadsBuilder {
        self.category(Category::Other)
    }

    /// List the editorial feed.
    pub fn editorials(&self) -> EditorialsBuilder {
        EditorialsBuilder {
            client: self.client.clone(),
            page: None,
            post_type: None,
            sort: None,
        }
    }
}

/// Builder for category thread listings.
pub struct CategoryThreadsBuilder {
    client: Arc<ClientInner>,
    category: Category,
    page: Option<i32>,
}

impl CategoryThreadsBuilder {
    /// Set the page number. The first page is the default.
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Envelope<Listing>> {
        if paging::below_range(self.page) {
            return Ok(Envelope::with_data(
                404,
                messages::PAGE_TOO_LOW,
                Listing::empty(),
            ));
        }

        // The category rides as a header whose name and value are both the
        // category name.
        let name = self.category.as_str();
        let mut headers = vec![(name, name.to_owned())];
        if let Some(header) = paging::header(self.page) {
            headers.push(header);
        }

        let response = self.client.get("posts/", headers).await?;
        let listing: Listing = response.json()?;

        Ok(listing_envelope(response.status, listing))
    }
}

/// Builder for the editorial feed.
pub struct EditorialsBuilder {
    client: Arc<ClientInner>,
    page: Option<i32>,
    post_type: Option<String>,
    sort: Option<String>,
}

impl EditorialsBuilder {
    /// Set the page number. The first page is the default.
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    /// Filter by post type ("review", "opinion", "update", "podcast",
    /// "conversation"). Unrecognized values fall back to the default
    /// filter.
    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    /// Sort by "title" instead of date. Unrecognized values are ignored.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Envelope<Listing>> {
        if paging::below_range(self.page) {
            return Ok(Envelope::with_data(
                404,
                messages::PAGE_TOO_LOW,
                Listing::empty(),
            ));
        }

        let post_type = self
            .post_type
            .as_deref()
            .and_then(|value| value.parse::<EditorialPostType>().ok())
            .unwrap_or_default();

        let mut headers = vec![
            ("texts", "texts".to_owned()),
            ("post-type", post_type.as_str().to_owned()),
        ];

        if let Some(sort) = self
            .sort
            .as_deref()
            .and_then(|value| value.parse::<EditorialSort>().ok())
        {
            headers.push(("sort", sort.as_str().to_owned()));
        }

        if let Some(header) = paging::header(self.page) {
            headers.push(header);
        }

        let response = self.client.get("posts/", headers).await?;
        let listing: Listing = response.json()?;

        Ok(listing_envelope(response.status, listing))
    }
}

/// Apply the empty-page probe: no posts means the page ran past the end.
fn listing_envelope(status: u16, listing: Listing) -> Envelope<Listing> {
    if listing.is_empty() {
        Envelope::with_data(404, messages::PAGE_TOO_HIGH, listing)
    } else {
        Envelope::with_data(status, messages::OK, listing)
    }
}
