//! Search API.

use std::sync::Arc;

use crate::api::messages;
use crate::client::ClientInner;
use crate::error::Result;
use crate::models::{ApiResponse, Envelope, Listing};

/// API for content search.
pub struct SearchApi {
    client: Arc<ClientInner>,
}

impl SearchApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Search posts matching a query.
    ///
    /// An empty query is not rejected locally; the service answers it with
    /// a validation error body, passed through as-is.
    pub async fn query(&self, query: impl Into<String>) -> Result<ApiResponse<Listing>> {
        let form = vec![("query", query.into())];
        let response = self.client.post_form("search/", form).await?;

        if response.status != 200 {
            return Ok(ApiResponse::Upstream(response.json()?));
        }

        let listing: Listing = response.json()?;
        let message = if listing.is_empty() {
            messages::NO_RESULTS
        } else {
            messages::OK
        };

        Ok(ApiResponse::Envelope(Envelope::with_data(
            response.status,
            message,
            listing,
        )))
    }
}
