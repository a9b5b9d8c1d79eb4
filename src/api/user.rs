//! User API.

use std::sync::Arc;

use crate::api::messages;
use crate::client::ClientInner;
use crate::error::Result;
use crate::models::{ApiResponse, Envelope, Profile};

/// API for user operations.
pub struct UserApi {
    client: Arc<ClientInner>,
}

impl UserApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Without a session the service answers with its own authorization
    /// error, passed through as-is.
    pub async fn profile(&self) -> Result<ApiResponse<Profile>> {
        let response = self.client.get("users/profile", Vec::new()).await?;

        if response.status == 200 {
            Ok(ApiResponse::Envelope(Envelope::with_data(
                response.status,
                messages::OK,
                response.json()?,
            )))
        } else {
            Ok(ApiResponse::Upstream(response.json()?))
        }
    }
}
