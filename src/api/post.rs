//! Post API.

use std::sync::Arc;

use crate::api::messages;
use crate::client::ClientInner;
use crate::error::Result;
use crate::models::{ApiResponse, Envelope, Listing, Post};

/// API for post operations.
pub struct PostApi {
    client: Arc<ClientInner>,
}

impl PostApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Fetch a single post's payload.
    pub async fn get(&self, post_id: impl AsRef<str>) -> Result<ApiResponse<Listing>> {
        let post_id = post_id.as_ref();

        if post_id.is_empty() {
            return Ok(ApiResponse::Envelope(Envelope::message_only(
                404,
                messages::empty_field("post_id"),
            )));
        }

        let api = format!("posts/{}", post_id);
        let response = self.client.get(&api, Vec::new()).await?;

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

    /// Create a new post in a thread.
    ///
    /// Message emptiness is left for the service to judge; only the thread
    /// id is checked locally.
    pub async fn create(
        &self,
        thread_id: impl AsRef<str>,
        message: impl Into<String>,
    ) -> Result<ApiResponse<Post>> {
        let thread_id = thread_id.as_ref();

        if thread_id.is_empty() {
            return Ok(ApiResponse::Envelope(Envelope::message_only(
                400,
                messages::empty_field("thread_id"),
            )));
        }

        let api = format!("posts/{}", thread_id);
        let form = vec![("body", message.into())];
        let response = self.client.post_form(&api, form).await?;

        if response.status == 201 {
            Ok(ApiResponse::Envelope(Envelope::with_data(
                201,
                messages::POST_CREATED,
                response.json()?,
            )))
        } else {
            Ok(ApiResponse::Upstream(response.json()?))
        }
    }

    /// Edit an existing post, replacing its body.
    pub async fn edit(
        &self,
        post_id: impl AsRef<str>,
        message: impl Into<String>,
    ) -> Result<ApiResponse<Post>> {
        edit(&self.client, post_id.as_ref(), message.into()).await
    }
}

/// The edit flow, shared with thread editing.
pub(crate) async fn edit(
    client: &ClientInner,
    post_id: &str,
    message: String,
) -> Result<ApiResponse<Post>> {
    if message.is_empty() {
        return Ok(ApiResponse::Envelope(Envelope::message_only(
            400,
            messages::empty_field("message"),
        )));
    }

    let api = format!("posts/{}", post_id);
    let form = vec![("body", message)];
    let response = client.patch_form(&api, form).await?;

    if response.status == 200 {
        Ok(ApiResponse::Envelope(Envelope::with_data(
            200,
            messages::POST_UPDATED,
            response.json()?,
        )))
    } else {
        Ok(ApiResponse::Upstream(response.json()?))
    }
}
