//! Thread API.

use std::sync::Arc;

use crate::api::{messages, paging, post};
use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::models::{ApiResponse, Category, EditorialPostType, Envelope, Listing, Post};

/// API for thread operations.
pub struct ThreadApi {
    client: Arc<ClientInner>,
}

impl ThreadApi {
    pub(crate) fn new(client: Arc<ClientInner>) -> Self {
        Self { client }
    }

    /// Fetch a thread's starting post plus one page of replies.
    pub fn get(&self, thread_id: impl Into<String>) -> ThreadBuilder {
        ThreadBuilder {
            client: self.client.clone(),
            thread_id: thread_id.into(),
            page: None,
        }
    }

    /// Fetch a thread and trim the payload down to its starting post and
    /// that post's author.
    ///
    /// The trim is a purely local transform: the requested post is looked
    /// up in `posts` and its author resolved by a first-match scan of
    /// `users`. A post whose author is not in the payload comes back with
    /// an empty user list.
    pub async fn starter(&self, thread_id: impl AsRef<str>) -> Result<ApiResponse<Listing>> {
        let thread_id = thread_id.as_ref();

        if thread_id.is_empty() {
            return Ok(ApiResponse::Envelope(Envelope::message_only(
                404,
                messages::empty_field("thread_id"),
            )));
        }

        let api = format!("posts/{}", thread_id);
        let response = self.client.get(&api, Vec::new()).await?;

        if response.status != 200 {
            return Ok(ApiResponse::Upstream(response.json()?));
        }

        let listing: Listing = response.json()?;
        let post = listing
            .post(thread_id)
            .cloned()
            .ok_or_else(|| Error::missing("post"))?;
        let author = listing.author_of(&post).cloned();

        let trimmed = Listing {
            posts: vec![post],
            users: author.into_iter().collect(),
        };

        Ok(ApiResponse::Envelope(Envelope::with_data(
            response.status,
            messages::OK,
            trimmed,
        )))
    }

    /// Create a new thread in a forum category.
    ///
    /// The category must name one of the two forum categories and an
    /// explicit post type must come from the editorial enumeration; both
    /// are rejected locally before any request. Without a post type the
    /// thread is created as a regular one.
    pub async fn create(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category_name: &str,
        post_type: Option<&str>,
    ) -> Result<ApiResponse<Post>> {
        let category = match category_name.parse::<Category>() {
            Ok(category) => category,
            Err(()) => {
                return Ok(ApiResponse::Envelope(Envelope::message_only(
                    400,
                    messages::INVALID_CATEGORY,
                )))
            }
        };

        let post_type = match post_type {
            Some(value) => match value.parse::<EditorialPostType>() {
                Ok(post_type) => post_type.as_str(),
                Err(()) => {
                    return Ok(ApiResponse::Envelope(Envelope::message_only(
                        400,
                        messages::INVALID_POST_TYPE,
                    )))
                }
            },
            None => "regular",
        };

        let form = vec![
            ("category", category.as_str().to_owned()),
            ("postType", post_type.to_owned()),
            ("title", title.into()),
            ("body", message.into()),
        ];

        let response = self.client.post_form("posts/", form).await?;

        if response.status == 201 {
            Ok(ApiResponse::Envelope(Envelope::with_data(
                201,
                messages::THREAD_CREATED,
                response.json()?,
            )))
        } else {
            Ok(ApiResponse::Upstream(response.json()?))
        }
    }

    /// Edit a thread's starting post.
    ///
    /// A thread is edited through the same endpoint as any post; only the
    /// success message differs.
    pub async fn edit(
        &self,
        thread_id: impl AsRef<str>,
        message: impl Into<String>,
    ) -> Result<ApiResponse<Post>> {
        let mut response = post::edit(&self.client, thread_id.as_ref(), message.into()).await?;

        if let ApiResponse::Envelope(envelope) = &mut response {
            if envelope.code == 200 {
                envelope.message = messages::THREAD_UPDATED.to_owned();
            }
        }

        Ok(response)
    }
}

/// Builder for thread retrieval.
pub struct ThreadBuilder {
    client: Arc<ClientInner>,
    thread_id: String,
    page: Option<i32>,
}

impl ThreadBuilder {
    /// Set the reply page. The first page is the default.
    pub fn page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<ApiResponse<Listing>> {
        if self.thread_id.is_empty() {
            return Ok(ApiResponse::Envelope(Envelope::message_only(
                404,
                messages::empty_field("thread_id"),
            )));
        }

        let mut headers = Vec::new();
        if let Some(header) = paging::header(self.page) {
            headers.push(header);
        }

        let api = format!("posts/{}", self.thread_id);
        let response = self.client.get(&api, headers).await?;

        if response.status != 200 {
            return Ok(ApiResponse::Upstream(response.json()?));
        }

        let listing: Listing = response.json()?;

        // The last element is the thread start when the id named a thread;
        // a missing title there means the id pointed at a reply.
        let (is_thread, replies) = match listing.posts.last() {
            Some(post) => (post.is_thread(), post.replies),
            None => return Err(Error::missing("posts")),
        };

        if !is_thread {
            return Ok(ApiResponse::Envelope(Envelope::message_only(
                response.status,
                messages::NOT_A_THREAD,
            )));
        }

        // The service happily serves the first page for any selector; mask
        // the data when the caller asked for a page that does not exist.
        // The code stays at the transport status here, unlike the category
        // listings.
        if let Some(page) = paging::selected(self.page) {
            let total = paging::total_reply_pages(replies);

            if page < 1 {
                return Ok(ApiResponse::Envelope(Envelope::with_data(
                    response.status,
                    messages::PAGE_TOO_LOW,
                    Listing::empty(),
                )));
            }

            if page > total as i32 {
                return Ok(ApiResponse::Envelope(Envelope::with_data(
                    response.status,
                    messages::PAGE_TOO_HIGH,
                    Listing::empty(),
                )));
            }
        }

        Ok(ApiResponse::Envelope(Envelope::with_data(
            response.status,
            messages::OK,
            listing,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, reply_json, thread_json, user_json, MockTransport};
    use pretty_assertions::assert_eq;

    fn thread_page(id: &str, replies: u32) -> serde_json::Value {
        serde_json::json!({
            "posts": [thread_json(id, "Spelmusik samplad", "other", replies, "author-1")],
            "users": [user_json("author-1", "Twiggy")]
        })
    }

    #[tokio::test]
    async fn test_empty_thread_id_makes_no_request() {
        let transport = MockTransport::new();

        let response = client(transport.clone())
            .threads()
            .get("")
            .send()
            .await
            .unwrap();

        assert_eq!(response.code(), 404);
        assert_eq!(response.message(), "\"thread_id\" is not allowed to be empty");
        assert_eq!(response.data(), None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_thread_success() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 0));

        let response = client(transport.clone())
            .threads()
            .get("t1")
            .send()
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "OK");
        assert_eq!(response.data().unwrap().posts[0].id, "t1");

        let requests = transport.requests();
        assert_eq!(requests[0].url.path(), "/v1/posts/t1");
        assert_eq!(requests[0].header("page"), None);
    }

    #[tokio::test]
    async fn test_page_header_forwarded_past_first_page() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 45));

        let response = client(transport.clone())
            .threads()
            .get("t1")
            .page(2)
            .send()
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "OK");
        assert_eq!(transport.requests()[0].header("page"), Some("2"));
    }

    #[tokio::test]
    async fn test_reply_id_is_not_a_thread() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            serde_json::json!({
                "posts": [reply_json("r1", "t1", "u1")],
                "users": [user_json("u1", "Kiki")]
            }),
        );

        let response = client(transport)
            .threads()
            .get("r1")
            .send()
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Exists, but was not a thread id");
        assert_eq!(response.data(), None);
    }

    #[tokio::test]
    async fn test_missing_thread_passes_body_through() {
        let transport = MockTransport::new();
        transport.push_json(
            404,
            serde_json::json!({"code": 404, "message": "Post does not exist"}),
        );

        let response = client(transport)
            .threads()
            .get("this_id_does_not_exist")
            .send()
            .await
            .unwrap();

        assert!(response.is_upstream());
        assert_eq!(response.code(), 404);
        assert_eq!(response.message(), "Post does not exist");
    }

    #[tokio::test]
    async fn test_page_below_range_masks_fetched_data() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 0));

        let response = client(transport)
            .threads()
            .get("t1")
            .page(-1)
            .send()
            .await
            .unwrap();

        // Code mirrors the transport status, not 404.
        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Page number too low");
        assert_eq!(response.data(), Some(&Listing::empty()));
    }

    #[tokio::test]
    async fn test_page_past_reply_count_masks_fetched_data() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 0));

        let response = client(transport)
            .threads()
            .get("t1")
            .page(2)
            .send()
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Page number too high");
        assert_eq!(response.data(), Some(&Listing::empty()));
    }

    #[tokio::test]
    async fn test_last_valid_page_is_served() {
        // 45 replies span two pages; page 2 exists, page 3 does not.
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 45));
        transport.push_json(200, thread_page("t1", 45));

        let api_client = client(transport);

        let response = api_client.threads().get("t1").page(2).send().await.unwrap();
        assert_eq!(response.message(), "OK");

        let response = api_client.threads().get("t1").page(3).send().await.unwrap();
        assert_eq!(response.message(), "Page number too high");
    }

    #[tokio::test]
    async fn test_page_zero_skips_range_check() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_page("t1", 0));

        let response = client(transport.clone())
            .threads()
            .get("t1")
            .page(0)
            .send()
            .await
            .unwrap();

        assert_eq!(response.message(), "OK");
        assert!(response.data().is_some());
        assert_eq!(transport.requests()[0].header("page"), None);
    }

    #[tokio::test]
    async fn test_starter_trims_to_post_and_author() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            serde_json::json!({
                "posts": [
                    reply_json("r1", "t1", "u2"),
                    thread_json("t1", "Hello", "games", 1, "u1")
                ],
                "users": [user_json("u2", "Replier"), user_json("u1", "Starter")]
            }),
        );

        let response = client(transport)
            .threads()
            .starter("t1")
            .await
            .unwrap();

        let listing = response.data().unwrap();
        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.posts[0].id, "t1");
        assert_eq!(listing.users.len(), 1);
        assert_eq!(listing.users[0].name, "Starter");
    }

    #[tokio::test]
    async fn test_starter_without_author_entry() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            serde_json::json!({
                "posts": [thread_json("t1", "Hello", "games", 0, "unknown-user")],
                "users": []
            }),
        );

        let response = client(transport)
            .threads()
            .starter("t1")
            .await
            .unwrap();

        let listing = response.data().unwrap();
        assert_eq!(listing.posts.len(), 1);
        assert!(listing.users.is_empty());
    }

    #[tokio::test]
    async fn test_create_thread_invalid_category_makes_no_request() {
        let transport = MockTransport::new();

        let response = client(transport.clone())
            .threads()
            .create("Hello", "My message", "invalid_category", None)
            .await
            .unwrap();

        assert_eq!(response.code(), 400);
        assert_eq!(response.message(), "Invalid forum category");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_thread_invalid_post_type_makes_no_request() {
        let transport = MockTransport::new();

        let response = client(transport.clone())
            .threads()
            .create("Hello", "My message", "other", Some("invalid_post_type"))
            .await
            .unwrap();

        assert_eq!(response.code(), 400);
        assert_eq!(response.message(), "Invalid post_type");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_thread_success() {
        let transport = MockTransport::new();
        transport.push_json(201, thread_json("t-new", "Hello", "other", 0, "u1"));

        let response = client(transport.clone())
            .threads()
            .create("Hello", "My message", "other", None)
            .await
            .unwrap();

        assert_eq!(response.code(), 201);
        assert_eq!(response.message(), "Thread created");
        assert_eq!(response.data().unwrap().id, "t-new");

        let requests = transport.requests();
        assert_eq!(requests[0].url.path(), "/v1/posts/");
        assert_eq!(
            requests[0].form,
            vec![
                ("category", "other".to_owned()),
                ("postType", "regular".to_owned()),
                ("title", "Hello".to_owned()),
                ("body", "My message".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_thread_validation_error_passthrough() {
        let transport = MockTransport::new();
        transport.push_json(
            400,
            serde_json::json!({
                "code": 400,
                "message": "Validation error",
                "errors": [
                    {
                        "field": "title",
                        "location": "body",
                        "messages": ["\"title\" is not allowed to be empty"],
                        "types": ["any.empty"]
                    }
                ]
            }),
        );

        let response = client(transport)
            .threads()
            .create("", "", "other", None)
            .await
            .unwrap();

        assert!(response.is_upstream());
        assert_eq!(response.code(), 400);
        assert_eq!(response.message(), "Validation error");
    }

    #[tokio::test]
    async fn test_edit_thread_relabels_success() {
        let transport = MockTransport::new();
        transport.push_json(200, thread_json("t1", "Hello", "other", 0, "u1"));

        let response = client(transport.clone())
            .threads()
            .edit("t1", "updated message")
            .await
            .unwrap();

        assert_eq!(response.code(), 200);
        assert_eq!(response.message(), "Thread updated");

        let requests = transport.requests();
        assert_eq!(requests[0].method, reqwest::Method::PATCH);
        assert_eq!(requests[0].url.path(), "/v1/posts/t1");
    }

    #[tokio::test]
    async fn test_edit_thread_failure_keeps_upstream_body() {
        let transport = MockTransport::new();
        transport.push_json(
            404,
            serde_json::json!({"code": 404, "message": "Post does not exist"}),
        );

        let response = client(transport)
            .threads()
            .edit("non_existing_thread_id", "new updated message")
            .await
            .unwrap();

        assert!(response.is_upstream());
        assert_eq!(response.message(), "Post does not exist");
    }

    #[tokio::test]
    async fn test_edit_thread_empty_message_keeps_validation_label() {
        let transport = MockTransport::new();

        let response = client(transport.clone())
            .threads()
            .edit("existing_thread_id", "")
            .await
            .unwrap();

        assert_eq!(response.code(), 400);
        assert_eq!(response.message(), "\"message\" is not allowed to be empty");
        assert!(transport.requests().is_empty());
    }
}
