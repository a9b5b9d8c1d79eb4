//! Post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post on the Loading forum.
///
/// A thread start and a reply share the same wire shape; the presence of
/// `title` is what tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post ID.
    pub id: String,
    /// Thread title. Only present on thread-starting posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post body, markdown formatted.
    pub body: String,
    /// Forum category the thread lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cover image for editorial content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Post type ("regular", "review", "update", ...).
    pub post_type: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Parent post ID. Present on replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Author user ID.
    pub user_id: String,
    /// Number of replies to this post.
    pub replies: u32,
    /// Number of edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edits: Option<u32>,
    /// Timestamp of the latest edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_edit: Option<DateTime<Utc>>,
    /// Timestamp of the latest reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_reply: Option<DateTime<Utc>>,
    /// User ID of the latest replier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_reply_user_id: Option<String>,
}

impl Post {
    /// Check if this post starts a thread.
    pub fn is_thread(&self) -> bool {
        self.title.is_some()
    }

    /// Check if this post is a reply.
    pub fn is_reply(&self) -> bool {
        self.title.is_none()
    }
}
