//! Listing payloads.

use serde::{Deserialize, Serialize};

use super::{Post, User};

/// A page of posts plus the users they reference.
///
/// The two collections are parallel but not joined: a post's `userId` is
/// not guaranteed to have a matching entry in `users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Posts on this page.
    pub posts: Vec<Post>,
    /// Users referenced by the posts.
    pub users: Vec<User>,
}

impl Listing {
    /// An empty listing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the page holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Find a post by ID.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Find the author of a post by scanning the user collection.
    /// First match wins.
    pub fn author_of(&self, post: &Post) -> Option<&User> {
        self.users.iter().find(|u| u.id == post.user_id)
    }
}
