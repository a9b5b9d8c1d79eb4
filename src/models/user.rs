//! User models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user referenced from a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Site role ("user", "editor", ...).
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Account status ("active", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The authenticated user's own profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Site role.
    pub role: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
