//! Forum category and editorial filter enumerations.

use std::fmt;
use std::str::FromStr;

/// A forum category that threads can be created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The games category.
    Games,
    /// The catch-all category.
    Other,
}

impl Category {
    /// Get the API name of this category. Doubles as the request header
    /// name and value for category listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "games" => Ok(Category::Games),
            "other" => Ok(Category::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post type filter for the editorial feed.
///
/// `neRegular` is the feed's default filter. Plain "regular" is what
/// ordinary forum threads carry and is not part of this enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorialPostType {
    /// Everything except regular forum threads.
    #[default]
    NotRegular,
    /// Reviews.
    Review,
    /// Opinion pieces.
    Opinion,
    /// Site updates.
    Update,
    /// Podcast episodes.
    Podcast,
    /// Conversation pieces.
    Conversation,
}

impl EditorialPostType {
    /// Get the API parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorialPostType::NotRegular => "neRegular",
            EditorialPostType::Review => "review",
            EditorialPostType::Opinion => "opinion",
            EditorialPostType::Update => "update",
            EditorialPostType::Podcast => "podcast",
            EditorialPostType::Conversation => "conversation",
        }
    }
}

impl FromStr for EditorialPostType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neRegular" => Ok(EditorialPostType::NotRegular),
            "review" => Ok(EditorialPostType::Review),
            "opinion" => Ok(EditorialPostType::Opinion),
            "update" => Ok(EditorialPostType::Update),
            "podcast" => Ok(EditorialPostType::Podcast),
            "conversation" => Ok(EditorialPostType::Conversation),
            _ => Err(()),
        }
    }
}

/// Sort order for the editorial feed. The feed sorts by date unless told
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorialSort {
    /// Sort by thread title.
    Title,
}

impl EditorialSort {
    /// Get the API parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorialSort::Title => "title",
        }
    }
}

impl FromStr for EditorialSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(EditorialSort::Title),
            _ => Err(()),
        }
    }
}
