use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LibraryError;

/// What kind of message a recording is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Wisdom,
    Story,
    Love,
    Advice,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Wisdom, Self::Story, Self::Love, Self::Advice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wisdom => "wisdom",
            Self::Story => "story",
            Self::Love => "love",
            Self::Advice => "advice",
        }
    }

    /// Parse a library filter value, where `all` means no category filter.
    pub fn parse_filter(s: &str) -> Result<Option<Self>, LibraryError> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| LibraryError::InvalidCategory(s.to_string()))
    }
}
