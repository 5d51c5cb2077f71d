use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use memento_capture_core::{ArtifactMetadata, MediaArtifact};

use super::category::Category;
use super::error::LibraryError;

/// Someone who will receive a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Viewer {
    pub fn with_email(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
            phone: None,
        }
    }

    pub fn with_phone(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: Some(phone.into()),
        }
    }

    /// A name plus at least one way to reach them.
    pub fn is_valid(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        !self.name.trim().is_empty() && (present(&self.email) || present(&self.phone))
    }

    fn normalized(self) -> Self {
        let trim = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            name: self.name.trim().to_string(),
            email: trim(self.email),
            phone: trim(self.phone),
        }
    }
}

/// Drop incomplete viewer rows; fail when nobody is left.
fn valid_viewers(viewers: Vec<Viewer>) -> Result<Vec<Viewer>, LibraryError> {
    let viewers: Vec<Viewer> = viewers
        .into_iter()
        .filter(Viewer::is_valid)
        .map(Viewer::normalized)
        .collect();
    if viewers.is_empty() {
        return Err(LibraryError::NoViewers);
    }
    Ok(viewers)
}

fn check_delivery_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<(), LibraryError> {
    match date {
        Some(date) if date <= today => Err(LibraryError::DeliveryDateNotInFuture(date)),
        _ => Ok(()),
    }
}

/// Metadata entered when saving a recording.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveMessageRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub viewers: Vec<Viewer>,
}

impl SaveMessageRequest {
    pub fn new(title: impl Into<String>, viewers: Vec<Viewer>) -> Self {
        Self {
            title: title.into(),
            viewers,
            ..Default::default()
        }
    }

    /// Trim text fields, drop incomplete viewers and check the schedule.
    pub fn validate(self, today: NaiveDate) -> Result<Self, LibraryError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(LibraryError::MissingTitle);
        }
        let viewers = valid_viewers(self.viewers)?;
        check_delivery_date(self.delivery_date, today)?;

        Ok(Self {
            title,
            description: self.description.trim().to_string(),
            viewers,
            ..self
        })
    }
}

/// Partial edit of a saved message. `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub is_public: Option<bool>,
    /// `Some(None)` clears the delivery date.
    pub delivery_date: Option<Option<NaiveDate>>,
    pub viewers: Option<Vec<Viewer>>,
}

/// A recording persisted in a user's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMessage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prompt: Option<String>,
    pub category: Category,
    pub is_public: bool,
    pub delivery_date: Option<NaiveDate>,
    pub viewers: Vec<Viewer>,
    pub duration_label: String,
    pub created_at: String,
    pub artifact: ArtifactMetadata,
    pub video: Vec<u8>,
}

impl SavedMessage {
    /// Build a record from an already validated request, taking the artifact.
    pub(crate) fn from_parts(artifact: MediaArtifact, request: SaveMessageRequest) -> Self {
        let metadata = artifact.metadata();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            prompt: artifact.prompt.clone(),
            category: request.category,
            is_public: request.is_public,
            delivery_date: request.delivery_date,
            viewers: request.viewers,
            duration_label: format_duration(artifact.duration_secs),
            created_at: chrono::Utc::now().to_rfc3339(),
            artifact: metadata,
            video: artifact.bytes,
        }
    }

    /// Case-insensitive match on title or description, optionally limited to
    /// one category. A blank term matches everything.
    pub fn matches(&self, term: &str, category: Option<Category>) -> bool {
        if category.is_some_and(|c| c != self.category) {
            return false;
        }
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }

    pub(crate) fn apply(
        &mut self,
        update: MessageUpdate,
        today: NaiveDate,
    ) -> Result<(), LibraryError> {
        let title = match update.title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(LibraryError::MissingTitle);
                }
                Some(title)
            }
            None => None,
        };
        let viewers = update.viewers.map(valid_viewers).transpose()?;
        if let Some(date) = update.delivery_date {
            check_delivery_date(date, today)?;
        }

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        if let Some(date) = update.delivery_date {
            self.delivery_date = date;
        }
        if let Some(viewers) = viewers {
            self.viewers = viewers;
        }
        Ok(())
    }
}

/// Library duration label, e.g. `0:30`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
