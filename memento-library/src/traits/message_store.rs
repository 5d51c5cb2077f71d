use chrono::NaiveDate;

use memento_capture_core::MediaArtifact;

use crate::models::category::Category;
use crate::models::error::LibraryError;
use crate::models::message::{MessageUpdate, SaveMessageRequest, SavedMessage};

/// Persistence for a signed-in user's saved messages.
///
/// `today` is passed in so delivery-date checks stay deterministic.
pub trait MessageStore: Send {
    /// Validate `request` and persist it together with the artifact bytes.
    fn save(
        &mut self,
        artifact: MediaArtifact,
        request: SaveMessageRequest,
        today: NaiveDate,
    ) -> Result<SavedMessage, LibraryError>;

    fn get(&self, id: &str) -> Option<&SavedMessage>;

    /// All messages, newest first.
    fn list(&self) -> Vec<&SavedMessage>;

    /// Messages whose title or description contains `term` (ignoring case),
    /// newest first. `None` means every category.
    fn search(&self, term: &str, category: Option<Category>) -> Vec<&SavedMessage> {
        self.list()
            .into_iter()
            .filter(|m| m.matches(term, category))
            .collect()
    }

    fn update(
        &mut self,
        id: &str,
        update: MessageUpdate,
        today: NaiveDate,
    ) -> Result<&SavedMessage, LibraryError>;

    fn delete(&mut self, id: &str) -> Result<SavedMessage, LibraryError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
