use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use memento_capture_core::MediaArtifact;

use crate::models::error::LibraryError;
use crate::models::message::{MessageUpdate, SaveMessageRequest, SavedMessage};
use crate::traits::message_store::MessageStore;

/// In-process message library for one user.
///
/// Messages are kept newest first. `export_json` / `import_json` give hosts
/// a simple way to persist the whole library between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLibrary {
    owner: String,
    messages: Vec<SavedMessage>,
}

impl InMemoryLibrary {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            messages: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn export_json(&self) -> Result<String, LibraryError> {
        serde_json::to_string(self).map_err(|e| LibraryError::Serialization(e.to_string()))
    }

    pub fn import_json(json: &str) -> Result<Self, LibraryError> {
        let library: Self =
            serde_json::from_str(json).map_err(|e| LibraryError::Serialization(e.to_string()))?;
        debug!(
            "Imported {} messages for {}",
            library.messages.len(),
            library.owner
        );
        Ok(library)
    }

    fn position(&self, id: &str) -> Result<usize, LibraryError> {
        self.messages
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }
}

impl MessageStore for InMemoryLibrary {
    fn save(
        &mut self,
        artifact: MediaArtifact,
        request: SaveMessageRequest,
        today: NaiveDate,
    ) -> Result<SavedMessage, LibraryError> {
        if artifact.is_empty() {
            return Err(LibraryError::EmptyArtifact);
        }
        let request = request.validate(today)?;
        let message = SavedMessage::from_parts(artifact, request);

        info!(
            "Saved message {} ({}, {} bytes) for {}",
            message.id, message.duration_label, message.artifact.size_bytes, self.owner
        );
        self.messages.insert(0, message.clone());
        Ok(message)
    }

    fn get(&self, id: &str) -> Option<&SavedMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    fn list(&self) -> Vec<&SavedMessage> {
        self.messages.iter().collect()
    }

    fn update(
        &mut self,
        id: &str,
        update: MessageUpdate,
        today: NaiveDate,
    ) -> Result<&SavedMessage, LibraryError> {
        let index = self.position(id)?;
        self.messages[index].apply(update, today)?;
        debug!("Updated message {}", id);
        Ok(&self.messages[index])
    }

    fn delete(&mut self, id: &str) -> Result<SavedMessage, LibraryError> {
        let index = self.position(id)?;
        info!("Deleted message {}", id);
        Ok(self.messages.remove(index))
    }

    fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use crate::models::message::Viewer;
    use memento_capture_core::{CaptureMode, ChunkBuffer};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn artifact(bytes: &[u8], secs: u32) -> MediaArtifact {
        let mut chunks = ChunkBuffer::new();
        chunks.push(bytes);
        MediaArtifact::assemble(
            &chunks,
            "video/webm",
            CaptureMode::Live,
            secs,
            Some("Life Lessons".into()),
        )
    }

    fn request(title: &str) -> SaveMessageRequest {
        SaveMessageRequest::new(title, vec![Viewer::with_email("Sarah", "sarah@example.com")])
    }

    #[test]
    fn save_persists_bytes_and_metadata() {
        let mut library = InMemoryLibrary::new("user-1");
        let saved = library
            .save(artifact(b"webm-bytes", 12), request("Hello"), today())
            .unwrap();

        assert_eq!(saved.video, b"webm-bytes".to_vec());
        assert_eq!(saved.duration_label, "0:12");
        assert_eq!(saved.prompt.as_deref(), Some("Life Lessons"));
        assert_eq!(saved.artifact.size_bytes, 10);
        assert_eq!(library.get(&saved.id), Some(&saved));
    }

    #[test]
    fn save_rejects_invalid_request_without_storing() {
        let mut library = InMemoryLibrary::new("user-1");
        let err = library
            .save(artifact(b"x", 1), request(" "), today())
            .unwrap_err();
        assert_eq!(err, LibraryError::MissingTitle);
        assert!(library.is_empty());
    }

    #[test]
    fn save_rejects_empty_artifact() {
        let mut library = InMemoryLibrary::new("user-1");
        let err = library
            .save(artifact(b"", 0), request("Hello"), today())
            .unwrap_err();
        assert_eq!(err, LibraryError::EmptyArtifact);
    }

    #[test]
    fn list_is_newest_first() {
        let mut library = InMemoryLibrary::new("user-1");
        let first = library.save(artifact(b"a", 1), request("first"), today()).unwrap();
        let second = library.save(artifact(b"b", 2), request("second"), today()).unwrap();

        let ids: Vec<&str> = library.list().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[test]
    fn search_filters_by_text_and_category() {
        let mut library = InMemoryLibrary::new("user-1");
        let mut birthday = request("Birthday message for Sarah");
        birthday.category = Category::Love;
        let birthday = library.save(artifact(b"a", 1), birthday, today()).unwrap();

        let mut lessons = request("Things I learned");
        lessons.description = "Advice for the BIRTHDAY girl".into();
        lessons.category = Category::Advice;
        let lessons = library.save(artifact(b"b", 2), lessons, today()).unwrap();

        let other = library.save(artifact(b"c", 3), request("Fishing trip"), today()).unwrap();

        let ids = |found: Vec<&SavedMessage>| -> Vec<String> {
            found.into_iter().map(|m| m.id.clone()).collect()
        };

        assert_eq!(
            ids(library.search("  ", None)),
            vec![other.id.clone(), lessons.id.clone(), birthday.id.clone()]
        );
        assert_eq!(
            ids(library.search("birthday", None)),
            vec![lessons.id.clone(), birthday.id.clone()]
        );
        assert_eq!(
            ids(library.search("Birthday", Some(Category::Love))),
            vec![birthday.id.clone()]
        );
        assert_eq!(ids(library.search("", Some(Category::Wisdom))), vec![other.id]);
        assert!(library.search("birthday", Some(Category::Story)).is_empty());
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut library = InMemoryLibrary::new("user-1");
        let saved = library.save(artifact(b"a", 1), request("Hello"), today()).unwrap();

        let update = MessageUpdate {
            category: Some(Category::Love),
            is_public: Some(true),
            ..Default::default()
        };
        let updated = library.update(&saved.id, update, today()).unwrap();
        assert_eq!(updated.title, "Hello");
        assert_eq!(updated.category, Category::Love);
        assert!(updated.is_public);
    }

    #[test]
    fn rejected_update_leaves_message_intact() {
        let mut library = InMemoryLibrary::new("user-1");
        let saved = library.save(artifact(b"a", 1), request("Hello"), today()).unwrap();

        let update = MessageUpdate {
            title: Some("Renamed".into()),
            delivery_date: Some(Some(today())),
            ..Default::default()
        };
        assert_eq!(
            library.update(&saved.id, update, today()).unwrap_err(),
            LibraryError::DeliveryDateNotInFuture(today())
        );
        assert_eq!(library.get(&saved.id).unwrap().title, "Hello");
    }

    #[test]
    fn delete_and_missing_ids() {
        let mut library = InMemoryLibrary::new("user-1");
        let saved = library.save(artifact(b"a", 1), request("Hello"), today()).unwrap();

        assert_eq!(library.delete(&saved.id).unwrap().id, saved.id);
        assert!(library.is_empty());
        assert_eq!(
            library.delete(&saved.id).unwrap_err(),
            LibraryError::NotFound(saved.id.clone())
        );
        assert!(library.update("nope", MessageUpdate::default(), today()).is_err());
    }

    #[test]
    fn json_export_round_trips_library() {
        let mut library = InMemoryLibrary::new("user-1");
        library.save(artifact(b"a", 1), request("Hello"), today()).unwrap();

        let restored = InMemoryLibrary::import_json(&library.export_json().unwrap()).unwrap();
        assert_eq!(restored.owner(), "user-1");
        assert_eq!(restored.list(), library.list());
        assert!(matches!(
            InMemoryLibrary::import_json("not json"),
            Err(LibraryError::Serialization(_))
        ));
    }
}
