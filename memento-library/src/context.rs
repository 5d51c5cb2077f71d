use chrono::NaiveDate;
use log::info;

use memento_capture_core::RecordingSession;

use crate::models::error::LibraryError;
use crate::models::message::{SaveMessageRequest, SavedMessage};
use crate::prompts::PromptSelection;
use crate::store::memory::InMemoryLibrary;
use crate::traits::message_store::MessageStore;

/// Application-level state: the signed-in user, their library and the
/// prompt they are recording against.
///
/// Nothing is ambient. Hosts create one context and pass it where needed;
/// signing out drops the library.
#[derive(Debug, Default)]
pub struct AppContext {
    session: Option<UserSession>,
}

#[derive(Debug)]
struct UserSession {
    user_id: String,
    library: InMemoryLibrary,
    prompts: PromptSelection,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user_id: &str) -> Result<(), LibraryError> {
        self.sign_in_with(user_id, None)
    }

    /// Sign in and restore a previously exported library.
    ///
    /// The library must belong to `user_id`; the current session is left
    /// untouched otherwise.
    pub fn restore(&mut self, user_id: &str, library_json: &str) -> Result<(), LibraryError> {
        let library = InMemoryLibrary::import_json(library_json)?;
        let user = user_id.trim();
        if library.owner() != user {
            return Err(LibraryError::OwnerMismatch {
                owner: library.owner().to_string(),
                user: user.to_string(),
            });
        }
        self.sign_in_with(user_id, Some(library))
    }

    fn sign_in_with(
        &mut self,
        user_id: &str,
        library: Option<InMemoryLibrary>,
    ) -> Result<(), LibraryError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(LibraryError::InvalidUser);
        }
        if let Some(previous) = self.session.take() {
            info!("Signing out {} before switching user", previous.user_id);
        }
        info!("Signed in {}", user_id);
        self.session = Some(UserSession {
            user_id: user_id.to_string(),
            library: library.unwrap_or_else(|| InMemoryLibrary::new(user_id)),
            prompts: PromptSelection::new(),
        });
        Ok(())
    }

    /// Drop the user's library. Returns the library so hosts can persist it.
    pub fn sign_out(&mut self) -> Option<InMemoryLibrary> {
        let session = self.session.take()?;
        info!("Signed out {}", session.user_id);
        Some(session.library)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    pub fn library(&self) -> Result<&InMemoryLibrary, LibraryError> {
        self.session
            .as_ref()
            .map(|s| &s.library)
            .ok_or(LibraryError::NotSignedIn)
    }

    pub fn library_mut(&mut self) -> Result<&mut InMemoryLibrary, LibraryError> {
        self.session
            .as_mut()
            .map(|s| &mut s.library)
            .ok_or(LibraryError::NotSignedIn)
    }

    pub fn prompts(&self) -> Result<&PromptSelection, LibraryError> {
        self.session
            .as_ref()
            .map(|s| &s.prompts)
            .ok_or(LibraryError::NotSignedIn)
    }

    pub fn prompts_mut(&mut self) -> Result<&mut PromptSelection, LibraryError> {
        self.session
            .as_mut()
            .map(|s| &mut s.prompts)
            .ok_or(LibraryError::NotSignedIn)
    }

    /// Take the reviewable artifact out of `session` and store it.
    ///
    /// The request is checked before the artifact is taken, so a rejected
    /// form leaves the session reviewable and the user can correct it. The
    /// prompt selection is cleared once the message is stored.
    pub fn save_recording(
        &mut self,
        session: &mut dyn RecordingSession,
        request: SaveMessageRequest,
        today: NaiveDate,
    ) -> Result<SavedMessage, LibraryError> {
        let user = self.session.as_mut().ok_or(LibraryError::NotSignedIn)?;
        let request = request.validate(today)?;

        let artifact = session.request_save()?;
        let saved = user.library.save(artifact, request, today)?;
        user.prompts.clear();
        Ok(saved)
    }
}
