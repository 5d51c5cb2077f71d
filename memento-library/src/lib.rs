//! # memento-library
//!
//! The persistence side of a recording: message metadata validated at the
//! boundary, a per-user message library, the recording prompt catalog and
//! the application context that ties them to a signed-in user.
//!
//! ```text
//! memento-library (this crate)
//! ├── models/    ← LibraryError, Category, Viewer, SaveMessageRequest, SavedMessage
//! ├── traits/    ← MessageStore
//! ├── store/     ← InMemoryLibrary
//! ├── prompts    ← guided and additional prompts, PromptSelection
//! └── context    ← AppContext (sign-in lifecycle, save_recording)
//! ```

pub mod context;
pub mod models;
pub mod prompts;
pub mod store;
pub mod traits;

pub use context::AppContext;
pub use models::category::Category;
pub use models::error::LibraryError;
pub use models::message::{format_duration, MessageUpdate, SaveMessageRequest, SavedMessage, Viewer};
pub use prompts::{GuidedPrompt, PromptSelection, ADDITIONAL_PROMPTS, GUIDED_PROMPTS};
pub use store::memory::InMemoryLibrary;
pub use traits::message_store::MessageStore;
