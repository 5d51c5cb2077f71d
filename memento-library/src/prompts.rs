//! Recording prompt catalog and the user's current choice.
//!
//! A guided prompt and a random prompt are mutually exclusive: picking one
//! clears the other.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::error::LibraryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidedPrompt {
    pub title: &'static str,
    pub text: &'static str,
}

pub static GUIDED_PROMPTS: [GuidedPrompt; 3] = [
    GuidedPrompt {
        title: "Share Your Love",
        text: "Tell them what they mean to you and how they've shaped your life.",
    },
    GuidedPrompt {
        title: "Life Lessons",
        text: "What wisdom would you want them to carry forward?",
    },
    GuidedPrompt {
        title: "Cherished Memories",
        text: "Share a favorite memory you have together.",
    },
];

pub static ADDITIONAL_PROMPTS: [&str; 10] = [
    "What are you most proud of in your life?",
    "What advice would you give to your younger self?",
    "What do you hope people remember about you?",
    "What's the most important lesson life has taught you?",
    "What brings you the most joy?",
    "What would you want your loved ones to know about facing challenges?",
    "What traditions do you hope will continue in your family?",
    "What story from your childhood shaped who you became?",
    "What are you grateful for today?",
    "What would you want to say to someone having a difficult time?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSelection {
    guided: Option<usize>,
    random: Option<&'static str>,
}

impl PromptSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_guided(&mut self, index: usize) -> Result<&'static GuidedPrompt, LibraryError> {
        let prompt = GUIDED_PROMPTS
            .get(index)
            .ok_or(LibraryError::UnknownPrompt(index))?;
        self.guided = Some(index);
        self.random = None;
        Ok(prompt)
    }

    /// Pick one of the additional prompts at random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let prompt = ADDITIONAL_PROMPTS
            .choose(rng)
            .copied()
            .unwrap_or(ADDITIONAL_PROMPTS[0]);
        self.random = Some(prompt);
        self.guided = None;
        prompt
    }

    pub fn clear(&mut self) {
        self.guided = None;
        self.random = None;
    }

    pub fn guided(&self) -> Option<&'static GuidedPrompt> {
        self.guided.and_then(|i| GUIDED_PROMPTS.get(i))
    }

    pub fn random(&self) -> Option<&'static str> {
        self.random
    }

    /// Text shown while recording. Random wins over guided.
    pub fn current_prompt(&self) -> Option<&'static str> {
        self.random.or_else(|| self.guided().map(|p| p.text))
    }
}
