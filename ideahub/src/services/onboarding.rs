//! Onboarding flag
//!
//! Tracks whether the welcome screen has been dismissed on this device.
//! Like the ledger, storage problems never reach the caller: an unreadable
//! flag shows the welcome screen again, a failed write is only logged.

use crate::config::HAS_STARTED_KEY;
use crate::storage::KeyValueStore;
use std::sync::Arc;

pub const WELCOME_TITLE: &str = "Welcome to IdeaHub 🚀";
pub const WELCOME_BODY: &str =
    "Share your startup ideas, explore others, and get real-time feedback.";

#[derive(Clone)]
pub struct OnboardingService {
    store: Arc<dyn KeyValueStore>,
}

impl OnboardingService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether the user already got past the welcome screen
    pub async fn has_started(&self) -> bool {
        match self.store.get_string(HAS_STARTED_KEY).await {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!("Failed to read start state: {}", e);
                false
            }
        }
    }

    /// Mark the welcome screen as dismissed
    pub async fn complete(&self) {
        match self.store.set_string(HAS_STARTED_KEY, "true").await {
            Ok(()) => tracing::info!("Onboarding completed"),
            Err(e) => tracing::warn!("Failed to save start state: {}", e),
        }
    }
}
