//! Share text for an idea

use crate::api::Idea;

/// Message handed to the platform share sheet
pub fn share_message(idea: &Idea) -> String {
    format!(
        "🚀 Startup Idea: {}\n\n💡 Tagline: {}\n\n📄 Description: {}\n\n⭐️ Rating: {} | 🗳 Votes: {}",
        idea.title, idea.tagline, idea.description, idea.rating, idea.votes
    )
}
