//! Vote commands

use super::emit;
use crate::app::AppState;
use crate::error::Result;
use crate::services::UpvoteOutcome;

/// Upvote one idea from this device
pub async fn upvote_idea(state: &AppState, id: &str, json: bool) -> Result<()> {
    // The coordinator resolves the current count from the loaded collection
    if let Err(e) = state.ideas.refresh().await {
        tracing::warn!("Voting against a stale idea list: {}", e);
    }

    let outcome = state.votes.upvote(id).await;

    emit(json, &outcome, || match &outcome {
        UpvoteOutcome::Voted { votes } => format!("Idea {} now has {} votes", id, votes),
        UpvoteOutcome::AlreadyLiked => format!("Idea {} was already liked", id),
        UpvoteOutcome::InFlight => format!("A vote for idea {} is in progress", id),
        UpvoteOutcome::UnknownIdea => format!("No idea with id {}", id),
        UpvoteOutcome::Failed { error } => format!("Vote not recorded: {}", error),
    })
}

/// Print the ideas this device has liked
pub async fn list_liked(state: &AppState, json: bool) -> Result<()> {
    let liked = state.votes.liked();

    emit(json, &liked, || {
        let ids: Vec<&str> = liked
            .iter()
            .filter(|(_, liked)| **liked)
            .map(|(id, _)| id.as_str())
            .collect();
        if ids.is_empty() {
            "No liked ideas on this device.".to_string()
        } else {
            format!("Liked ideas: {}", ids.join(", "))
        }
    })
}
