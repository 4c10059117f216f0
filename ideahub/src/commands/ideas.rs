//! Idea browsing commands
//!
//! Listing, leaderboard and share text.

use super::{emit, idea_line};
use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::services::{share_message, SortOrder};

/// Print every idea sorted by `order`
pub async fn list_ideas(state: &AppState, order: SortOrder, json: bool) -> Result<()> {
    state.ideas.refresh().await?;

    let ideas = state.ideas.sorted(order);

    emit(json, &ideas, || {
        if ideas.is_empty() {
            return "No ideas yet.".to_string();
        }
        ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| idea_line(i + 1, idea, state.votes.has_liked(&idea.id)))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Print the podium and the remaining ranks
pub async fn show_leaderboard(state: &AppState, order: SortOrder, json: bool) -> Result<()> {
    state.ideas.refresh().await?;

    let board = state.ideas.leaderboard(order);
    const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

    emit(json, &board, || {
        let mut lines = Vec::new();
        for (i, idea) in board.podium.iter().enumerate() {
            lines.push(format!(
                "{} {} (rating {}, votes {})",
                MEDALS.get(i).copied().unwrap_or("  "),
                idea.title,
                idea.rating,
                idea.votes
            ));
        }
        let offset = board.podium.len();
        for (i, idea) in board.rest.iter().enumerate() {
            lines.push(idea_line(offset + i + 1, idea, state.votes.has_liked(&idea.id)));
        }
        if lines.is_empty() {
            lines.push("No ideas yet.".to_string());
        }
        lines.join("\n")
    })
}

/// Print the share text of one idea
pub async fn share_idea(state: &AppState, id: &str, json: bool) -> Result<()> {
    state.ideas.refresh().await?;

    let idea = state
        .ideas
        .get(id)
        .ok_or_else(|| AppError::IdeaNotFound(id.to_string()))?;
    let message = share_message(&idea);

    emit(json, &serde_json::json!({ "id": idea.id, "message": message }), || {
        message.clone()
    })
}
