//! Submission command

use super::emit;
use crate::app::AppState;
use crate::error::Result;

/// Submit a new idea
pub async fn submit_idea(
    state: &AppState,
    title: &str,
    tagline: &str,
    description: &str,
    json: bool,
) -> Result<()> {
    let created = state.submissions.submit(title, tagline, description).await?;

    emit(json, &created, || {
        format!(
            "Created idea {} \"{}\" with rating {}",
            created.id, created.title, created.rating
        )
    })
}
