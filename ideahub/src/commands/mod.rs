//! CLI command handlers
//!
//! This module organizes commands into logical submodules:
//! - `ideas`: Listing, leaderboard and share text
//! - `votes`: Upvoting and the per-device like map
//! - `submit`: Idea submission
//! - `onboarding`: Welcome screen

pub mod ideas;
pub mod onboarding;
pub mod submit;
pub mod votes;

pub use ideas::*;
pub use onboarding::*;
pub use submit::*;
pub use votes::*;

use crate::api::Idea;
use crate::error::Result;
use serde::Serialize;

/// Print `value` as JSON, or the human-readable text otherwise
pub(crate) fn emit<T, F>(json: bool, value: &T, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

/// One-line summary of an idea, marked with ♥ when liked on this device
pub(crate) fn idea_line(rank: usize, idea: &Idea, liked: bool) -> String {
    format!(
        "{:>3}. [{}] {} - {} (rating {}, votes {}){}",
        rank,
        idea.id,
        idea.title,
        idea.tagline,
        idea.rating,
        idea.votes,
        if liked { " ♥" } else { "" }
    )
}
