//! Remote API module
//!
//! Models and client for the hosted ideas resource.

pub mod client;
pub mod models;

pub use client::{HttpIdeaApi, IdeaApi};
pub use models::{Idea, NewIdea, VotesPatch};
