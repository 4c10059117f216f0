//! Remote resource models
//!
//! Rust structs mirroring the records exchanged with the ideas resource.

use serde::{Deserialize, Deserializer, Serialize};

/// A submitted startup idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Assigned by the remote store; some backends send it as a number
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    /// Fixed at submission time, 0..=100
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub votes: u64,
}

/// Body of `POST /ideas`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdea {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub rating: u8,
    pub votes: u64,
}

/// Body of `PATCH /ideas/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesPatch {
    pub votes: u64,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
