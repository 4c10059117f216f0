//! Idea store
//!
//! Holds the in-memory idea collection shared by the listing, leaderboard,
//! submission and voting flows. Only the listing refresh replaces the
//! collection wholesale; votes and submissions patch single entries.

use crate::api::{Idea, IdeaApi};
use crate::config::PODIUM_SIZE;
use crate::error::Result;
use crate::services::notify::{Notice, Notifier, MSG_LOAD_FAILED};
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordering used by the listing and the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest rating first
    #[default]
    TopRated,
    /// Most votes first
    MostUpvotes,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top" | "top_rated" | "rating" => Ok(Self::TopRated),
            "upvotes" | "most_upvotes" | "votes" => Ok(Self::MostUpvotes),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Total order on ids: integer ids first by value, then all other ids as
/// text. Equal values ("1", "01") fall back to the raw string.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>().ok(), b.parse::<u64>().ok()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort ideas by `order` descending, ties broken by ascending id
pub fn sort_ideas(ideas: &mut [Idea], order: SortOrder) {
    ideas.sort_by(|a, b| {
        let primary = match order {
            SortOrder::TopRated => b.rating.cmp(&a.rating),
            SortOrder::MostUpvotes => b.votes.cmp(&a.votes),
        };
        primary.then_with(|| compare_ids(&a.id, &b.id))
    });
}

/// Ideas split into the podium and the remaining ranks
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    pub podium: Vec<Idea>,
    pub rest: Vec<Idea>,
}

impl Leaderboard {
    /// Build from an already sorted list
    pub fn from_sorted(mut sorted: Vec<Idea>) -> Self {
        let rest = sorted.split_off(sorted.len().min(PODIUM_SIZE));
        Self {
            podium: sorted,
            rest,
        }
    }
}

/// Shared in-memory idea collection
#[derive(Clone)]
pub struct IdeaStore {
    api: Arc<dyn IdeaApi>,
    notifier: Arc<dyn Notifier>,
    ideas: Arc<RwLock<Vec<Idea>>>,
}

impl IdeaStore {
    pub fn new(api: Arc<dyn IdeaApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            ideas: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Idea>> {
        self.ideas.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Idea>> {
        self.ideas.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Fetch all ideas from the remote resource and replace the collection.
    ///
    /// On failure a notice is emitted and the current collection is kept.
    pub async fn refresh(&self) -> Result<usize> {
        tracing::info!("Refreshing ideas");

        match self.api.list_ideas().await {
            Ok(ideas) => {
                let count = ideas.len();
                *self.write() = ideas;
                tracing::info!("Loaded {} ideas", count);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Failed to fetch ideas: {}", e);
                self.notifier.notify(Notice::failure(MSG_LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// Copy of the collection in remote order
    pub fn snapshot(&self) -> Vec<Idea> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Look up one idea by id
    pub fn get(&self, id: &str) -> Option<Idea> {
        self.read().iter().find(|idea| idea.id == id).cloned()
    }

    /// Set the vote count of one idea, returns false if it is not loaded
    pub fn set_votes(&self, id: &str, votes: u64) -> bool {
        let mut ideas = self.write();
        match ideas.iter_mut().find(|idea| idea.id == id) {
            Some(idea) => {
                idea.votes = votes;
                true
            }
            None => false,
        }
    }

    /// Insert an idea, replacing any loaded idea with the same id
    pub fn upsert(&self, idea: Idea) {
        let mut ideas = self.write();
        match ideas.iter_mut().find(|existing| existing.id == idea.id) {
            Some(existing) => *existing = idea,
            None => ideas.push(idea),
        }
    }

    /// Replace the whole collection
    pub fn replace(&self, ideas: Vec<Idea>) {
        *self.write() = ideas;
    }

    /// Collection sorted by `order`
    pub fn sorted(&self, order: SortOrder) -> Vec<Idea> {
        let mut ideas = self.snapshot();
        sort_ideas(&mut ideas, order);
        ideas
    }

    /// Podium and remaining ranks for `order`
    pub fn leaderboard(&self, order: SortOrder) -> Leaderboard {
        Leaderboard::from_sorted(self.sorted(order))
    }
}
