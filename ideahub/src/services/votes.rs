//! Vote coordinator
//!
//! Enforces at most one vote per device per idea and reconciles the local
//! idea collection and like map with the remote vote count.
//!
//! Per idea the client sees `Unvoted -> Voted`, and `Voted` is terminal.
//! The one-vote rule is client side only: clearing local storage resets it.
//!
//! The new count is computed locally from the last fetched value and sent as
//! an absolute number, so concurrent votes from different devices on the same
//! idea are last-write-wins on the server. The remote API offers no atomic
//! increment to fix this with.

use crate::api::IdeaApi;
use crate::config::VOTE_HAPTIC_PULSE;
use crate::services::ideas::IdeaStore;
use crate::services::ledger::{has_liked, LikeMap, VoteLedger};
use crate::services::notify::{
    Notice, Notifier, MSG_ALREADY_LIKED, MSG_LIKED, MSG_VOTE_FAILED,
};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Result of an upvote gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpvoteOutcome {
    /// Remote count updated, idea is now liked by this device
    Voted { votes: u64 },
    /// This device already voted for the idea
    AlreadyLiked,
    /// A vote for the idea is still in flight
    InFlight,
    /// The idea is not in the local collection
    UnknownIdea,
    /// The remote update failed, nothing changed locally
    Failed { error: String },
}

/// Removes an id from the pending set when dropped
struct PendingGuard<'a> {
    pending: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.remove(&self.id);
    }
}

/// Coordinates upvotes between the idea store, the ledger and the remote API
#[derive(Clone)]
pub struct VoteCoordinator {
    api: Arc<dyn IdeaApi>,
    ideas: IdeaStore,
    ledger: VoteLedger,
    notifier: Arc<dyn Notifier>,
    likes: Arc<Mutex<LikeMap>>,
    pending: Arc<Mutex<HashSet<String>>>,
    /// Serializes snapshot + save so an older map never overwrites a newer one
    persist: Arc<tokio::sync::Mutex<()>>,
}

impl VoteCoordinator {
    /// Create a coordinator seeded with the like map loaded at startup
    pub fn new(
        api: Arc<dyn IdeaApi>,
        ideas: IdeaStore,
        ledger: VoteLedger,
        notifier: Arc<dyn Notifier>,
        likes: LikeMap,
    ) -> Self {
        Self {
            api,
            ideas,
            ledger,
            notifier,
            likes: Arc::new(Mutex::new(likes)),
            pending: Arc::new(Mutex::new(HashSet::new())),
            persist: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    fn likes(&self) -> MutexGuard<'_, LikeMap> {
        self.likes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether this device already voted for `id`
    pub fn has_liked(&self, id: &str) -> bool {
        has_liked(&self.likes(), id)
    }

    /// Copy of the in-memory like map
    pub fn liked(&self) -> LikeMap {
        self.likes().clone()
    }

    /// Claim `id` for a vote.
    ///
    /// The like check runs under the pending lock. A vote marks the idea
    /// liked before releasing its claim, so a second caller sees either
    /// `InFlight` or `AlreadyLiked`, never a fresh claim.
    fn claim(&self, id: &str) -> Result<PendingGuard<'_>, UpvoteOutcome> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if self.has_liked(id) {
            return Err(UpvoteOutcome::AlreadyLiked);
        }
        if !pending.insert(id.to_string()) {
            return Err(UpvoteOutcome::InFlight);
        }
        Ok(PendingGuard {
            pending: &self.pending,
            id: id.to_string(),
        })
    }

    /// Mark `id` liked and persist the whole map
    async fn record_like(&self, id: &str) {
        let _persist = self.persist.lock().await;

        let snapshot = {
            let mut likes = self.likes();
            likes.insert(id.to_string(), true);
            likes.clone()
        };
        self.ledger.save(&snapshot).await;
    }

    /// Handle an upvote gesture for `id`
    pub async fn upvote(&self, id: &str) -> UpvoteOutcome {
        let _guard = match self.claim(id) {
            Ok(guard) => guard,
            Err(UpvoteOutcome::AlreadyLiked) => {
                tracing::debug!("Idea {} already liked on this device", id);
                self.notifier.notify(Notice::info(MSG_ALREADY_LIKED));
                return UpvoteOutcome::AlreadyLiked;
            }
            Err(outcome) => {
                tracing::debug!("Vote for idea {} already in flight", id);
                return outcome;
            }
        };

        let Some(idea) = self.ideas.get(id) else {
            tracing::debug!("Idea {} not in local collection, ignoring vote", id);
            return UpvoteOutcome::UnknownIdea;
        };

        let new_votes = idea.votes + 1;
        tracing::info!("Upvoting idea {}: {} -> {}", id, idea.votes, new_votes);

        if let Err(e) = self.api.update_votes(id, new_votes).await {
            tracing::error!("Failed to update votes for idea {}: {}", id, e);
            self.notifier.notify(Notice::failure(MSG_VOTE_FAILED));
            return UpvoteOutcome::Failed {
                error: e.to_string(),
            };
        }

        self.ideas.set_votes(id, new_votes);
        self.record_like(id).await;

        self.notifier.haptic(VOTE_HAPTIC_PULSE);
        self.notifier.notify(Notice::success(MSG_LIKED));

        tracing::info!("Idea {} now has {} votes", id, new_votes);

        UpvoteOutcome::Voted { votes: new_votes }
    }
}
