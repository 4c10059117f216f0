//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::api::{HttpIdeaApi, IdeaApi};
use crate::config::{AppConfig, STORAGE_FILE_NAME};
use crate::error::Result;
use crate::services::{
    ConsoleNotifier, IdeaStore, Notifier, OnboardingService, SubmissionService, VoteCoordinator,
    VoteLedger,
};
use crate::storage::{FileKvStore, KeyValueStore};
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub ideas: IdeaStore,
    pub votes: VoteCoordinator,
    pub submissions: SubmissionService,
    pub onboarding: OnboardingService,
}

impl AppState {
    /// Wire services from their collaborators.
    ///
    /// The like map is loaded here, once, and owned by the coordinator for
    /// the rest of the session.
    pub async fn from_parts(
        api: Arc<dyn IdeaApi>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let ideas = IdeaStore::new(api.clone(), notifier.clone());
        let ledger = VoteLedger::new(store.clone());
        let likes = ledger.load().await;

        let votes = VoteCoordinator::new(api.clone(), ideas.clone(), ledger, notifier.clone(), likes);
        let submissions = SubmissionService::new(api, ideas.clone(), notifier);
        let onboarding = OnboardingService::new(store);

        Self {
            ideas,
            votes,
            submissions,
            onboarding,
        }
    }
}

/// Application setup - called once on startup
pub async fn setup(config: &AppConfig) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Ideas resource: {}", config.ideas_url());

    tokio::fs::create_dir_all(&config.data_dir).await?;

    let api = Arc::new(HttpIdeaApi::new(config)?);
    let store = Arc::new(FileKvStore::new(config.data_dir.join(STORAGE_FILE_NAME)));

    let state = AppState::from_parts(api, store, Arc::new(ConsoleNotifier)).await;

    tracing::info!("Application initialized successfully");

    Ok(state)
}
