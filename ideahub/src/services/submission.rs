//! Idea submission
//!
//! Validates the submission form, assigns the rating and creates the idea on
//! the remote resource. New ideas start with zero votes.

use crate::api::{Idea, IdeaApi, NewIdea};
use crate::config::MAX_RATING;
use crate::error::{AppError, Result};
use crate::services::ideas::IdeaStore;
use crate::services::notify::{Notice, Notifier, MSG_SUBMITTED, MSG_SUBMIT_FAILED};
use rand::Rng;
use std::sync::Arc;

pub const MSG_MISSING_FIELDS: &str = "Please fill all fields.";

/// Service for submitting new ideas
#[derive(Clone)]
pub struct SubmissionService {
    api: Arc<dyn IdeaApi>,
    ideas: IdeaStore,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionService {
    pub fn new(api: Arc<dyn IdeaApi>, ideas: IdeaStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            ideas,
            notifier,
        }
    }

    /// Build the request body, rejecting blank fields
    pub fn prepare(title: &str, tagline: &str, description: &str) -> Result<NewIdea> {
        let (title, tagline, description) = (title.trim(), tagline.trim(), description.trim());

        if title.is_empty() || tagline.is_empty() || description.is_empty() {
            return Err(AppError::Validation(MSG_MISSING_FIELDS.to_string()));
        }

        Ok(NewIdea {
            title: title.to_string(),
            tagline: tagline.to_string(),
            description: description.to_string(),
            rating: rand::thread_rng().gen_range(0..=MAX_RATING),
            votes: 0,
        })
    }

    /// Submit a new idea and add it to the local collection
    pub async fn submit(&self, title: &str, tagline: &str, description: &str) -> Result<Idea> {
        let new_idea = Self::prepare(title, tagline, description)?;

        tracing::info!(
            "Submitting idea: {} (rating {})",
            new_idea.title,
            new_idea.rating
        );

        match self.api.create_idea(&new_idea).await {
            Ok(created) => {
                tracing::info!("Idea created successfully: {}", created.id);
                self.ideas.upsert(created.clone());
                self.notifier.notify(Notice::success(MSG_SUBMITTED));
                Ok(created)
            }
            Err(e) => {
                tracing::error!("Failed to submit idea: {}", e);
                self.notifier.notify(Notice::failure(MSG_SUBMIT_FAILED));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notify::{NoticeKind, RecordingNotifier};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingApi {
        created: Mutex<Vec<NewIdea>>,
        fail: bool,
    }

    #[async_trait]
    impl IdeaApi for CapturingApi {
        async fn list_ideas(&self) -> Result<Vec<Idea>> {
            Ok(Vec::new())
        }

        async fn create_idea(&self, idea: &NewIdea) -> Result<Idea> {
            if self.fail {
                return Err(AppError::RemoteStatus {
                    status: 500,
                    url: "http://mock/ideas".to_string(),
                });
            }
            let mut created = self.created.lock().unwrap();
            created.push(idea.clone());
            Ok(Idea {
                id: created.len().to_string(),
                title: idea.title.clone(),
                tagline: idea.tagline.clone(),
                description: idea.description.clone(),
                rating: idea.rating,
                votes: idea.votes,
            })
        }

        async fn update_votes(&self, _id: &str, _votes: u64) -> Result<Idea> {
            Err(AppError::Generic("not used".to_string()))
        }
    }

    fn create_test_service(
        api: CapturingApi,
    ) -> (SubmissionService, Arc<CapturingApi>, IdeaStore, Arc<RecordingNotifier>) {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::new());
        let ideas = IdeaStore::new(api.clone(), notifier.clone());
        let service = SubmissionService::new(api.clone(), ideas.clone(), notifier.clone());
        (service, api, ideas, notifier)
    }

    #[test]
    fn test_prepare_rejects_blank_fields() {
        let err = SubmissionService::prepare("Name", "   ", "Desc").unwrap_err();
        assert_eq!(err.to_string(), MSG_MISSING_FIELDS);

        assert!(SubmissionService::prepare("", "Tag", "Desc").is_err());
        assert!(SubmissionService::prepare("Name", "Tag", "").is_err());
    }

    #[test]
    fn test_prepare_assigns_rating_in_range() {
        for _ in 0..200 {
            let idea = SubmissionService::prepare(" Name ", "Tag", "Desc").unwrap();
            assert!(idea.rating <= MAX_RATING);
            assert_eq!(idea.votes, 0);
            assert_eq!(idea.title, "Name");
        }
    }

    #[tokio::test]
    async fn test_submit_adds_idea_to_store() {
        let (service, api, ideas, notifier) = create_test_service(CapturingApi::default());

        let created = service
            .submit("Drone Laundry", "Clothes by air", "Pickup by drone")
            .await
            .unwrap();

        assert_eq!(created.votes, 0);
        assert_eq!(ideas.get(&created.id).unwrap().title, "Drone Laundry");
        assert_eq!(api.created.lock().unwrap().len(), 1);
        assert_eq!(notifier.notices(), vec![Notice::success(MSG_SUBMITTED)]);
    }

    #[tokio::test]
    async fn test_invalid_submission_sends_nothing() {
        let (service, api, _ideas, notifier) = create_test_service(CapturingApi::default());

        let result = service.submit("Name", "", "Desc").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(api.created.lock().unwrap().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_notifies() {
        let (service, _api, ideas, notifier) = create_test_service(CapturingApi {
            fail: true,
            ..CapturingApi::default()
        });

        assert!(service.submit("Name", "Tag", "Desc").await.is_err());

        assert!(ideas.is_empty());
        assert_eq!(notifier.count(NoticeKind::Failure), 1);
    }
}
