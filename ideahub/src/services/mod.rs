//! Services module
//!
//! Business logic services that coordinate between the CLI, the remote API
//! and local storage.

pub mod ideas;
pub mod ledger;
pub mod notify;
pub mod onboarding;
pub mod share;
pub mod submission;
pub mod votes;

pub use ideas::{sort_ideas, IdeaStore, Leaderboard, SortOrder};
pub use ledger::{has_liked, LikeMap, VoteLedger};
pub use notify::{ConsoleNotifier, Notice, NoticeKind, Notifier, RecordingNotifier};
pub use onboarding::OnboardingService;
pub use share::share_message;
pub use submission::SubmissionService;
pub use votes::{UpvoteOutcome, VoteCoordinator};
