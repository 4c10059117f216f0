//! User-facing feedback
//!
//! Transient notices (toasts) and haptic pulses emitted by the services.

use std::sync::Mutex;
use std::time::Duration;

pub const MSG_ALREADY_LIKED: &str = "Already liked this idea.";
pub const MSG_LIKED: &str = "You liked this idea!";
pub const MSG_VOTE_FAILED: &str = "Failed to update vote";
pub const MSG_LOAD_FAILED: &str = "Failed to load ideas";
pub const MSG_SUBMITTED: &str = "Your idea has been submitted.";
pub const MSG_SUBMIT_FAILED: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Failure,
}

/// A short message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// Sink for notices and haptic feedback
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn haptic(&self, pulse: Duration);
}

/// Prints notices to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Failure => eprintln!("✗ {}", notice.message),
            NoticeKind::Success => println!("✓ {}", notice.message),
            NoticeKind::Info => println!("• {}", notice.message),
        }
    }

    fn haptic(&self, pulse: Duration) {
        // No vibration motor on a terminal
        tracing::debug!("Haptic pulse: {}ms", pulse.as_millis());
    }
}

/// Keeps every notice and pulse for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    pulses: Mutex<Vec<Duration>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn pulses(&self) -> Vec<Duration> {
        self.pulses
            .lock()
            .map(|pulses| pulses.clone())
            .unwrap_or_default()
    }

    /// Number of recorded notices of the given kind
    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices().iter().filter(|n| n.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }

    fn haptic(&self, pulse: Duration) {
        if let Ok(mut pulses) = self.pulses.lock() {
            pulses.push(pulse);
        }
    }
}
