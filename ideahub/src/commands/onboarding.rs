//! Welcome screen

use crate::app::AppState;
use crate::config::ONBOARDING_AUTO_DISMISS;
use crate::error::Result;
use crate::services::onboarding::{WELCOME_BODY, WELCOME_TITLE};
use tokio::sync::oneshot;

fn print_welcome() {
    println!("{}\n\n{}\n", WELCOME_TITLE, WELCOME_BODY);
}

/// Show the welcome text once per device, without waiting for input
pub async fn welcome_if_new(state: &AppState) {
    if state.onboarding.has_started().await {
        return;
    }

    print_welcome();
    state.onboarding.complete().await;
}

/// Show the welcome text and wait for Enter, dismissing on its own after a delay
pub async fn get_started(state: &AppState) -> Result<()> {
    print_welcome();
    println!(
        "Press Enter to get started (continuing in {}s)...",
        ONBOARDING_AUTO_DISMISS.as_secs()
    );

    // Detached so an unanswered prompt does not hold the runtime open on exit
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        let _ = tx.send(());
    });

    if tokio::time::timeout(ONBOARDING_AUTO_DISMISS, rx).await.is_err() {
        tracing::debug!("Welcome screen auto-dismissed");
    }

    state.onboarding.complete().await;
    Ok(())
}
