// IdeaHub - browse, submit and vote on startup ideas
// Entry point and command dispatch

use clap::{Parser, Subcommand};
use ideahub::commands;
use ideahub::config::AppConfig;
use ideahub::services::SortOrder;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the ideas resource (overrides IDEAHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory for local state (overrides IDEAHUB_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List all ideas
    List {
        /// "top" (rating) or "upvotes"
        #[arg(long, default_value = "top")]
        sort: SortOrder,
    },
    /// Show the podium and the remaining ranks
    Leaderboard {
        /// "top" (rating) or "upvotes"
        #[arg(long, default_value = "top")]
        sort: SortOrder,
    },
    /// Submit a new idea
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        tagline: String,
        #[arg(long)]
        description: String,
    },
    /// Upvote an idea (once per device)
    Upvote {
        id: String,
    },
    /// Print the share text of an idea
    Share {
        id: String,
    },
    /// List ideas liked on this device
    Liked,
    /// Show the welcome screen
    Start,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ideahub={},warn", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting IdeaHub");

    let state = ideahub::app::setup(&config).await?;

    if !matches!(cli.cmd, Cmd::Start) {
        commands::welcome_if_new(&state).await;
    }

    let json = cli.json;
    match cli.cmd {
        Cmd::List { sort } => commands::list_ideas(&state, sort, json).await?,
        Cmd::Leaderboard { sort } => commands::show_leaderboard(&state, sort, json).await?,
        Cmd::Submit {
            title,
            tagline,
            description,
        } => commands::submit_idea(&state, &title, &tagline, &description, json).await?,
        Cmd::Upvote { id } => commands::upvote_idea(&state, &id, json).await?,
        Cmd::Share { id } => commands::share_idea(&state, &id, json).await?,
        Cmd::Liked => commands::list_liked(&state, json).await?,
        Cmd::Start => commands::get_started(&state).await?,
    }

    Ok(())
}
