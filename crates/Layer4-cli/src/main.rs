//! Barter CLI - Main entry point

mod commands;
mod notifier;
mod render;

use barter_api::ApiClient;
use barter_foundation::{BarterConfig, SessionStore, API_URL_ENV};
use barter_market::NewSkillDraft;
use clap::{Parser, Subcommand};
use commands::{CommandOutput, Env};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Barter - skills marketplace in the terminal
#[derive(Parser, Debug)]
#[command(name = "barter")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL (overrides env and config)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the session against the backend
    Status,
    /// Show the dashboard summary for the stored user
    Dashboard,
    /// Browse and trade skills
    Skills {
        #[command(subcommand)]
        command: SkillsCommand,
    },
    /// Manage the stored login session
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SkillsCommand {
    /// List skill offers
    List {
        /// Search skill, user, description or location
        #[arg(short, long)]
        query: Option<String>,

        /// Exact category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the available categories
    Categories,
    /// Send a trade request for a skill
    Connect {
        /// Skill offer ID
        skill_id: String,
    },
    /// Offer a new skill
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        experience: String,

        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Store a token and a user record (JSON file)
    Set {
        #[arg(long)]
        token: String,

        #[arg(long)]
        user_file: PathBuf,
    },
    /// Show the stored session
    Show,
    /// Remove the stored session
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let mut config = BarterConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}", e);
        BarterConfig::new().with_env_override(std::env::var(API_URL_ENV).ok())
    });
    if let Some(api_url) = args.api_url {
        config.api_base_url = Some(api_url);
    }

    let store = SessionStore::global()?;

    let output = match args.command {
        Command::Session { command } => match command {
            SessionCommand::Set { token, user_file } => {
                commands::session_set(&store, &token, &user_file)?
            }
            SessionCommand::Show => commands::session_show(&store)?,
            SessionCommand::Clear => commands::session_clear(&store)?,
        },
        command => {
            let session = store.load()?;
            let env = Env {
                client: ApiClient::new(config.api_base())
                    .with_session_token(session.token().map(str::to_string)),
                session,
                notifier: notifier::for_display(config.display.show_notifications()),
                description_width: config.display.description_width(),
            };
            tracing::debug!("Using backend {}", env.client.base_url());
            run(&env, command).await?
        }
    };

    if !output.text.is_empty() {
        println!("{}", output.text);
    }
    if output.outcome.is_failed() {
        std::process::exit(1);
    }

    Ok(())
}

async fn run(env: &Env, command: Command) -> anyhow::Result<CommandOutput> {
    match command {
        Command::Status => commands::status(env).await,
        Command::Dashboard => commands::dashboard(env).await,
        Command::Skills { command } => match command {
            SkillsCommand::List { query, category } => {
                commands::skills_list(env, query, category).await
            }
            SkillsCommand::Categories => commands::skills_categories(env).await,
            SkillsCommand::Connect { skill_id } => commands::skills_connect(env, &skill_id).await,
            SkillsCommand::Add {
                name,
                category,
                experience,
                description,
            } => {
                let draft = NewSkillDraft::new(name, category)
                    .experience(experience)
                    .description(description);
                commands::skills_add(env, draft).await
            }
        },
        Command::Session { .. } => anyhow::bail!("session commands run without a client"),
    }
}
