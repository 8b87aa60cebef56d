use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use im_common::config::ServiceConfig;
use im_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use im_common::service::{RecommendationError, RecommendationService};
use im_common::store::{InMemoryStore, StoreError};
use im_common::{Posting, Profile};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const APP_NAME: &str = "im-recommend";

#[derive(Debug, Parser)]
#[command(
    name = "im-recommend",
    about = "Score internship postings against a student profile"
)]
struct Cli {
    /// Path to the profile JSON object (must carry a non-empty user_id)
    #[arg(long, env = "IM_PROFILE_PATH")]
    profile: PathBuf,

    /// Path to the JSON array of postings
    #[arg(long, env = "IM_POSTINGS_PATH")]
    postings: PathBuf,

    /// Plain-text resume, merged into the profile when --merge-resume or
    /// IM_MERGE_RESUME_SKILLS is set
    #[arg(long, env = "IM_RESUME_PATH")]
    resume: Option<PathBuf>,

    /// Merge resume skills into the profile before scoring
    #[arg(long)]
    merge_resume: bool,

    /// Maximum number of recommendations to print (defaults to IM_RECOMMENDATION_LIMIT or 10)
    #[arg(long)]
    limit: Option<usize>,

    /// Print factor breakdowns instead of stored-record form
    #[arg(long)]
    explain: bool,

    /// Also score postings marked inactive (or set IM_INCLUDE_INACTIVE)
    #[arg(long)]
    include_inactive: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

/// Flags win over the environment-derived config.
fn resolve_config(cli: &Cli, mut config: ServiceConfig) -> Result<ServiceConfig, CliError> {
    if let Some(limit) = cli.limit {
        if limit == 0 {
            return Err(CliError::Config("--limit must be at least 1".into()));
        }
        config.recommendation_limit = im_common::config::clamp_limit(limit);
    }
    if cli.include_inactive {
        config.include_inactive = true;
    }
    if cli.merge_resume {
        config.merge_resume_skills = true;
    }
    Ok(config)
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        context: path.display().to_string(),
        source,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|source| CliError::Json {
        context: "output".into(),
        source,
    })
}

/// Loads the inputs into a process-local store and wraps it in the service,
/// so the binary goes through the same filtering and merge rules as any
/// other caller. Returns the profile's user id alongside.
fn build_service(
    profile: Profile,
    postings: Vec<Posting>,
    resume_text: Option<String>,
    config: ServiceConfig,
) -> Result<(RecommendationService, String), CliError> {
    let user_id = profile.user_id.clone();
    let store = Arc::new(InMemoryStore::new());

    store.upsert_profile(profile);
    for posting in postings {
        store.insert_posting(posting)?;
    }
    match resume_text {
        Some(text) if !config.merge_resume_skills => {
            warn!("resume supplied but merging is disabled; pass --merge-resume to use it");
            store.set_resume_text(user_id.clone(), text);
        }
        Some(text) => store.set_resume_text(user_id.clone(), text),
        None => {}
    }

    let service = RecommendationService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        config,
    );
    Ok((service, user_id))
}

fn render(
    service: &RecommendationService,
    user_id: &str,
    explain: bool,
    pretty: bool,
) -> Result<String, CliError> {
    if explain {
        let entries = service.explain(user_id)?;
        debug!(entries = entries.len(), "explained recommendations");
        return to_json(&entries, pretty);
    }

    let summary = service.refresh(user_id)?;
    info!(
        scored = summary.scored,
        stored = summary.stored,
        limit = service.config().recommendation_limit,
        "scored postings"
    );
    to_json(&service.recommendations(user_id)?, pretty)
}

fn run() -> Result<(), CliError> {
    dotenv().ok();
    let destination = init_tracing_subscriber(APP_NAME);
    install_tracing_panic_hook(APP_NAME);
    debug!(?destination, "logging initialised");

    let cli = Cli::parse();
    let config = resolve_config(&cli, ServiceConfig::from_env())?;

    let profile: Profile = read_json(&cli.profile)?;
    let postings: Vec<Posting> = read_json(&cli.postings)?;
    let resume_text = cli.resume.as_deref().map(read_text).transpose()?;

    let (service, user_id) = build_service(profile, postings, resume_text, config)?;
    let output = render(&service, &user_id, cli.explain, cli.pretty)?;
    println!("{output}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{APP_NAME} failed: {err}");
        std::process::exit(1);
    }
}
