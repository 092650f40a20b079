//! CLI entrypoint for moot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use moot_application::{
    BehaviorConfig, ForwardOutcome, ForwardReplyUseCase, HistoryStore, LastReplyCache,
    RunTurnUseCase, SessionStateStore, TurnInput, TurnLogger,
};
use moot_domain::{ConversationId, ModelRegistry, ToneTable};
use moot_infrastructure::{
    ConfigLoader, JsonHistoryStore, JsonPreferenceStore, JsonlTurnLogger, MailIntentDetector,
    OpenRouterBackend,
};
use moot_presentation::{ChatRepl, Cli, ProgressReporter, print_chunked};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    info!("Starting moot");

    // === Dependency Injection ===
    let registry = Arc::new(ModelRegistry::builtin());
    let tones = Arc::new(ToneTable::builtin());

    let backend = Arc::new(OpenRouterBackend::from_env(
        config.backend.base_url.as_str(),
        Duration::from_secs(config.backend.request_timeout_secs),
    )?);

    let history: Arc<dyn HistoryStore> =
        Arc::new(JsonHistoryStore::new(config.storage.history_dir_path()));
    let prefs = Arc::new(JsonPreferenceStore::new(config.storage.prefs_file_path()));
    let session = Arc::new(SessionStateStore::new(
        Arc::clone(&registry),
        Arc::clone(&tones),
        prefs,
    ));
    let last_reply = Arc::new(LastReplyCache::new());
    let classifier = Arc::new(MailIntentDetector::new()?);

    let behavior = BehaviorConfig::with_timeout_seconds(config.backend.request_timeout_secs)
        .with_sender_tag(config.reply.sender_tag.as_str());

    let turn_logger: Option<Arc<dyn TurnLogger>> = dirs::data_dir()
        .map(|p| p.join("moot").join("turns.jsonl"))
        .and_then(JsonlTurnLogger::new)
        .map(|logger| Arc::new(logger) as Arc<dyn TurnLogger>);

    let mut turns = RunTurnUseCase::new(
        backend,
        Arc::clone(&registry),
        Arc::clone(&tones),
        Arc::clone(&session),
        Arc::clone(&history),
        Arc::clone(&last_reply),
        behavior,
    );
    let mut forward = ForwardReplyUseCase::new(classifier, Arc::clone(&last_reply));
    if let Some(logger) = turn_logger {
        turns = turns.with_logger(Arc::clone(&logger));
        forward = forward.with_logger(logger);
    }

    let conversation = ConversationId::new(cli.conversation.clone());

    // One-shot mode
    if let Some(text) = cli.message {
        match forward.execute(&conversation, &text) {
            ForwardOutcome::Forwarded { recipient, .. } => {
                println!("✅ Last reply forwarded to {}!", recipient);
                return Ok(());
            }
            ForwardOutcome::NothingToForward { .. } => {
                println!("No recent reply to forward.");
                return Ok(());
            }
            ForwardOutcome::NotForward => {}
        }

        let input = TurnInput::new(conversation, text);
        let reply = if cli.quiet {
            turns.execute(input).await?
        } else {
            let progress = ProgressReporter::new();
            turns.execute_with_progress(input, &progress).await?
        };

        print_chunked(&reply);
        return Ok(());
    }

    // Interactive chat
    let repl = ChatRepl::new(turns, forward, session, history, registry, tones, conversation)
        .with_progress(!cli.quiet);
    repl.run().await?;

    Ok(())
}
