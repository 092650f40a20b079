//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ProgressReporter;
use crate::output::reply::print_chunked;
use moot_application::{
    ChatBackend, ForwardOutcome, ForwardReplyUseCase, HistoryStore, RunTurnUseCase, SessionError,
    SessionStateStore, TurnInput,
};
use moot_domain::{ConversationId, ModelRegistry, ToneTable};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
///
/// Every session is bound to one conversation id; its model, tone,
/// discussion flag, and history all key off that id.
pub struct ChatRepl<B: ChatBackend + 'static> {
    turns: RunTurnUseCase<B>,
    forward: ForwardReplyUseCase,
    session: Arc<SessionStateStore>,
    history: Arc<dyn HistoryStore>,
    registry: Arc<ModelRegistry>,
    tones: Arc<ToneTable>,
    conversation: ConversationId,
    show_progress: bool,
}

impl<B: ChatBackend + 'static> ChatRepl<B> {
    /// Create a new ChatRepl
    pub fn new(
        turns: RunTurnUseCase<B>,
        forward: ForwardReplyUseCase,
        session: Arc<SessionStateStore>,
        history: Arc<dyn HistoryStore>,
        registry: Arc<ModelRegistry>,
        tones: Arc<ToneTable>,
        conversation: ConversationId,
    ) -> Self {
        Self {
            turns,
            forward,
            session,
            history,
            registry,
            tones,
            conversation,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load readline history
        let history_path = dirs::data_dir().map(|p| p.join("moot").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Run the turn
                    self.process_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save readline history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Moot - Chat Mode               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Conversation: {}", self.conversation);
        println!(
            "Models: {}",
            self.registry
                .all()
                .iter()
                .map(|m| m.key.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Commands:");
        println!("  /model [key]  - Show or switch the model");
        println!("  /tone <key>   - Switch the reply tone");
        println!("  /discussion   - Toggle discussion mode");
        println!("  /clear        - Reset conversation history");
        println!("  /help         - Show this help");
        println!("  /quit         - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_help();
                false
            }
            "/model" => {
                self.handle_model(arg);
                false
            }
            "/tone" => {
                self.handle_tone(arg);
                false
            }
            "/discussion" => {
                self.handle_discussion();
                false
            }
            "/clear" => {
                self.handle_clear();
                false
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /model           - Show the current model");
        println!("  /model <key>     - Switch the model");
        println!("  /tone <key>      - Switch the reply tone");
        println!("  /discussion      - Toggle discussion mode");
        println!("  /clear           - Reset conversation history");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    fn handle_model(&self, arg: Option<&str>) {
        match arg {
            Some(key) => {
                let key = key.to_lowercase();
                match self.session.set_model(&self.conversation, &key) {
                    Ok(model) => {
                        println!("✅ Model switched to: {}\n{}", model.key, model.description);
                    }
                    Err(SessionError::Domain(_)) => println!("{}", self.model_usage()),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            None => {
                let chosen = self
                    .session
                    .model(&self.conversation)
                    .and_then(|key| self.registry.resolve(&key).cloned());
                match chosen {
                    Some(model) => {
                        println!("Current model: {}\n{}", model.key, model.description);
                    }
                    None => {
                        let model = self.registry.default_model();
                        println!(
                            "Current model: {} (default)\n{}",
                            model.key, model.description
                        );
                    }
                }
            }
        }
    }

    fn handle_tone(&self, arg: Option<&str>) {
        match arg {
            Some(key) => {
                let key = key.to_lowercase();
                match self.session.set_tone(&self.conversation, &key) {
                    Ok(tone) => println!("✅ Tone set to: {}.", tone.key),
                    Err(_) => println!("{}", self.tone_usage()),
                }
            }
            None => println!("{}", self.tone_usage()),
        }
    }

    fn handle_discussion(&self) {
        if self.session.toggle_discussion(&self.conversation) {
            println!(
                "Discussion Mode enabled! All {} AI models will discuss and provide a combined answer.",
                self.registry.len()
            );
        } else {
            println!(
                "Discussion Mode disabled. You will now get answers from your selected model only."
            );
        }
    }

    fn handle_clear(&self) {
        match self.history.clear(&self.conversation) {
            Ok(()) => println!("Conversation history cleared."),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn model_usage(&self) -> String {
        let list = self
            .registry
            .all()
            .iter()
            .map(|m| format!("{} - {}", m.key, m.description))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Unknown model. Available: {}", list)
    }

    fn tone_usage(&self) -> String {
        let list = self
            .tones
            .all()
            .iter()
            .map(|t| t.key.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Unknown tone. Available: {}", list)
    }

    async fn process_turn(&self, text: &str) {
        // A forward request consumes the cached last reply instead of
        // starting a model turn.
        match self.forward.execute(&self.conversation, text) {
            ForwardOutcome::Forwarded { recipient, .. } => {
                println!("✅ Last reply forwarded to {}!", recipient);
                return;
            }
            ForwardOutcome::NothingToForward { .. } => {
                println!("No recent reply to forward.");
                return;
            }
            ForwardOutcome::NotForward => {}
        }

        println!();

        let input = TurnInput::new(self.conversation.clone(), text);

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.turns.execute_with_progress(input, &progress).await
        } else {
            self.turns.execute(input).await
        };

        match result {
            Ok(reply) => {
                print_chunked(&reply);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
