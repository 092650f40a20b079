//! Request composition rules.
//!
//! Pure functions that turn conversation state into the ordered message list
//! a backend receives. The persona/tone injection rule lives here and nowhere
//! else: a system message is prepended only for models that accept one, only
//! at the start of a fresh history, and the active tone's instruction takes
//! the persona's place when one is set.

use crate::conversation::entities::Message;
use crate::model::descriptor::ModelDescriptor;
use crate::orchestration::value_objects::FanOutReport;

/// The system text that opens a fresh conversation, if the model takes one.
///
/// Tone overrides persona: when the active tone carries an instruction it is
/// used instead of (not in addition to) the model's persona.
pub fn opening_system_text(
    model: &ModelDescriptor,
    tone_instruction: Option<&str>,
) -> Option<String> {
    if !model.accepts_persona {
        return None;
    }
    Some(
        tone_instruction
            .unwrap_or(&model.persona)
            .to_string(),
    )
}

/// Builds the message list for a single-mode call.
///
/// Layout: opening system message (only when `history` is empty and the model
/// accepts one), then the stored turns in order, then one user message. Once
/// a conversation has turns, later tone changes never rewrite the system
/// message already stored.
pub fn conversation_messages(
    history: &[Message],
    user_text: &str,
    model: &ModelDescriptor,
    tone_instruction: Option<&str>,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    if history.is_empty()
        && let Some(system) = opening_system_text(model, tone_instruction)
    {
        messages.push(Message::system(system));
    }
    messages.extend_from_slice(history);
    messages.push(Message::user(user_text));
    messages
}

/// Builds the message list for one fan-out call.
///
/// Fan-out never uses persisted history: every model gets a fresh one-shot
/// context with the injection rule applied anew.
pub fn one_shot_messages(
    model: &ModelDescriptor,
    tone_instruction: Option<&str>,
    user_text: &str,
) -> Vec<Message> {
    conversation_messages(&[], user_text, model, tone_instruction)
}

/// Builds the synthesis prompt from a fan-out report.
///
/// A fixed instruction followed by one `KEY says: answer` block per model,
/// blank-line separated, in registry order. Failed answers contribute their
/// error text so the moderator sees the full picture.
pub fn synthesis_prompt(report: &FanOutReport) -> String {
    let blocks: Vec<String> = report
        .answers()
        .iter()
        .map(|answer| {
            format!(
                "{} says: {}",
                answer.model_key.to_uppercase(),
                answer.display_text()
            )
        })
        .collect();
    format!(
        "You are an expert AI assistant. Here are answers from {} different AI \
         models to the same question. Discuss, compare, and provide the best \
         possible answer for the user.\n\n{}",
        report.len(),
        blocks.join("\n\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Role;
    use crate::model::registry::ModelRegistry;
    use crate::orchestration::value_objects::ModelAnswer;

    fn registry() -> ModelRegistry {
        ModelRegistry::builtin()
    }

    #[test]
    fn test_fresh_history_gets_persona() {
        let registry = registry();
        let deepseek = registry.resolve("deepseek").unwrap();
        let messages = conversation_messages(&[], "hello", deepseek, None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, deepseek.persona);
        assert_eq!(messages[1], Message::user("hello"));
    }

    #[test]
    fn test_tone_replaces_persona() {
        let registry = registry();
        let deepseek = registry.resolve("deepseek").unwrap();
        let messages =
            conversation_messages(&[], "hello", deepseek, Some("Be terse."));
        assert_eq!(messages[0], Message::system("Be terse."));
    }

    #[test]
    fn test_persona_refusing_model_gets_no_system() {
        let registry = registry();
        let gemma = registry.resolve("gemma").unwrap();
        let messages =
            conversation_messages(&[], "hello", gemma, Some("Be terse."));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
    }

    #[test]
    fn test_existing_history_never_gains_second_system() {
        let registry = registry();
        let deepseek = registry.resolve("deepseek").unwrap();
        let history = vec![
            Message::system(&deepseek.persona),
            Message::user("hello"),
            Message::assistant("hi there"),
        ];
        let messages =
            conversation_messages(&history, "and again", deepseek, Some("Be terse."));
        let system_count = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .count();
        assert_eq!(system_count, 1);
        assert_eq!(messages.len(), history.len() + 1);
        assert_eq!(messages[0], history[0]);
        assert_eq!(messages.last(), Some(&Message::user("and again")));
    }

    #[test]
    fn test_one_shot_ignores_nothing_but_history() {
        let registry = registry();
        let mistral = registry.resolve("mistral").unwrap();
        let messages = one_shot_messages(mistral, None, "ping");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, mistral.persona);
        assert_eq!(messages[1], Message::user("ping"));
    }

    #[test]
    fn test_synthesis_prompt_orders_and_labels() {
        let report = FanOutReport::new(vec![
            ModelAnswer::success("gemma", "alpha"),
            ModelAnswer::failure("deepseek", "boom"),
            ModelAnswer::success("qwen", "omega"),
        ]);
        let prompt = synthesis_prompt(&report);
        assert!(prompt.starts_with(
            "You are an expert AI assistant. Here are answers from 3 different AI models"
        ));
        assert!(prompt.contains("GEMMA says: alpha"));
        assert!(prompt.contains("DEEPSEEK says: Error: boom"));
        assert!(prompt.contains("QWEN says: omega"));
        let gemma_at = prompt.find("GEMMA").unwrap();
        let deepseek_at = prompt.find("DEEPSEEK").unwrap();
        let qwen_at = prompt.find("QWEN").unwrap();
        assert!(gemma_at < deepseek_at && deepseek_at < qwen_at);
    }
}
