//! Tone table: selectable reply styles layered on top of the model persona

/// Key of the tone applied when a conversation has not chosen one.
pub const DEFAULT_TONE: &str = "default";

/// A selectable reply style. (Value Object)
///
/// `instruction` is the system-prompt text that takes the model persona's
/// place when set; the default tone carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneDescriptor {
    pub key: String,
    pub instruction: Option<String>,
}

impl ToneDescriptor {
    pub fn new(key: impl Into<String>, instruction: Option<&str>) -> Self {
        Self {
            key: key.into(),
            instruction: instruction.map(str::to_string),
        }
    }
}

/// Ordered table of the tones a conversation can switch between.
#[derive(Debug, Clone)]
pub struct ToneTable {
    entries: Vec<ToneDescriptor>,
}

impl ToneTable {
    /// The built-in tone set from the original deployment.
    pub fn builtin() -> Self {
        let entries = vec![
            ToneDescriptor::new(DEFAULT_TONE, None),
            ToneDescriptor::new(
                "sarcastic",
                Some(
                    "You are a sarcastic AI assistant. Respond to the user with a \
                     witty, dry, and sarcastic tone, but do not be rude or offensive.",
                ),
            ),
            ToneDescriptor::new(
                "friendly",
                Some(
                    "You are a friendly and supportive AI assistant. Respond warmly, \
                     positively, and with encouragement.",
                ),
            ),
            ToneDescriptor::new(
                "professional",
                Some(
                    "You are a professional AI assistant. Respond formally, clearly, \
                     and with expert-level detail.",
                ),
            ),
            ToneDescriptor::new(
                "concise",
                Some(
                    "You are a concise AI assistant. Respond with short, direct, and \
                     to-the-point answers, avoiding unnecessary detail.",
                ),
            ),
            ToneDescriptor::new(
                "motivational",
                Some(
                    "You are a motivational AI assistant. Respond with uplifting, \
                     inspiring, and positive language to encourage the user.",
                ),
            ),
            ToneDescriptor::new(
                "humorous",
                Some(
                    "You are a humorous AI assistant. Respond with light-hearted, \
                     playful, and appropriate humor, but stay helpful.",
                ),
            ),
        ];
        Self { entries }
    }

    pub fn resolve(&self, key: &str) -> Option<&ToneDescriptor> {
        self.entries.iter().find(|t| t.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// All tones, in table order.
    pub fn all(&self) -> &[ToneDescriptor] {
        &self.entries
    }

    /// Instruction text for `key`, if the tone exists and carries one.
    ///
    /// The default tone resolves but yields no instruction.
    pub fn instruction(&self, key: &str) -> Option<&str> {
        self.resolve(key)
            .and_then(|t| t.instruction.as_deref())
    }
}
