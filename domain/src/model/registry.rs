//! Model registry: the fixed, ordered table of selectable backends

use crate::core::error::DomainError;
use crate::model::descriptor::ModelDescriptor;

/// Ordered, immutable table of the models a deployment can route to.
///
/// Registration order is significant: it fixes fan-out order and the label
/// order in the synthesis prompt. The default model is named explicitly at
/// construction — never inferred from iteration order.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<ModelDescriptor>,
    default_index: usize,
}

impl ModelRegistry {
    /// Build a registry from descriptors plus the explicit default key.
    ///
    /// Fails if the table is empty, a key repeats, or the default key is
    /// absent.
    pub fn new(
        entries: Vec<ModelDescriptor>,
        default_key: &str,
    ) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.key == entry.key) {
                return Err(DomainError::DuplicateModelKey(entry.key.clone()));
            }
        }
        let default_index = entries
            .iter()
            .position(|m| m.key == default_key)
            .ok_or_else(|| DomainError::DefaultModelMissing(default_key.to_string()))?;
        Ok(Self {
            entries,
            default_index,
        })
    }

    /// The built-in table from the original deployment: five OpenRouter
    /// models, `deepseek` as the default.
    pub fn builtin() -> Self {
        let entries = vec![
            ModelDescriptor::new(
                "gemma",
                "google/gemma-3n-e4b-it:free",
                "Gemma (Google): General-purpose, high-quality model.",
                "You are friendly, creative, and supportive. Respond in a warm, \
                 encouraging, and imaginative way.",
                false,
            ),
            ModelDescriptor::new(
                "deepseek",
                "deepseek/deepseek-chat-v3-0324:free",
                "Deepseek: Fast, balanced, and reliable for most tasks.",
                "You are a balanced, logical, and concise assistant. Always provide \
                 clear, well-reasoned answers.",
                true,
            ),
            ModelDescriptor::new(
                "mistral",
                "mistralai/mistral-small-3.2-24b-instruct:free",
                "Mistral: Good for creative and open-ended responses.",
                "You are imaginative, open-minded, and love exploring new ideas. \
                 Respond with creativity and curiosity.",
                true,
            ),
            ModelDescriptor::new(
                "nvidia",
                "nvidia/llama-3.3-nemotron-super-49b-v1:free",
                "Nvidia Llama: Large, advanced, and powerful model.",
                "You are precise, technical, and thorough. Respond with detailed, \
                 expert-level information.",
                true,
            ),
            ModelDescriptor::new(
                "qwen",
                "qwen/qwen3-30b-a3b:free",
                "Qwen: Large, advanced, and multilingual model from Alibaba.",
                "You are a multilingual, knowledgeable, and helpful assistant. \
                 Respond with clarity and global perspective.",
                false,
            ),
        ];
        Self {
            entries,
            default_index: 1, // deepseek
        }
    }

    /// Look up a descriptor by key.
    pub fn resolve(&self, key: &str) -> Option<&ModelDescriptor> {
        self.entries.iter().find(|m| m.key == key)
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// All descriptors, in registration (= fan-out) order.
    pub fn all(&self) -> &[ModelDescriptor] {
        &self.entries
    }

    /// The explicit default model.
    pub fn default_model(&self) -> &ModelDescriptor {
        &self.entries[self.default_index]
    }

    /// Key of the explicit default model.
    pub fn default_key(&self) -> &str {
        &self.entries[self.default_index].key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(key: &str) -> ModelDescriptor {
        ModelDescriptor::new(key, format!("vendor/{key}"), "desc", "persona", true)
    }

    #[test]
    fn test_builtin_order_and_default() {
        let registry = ModelRegistry::builtin();
        let keys: Vec<_> = registry.all().iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["gemma", "deepseek", "mistral", "nvidia", "qwen"]);
        assert_eq!(registry.default_key(), "deepseek");
        assert_eq!(
            registry.default_model().backend_id,
            "deepseek/deepseek-chat-v3-0324:free"
        );
    }

    #[test]
    fn test_builtin_persona_split() {
        let registry = ModelRegistry::builtin();
        for key in ["deepseek", "mistral", "nvidia"] {
            assert!(registry.resolve(key).unwrap().accepts_persona, "{key}");
        }
        for key in ["gemma", "qwen"] {
            assert!(!registry.resolve(key).unwrap().accepts_persona, "{key}");
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ModelRegistry::builtin();
        assert!(registry.resolve("not-a-model").is_none());
        assert!(!registry.contains("not-a-model"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = ModelRegistry::new(vec![], "a").unwrap_err();
        assert!(matches!(err, DomainError::EmptyRegistry));
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let err = ModelRegistry::new(vec![descriptor("a")], "b").unwrap_err();
        assert!(matches!(err, DomainError::DefaultModelMissing(k) if k == "b"));
    }

    #[test]
    fn test_new_rejects_duplicate_keys() {
        let err =
            ModelRegistry::new(vec![descriptor("a"), descriptor("a")], "a").unwrap_err();
        assert!(matches!(err, DomainError::DuplicateModelKey(k) if k == "a"));
    }

    #[test]
    fn test_default_is_explicit_not_first() {
        let registry =
            ModelRegistry::new(vec![descriptor("first"), descriptor("second")], "second")
                .unwrap();
        assert_eq!(registry.default_key(), "second");
    }
}
