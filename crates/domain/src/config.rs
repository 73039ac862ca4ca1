// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};

/// Counting options.
///
/// Both options default to off. Deserialization accepts partial documents —
/// missing keys take their defaults and unrecognized keys are ignored — so a
/// caller can overlay `{"hardReturns": true}` onto the defaults without
/// spelling out the full configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountConfig {
    /// When true, a single blank line does not end a paragraph; only a run of
    /// three or more line breaks does.
    pub hard_returns: bool,
    /// When true, substrings matching a minimal markup-tag grammar are removed
    /// before counting. Best effort, not an HTML parser.
    pub strip_tags: bool,
}

impl CountConfig {
    pub const fn new() -> Self {
        Self {
            hard_returns: false,
            strip_tags: false,
        }
    }

    #[must_use]
    pub const fn hard_returns(mut self, on: bool) -> Self {
        self.hard_returns = on;
        self
    }

    #[must_use]
    pub const fn strip_tags(mut self, on: bool) -> Self {
        self.strip_tags = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let config = CountConfig::default();
        assert!(!config.hard_returns);
        assert!(!config.strip_tags);
    }

    #[test]
    fn builder_overlays_onto_defaults() {
        let config = CountConfig::new().hard_returns(true);
        assert!(config.hard_returns);
        assert!(!config.strip_tags);
    }

    #[test]
    fn partial_document_takes_defaults_for_missing_keys() {
        let config: CountConfig = serde_json::from_str(r#"{"stripTags": true}"#).unwrap();
        assert!(!config.hard_returns);
        assert!(config.strip_tags);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let config: CountConfig =
            serde_json::from_str(r#"{"hardReturns": true, "maxLength": 80}"#).unwrap();
        assert!(config.hard_returns);
        assert!(!config.strip_tags);
    }
}
