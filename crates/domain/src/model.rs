// crates/domain/src/model.rs
use countable_shared_kernel::{CharCount, ParagraphCount, WordCount};
use serde::{Deserialize, Serialize};

/// The four metrics derived from one piece of text.
///
/// Produced fresh by every [`count`](crate::count) invocation.
/// `characters` counts non-whitespace code points of the trimmed text;
/// `characters_and_spaces` counts all code points of the untrimmed text minus
/// line terminators, so `characters <= characters_and_spaces` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResult {
    pub paragraphs: ParagraphCount,
    pub words: WordCount,
    pub characters: CharCount,
    pub characters_and_spaces: CharCount,
}

impl CountResult {
    pub const fn zero() -> Self {
        Self {
            paragraphs: ParagraphCount::zero(),
            words: WordCount::zero(),
            characters: CharCount::zero(),
            characters_and_spaces: CharCount::zero(),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.paragraphs.is_zero()
            && self.words.is_zero()
            && self.characters.is_zero()
            && self.characters_and_spaces.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let result = CountResult {
            paragraphs: ParagraphCount::new(2),
            words: WordCount::new(6),
            characters: CharCount::new(41),
            characters_and_spaces: CharCount::new(45),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["paragraphs"], 2);
        assert_eq!(json["words"], 6);
        assert_eq!(json["characters"], 41);
        assert_eq!(json["charactersAndSpaces"], 45);
    }

    #[test]
    fn zero_is_all_zero() {
        assert!(CountResult::zero().is_zero());
        assert_eq!(CountResult::zero(), CountResult::default());
    }
}
