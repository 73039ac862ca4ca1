// crates/domain/src/counter.rs
//! The pure counting algorithm.
//!
//! `count` is total: any string input, including empty, whitespace-only, or
//! text containing astral-plane characters, produces a well-formed
//! [`CountResult`]. All character metrics count Unicode code points, never
//! UTF-16 code units.

use std::borrow::Cow;
use std::sync::LazyLock;

use countable_shared_kernel::{CharCount, ParagraphCount, WordCount};
use regex::Regex;

use crate::config::CountConfig;
use crate::model::CountResult;

/// Minimal tag grammar: `<`, optional `/`, a letter, any run of non-`>`
/// characters, `>`. Best-effort strip, not an HTML parser.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?[a-z][^>]*>").expect("tag pattern is valid"));

/// Punctuation removed before word splitting. Hyphen-joined and
/// quote-wrapped tokens collapse into their neighbors rather than
/// splitting into extra words.
const WORD_PUNCTUATION: &[char] = &[
    '\'', '\u{2018}', '\u{2019}', '"', '\u{201C}', '\u{201D}', ':', ',', '.', '?', '\u{BF}', '!',
    '\u{A1}', '-',
];

/// Derives all four metrics from `text` under `config`.
pub fn count(text: &str, config: &CountConfig) -> CountResult {
    let stripped: Cow<'_, str> = if config.strip_tags {
        TAG_PATTERN.replace_all(text, "")
    } else {
        Cow::Borrowed(text)
    };
    let trimmed = stripped.trim();

    CountResult {
        paragraphs: ParagraphCount::new(count_paragraphs(trimmed, config.hard_returns)),
        words: WordCount::new(count_words(trimmed)),
        characters: CharCount::new(count_characters(trimmed)),
        // Deliberately computed from the untrimmed text: leading and trailing
        // whitespace other than line terminators is included here.
        characters_and_spaces: CharCount::new(count_characters_and_spaces(&stripped)),
    }
}

/// Counts paragraph boundaries + 1.
///
/// A boundary is a maximal run of line breaks (`\r\n` counts as one break,
/// lone `\n` or `\r` as one each) long enough for the mode: any run in soft
/// mode, a run of at least three breaks in hard-return mode, where a single
/// blank line is still part of the same paragraph.
fn count_paragraphs(trimmed: &str, hard_returns: bool) -> usize {
    if trimmed.is_empty() {
        return 0;
    }

    let min_breaks = if hard_returns { 3 } else { 1 };
    let mut boundaries = 0usize;
    let mut breaks_in_run = 0usize;

    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                breaks_in_run += 1;
            }
            '\n' => breaks_in_run += 1,
            _ => {
                if breaks_in_run >= min_breaks {
                    boundaries += 1;
                }
                breaks_in_run = 0;
            }
        }
    }
    // `trimmed` never ends in a line break, so no run is left open here.

    boundaries + 1
}

fn count_words(trimmed: &str) -> usize {
    if trimmed.is_empty() {
        return 0;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !WORD_PUNCTUATION.contains(c))
        .collect();
    cleaned.split_whitespace().count()
}

fn count_characters(trimmed: &str) -> usize {
    trimmed.chars().filter(|c| !c.is_whitespace()).count()
}

fn count_characters_and_spaces(text: &str) -> usize {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft() -> CountConfig {
        CountConfig::default()
    }

    fn hard() -> CountConfig {
        CountConfig::new().hard_returns(true)
    }

    #[test]
    fn empty_text_is_all_zero() {
        assert!(count("", &soft()).is_zero());
        assert!(count("", &hard().strip_tags(true)).is_zero());
    }

    #[test]
    fn whitespace_only_counts_spaces_but_nothing_else() {
        let result = count("  \t \n  ", &soft());
        assert_eq!(result.paragraphs, 0usize);
        assert_eq!(result.words, 0usize);
        assert_eq!(result.characters, 0usize);
        // Six code points remain once the newline is dropped.
        assert_eq!(result.characters_and_spaces, 6usize);
    }

    #[test]
    fn soft_returns_split_on_any_break_run() {
        assert_eq!(count("a\nb", &soft()).paragraphs, 2usize);
        assert_eq!(count("a\n\nb", &soft()).paragraphs, 2usize);
        assert_eq!(count("a\r\nb\rc", &soft()).paragraphs, 3usize);
    }

    #[test]
    fn hard_returns_ignore_single_breaks_and_blank_lines() {
        assert_eq!(count("a\nb", &hard()).paragraphs, 1usize);
        assert_eq!(count("a\n\nb", &hard()).paragraphs, 1usize);
        assert_eq!(count("a\n\n\nb", &hard()).paragraphs, 2usize);
        // CRLF sequences collapse to one break each.
        assert_eq!(count("a\r\n\r\nb", &hard()).paragraphs, 1usize);
        assert_eq!(count("a\r\n\r\n\r\nb", &hard()).paragraphs, 2usize);
    }

    #[test]
    fn no_break_is_one_paragraph() {
        assert_eq!(count("just one line", &soft()).paragraphs, 1usize);
        assert_eq!(count("just one line", &hard()).paragraphs, 1usize);
    }

    #[test]
    fn punctuation_is_stripped_before_word_split() {
        assert_eq!(count("Hello, world!", &soft()).words, 2usize);
        assert_eq!(count("well-known \u{201C}quote\u{201D}", &soft()).words, 2usize);
        assert_eq!(count("\u{BF}Qu\u{E9}? \u{A1}S\u{ED}!", &soft()).words, 2usize);
    }

    #[test]
    fn pure_punctuation_tokens_vanish() {
        assert_eq!(count("- - -", &soft()).words, 0usize);
    }

    #[test]
    fn astral_plane_characters_count_once() {
        let result = count("\u{1F600}\u{1F600}", &soft());
        assert_eq!(result.characters, 2usize);
        assert_eq!(result.characters_and_spaces, 2usize);
    }

    #[test]
    fn tag_stripping_excludes_markup_from_counts() {
        let stripped = count("<b>Hi</b> there", &CountConfig::new().strip_tags(true));
        assert_eq!(stripped.words, 2usize);
        assert_eq!(stripped.characters, 7usize);

        let kept = count("<b>Hi</b> there", &soft());
        assert_eq!(kept.characters, 14usize);
    }

    #[test]
    fn tag_stripping_is_best_effort_on_malformed_markup() {
        // An unclosed "<" is plain text.
        assert_eq!(count("a < b", &CountConfig::new().strip_tags(true)).words, 3usize);
        // "<3" does not start with a letter, so it survives.
        assert_eq!(
            count("<3 you", &CountConfig::new().strip_tags(true)).characters,
            5usize
        );
    }

    #[test]
    fn characters_exclude_inner_whitespace() {
        let result = count("a b", &soft());
        assert_eq!(result.characters, 2usize);
        assert_eq!(result.characters_and_spaces, 3usize);
    }

    #[test]
    fn leading_whitespace_counts_toward_characters_and_spaces_only() {
        let result = count("  ab  ", &soft());
        assert_eq!(result.characters, 2usize);
        assert_eq!(result.characters_and_spaces, 6usize);
    }

    #[test]
    fn two_paragraph_scenario() {
        let text = "First paragraph.\n\nSecond one, with punctuation!";
        let result = count(text, &soft());
        assert_eq!(result.paragraphs, 2usize);
        assert_eq!(result.words, 6usize);
        assert_eq!(result.characters, 41usize);
        assert_eq!(result.characters_and_spaces, 45usize);
    }
}
