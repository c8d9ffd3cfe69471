//! Static estimation of how many interactive reads a program performs.
//!
//! The remote executor cannot pause a running program to ask for terminal
//! input, so the number of `input()` / `scanf()` calls is guessed up front with
//! a handful of regular expressions and the user is asked for every value
//! before the code is sent.

pub mod language;
pub mod cleaner;
pub mod counter;
pub mod prompts;

pub use language::{Language, Placeholders};
pub use cleaner::Cleaner;
pub use counter::count_input_calls;
pub use prompts::{extract_input_prompts, extract_input_prompts_with};

use regex::{Captures, Regex};
use tracing::debug;

/// Every match of `pattern` that starts on an ASCII word boundary, i.e. is not
/// preceded by `[A-Za-z0-9_]`. Non-ASCII letters do not glue onto a call
/// name, so `中input()` still counts.
pub(crate) fn word_start_captures<'h>(pattern: &Regex, haystack: &'h str) -> Vec<Captures<'h>> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(caps) = pattern.captures_at(haystack, at) {
        let start = caps.get(0).map_or(at, |m| m.start());
        let end = caps.get(0).map_or(at, |m| m.end());
        let glued = haystack.as_bytes()[..start]
            .last()
            .map_or(false, |b| b.is_ascii_alphanumeric() || *b == b'_');
        if glued {
            // Call names start with an ASCII letter, so this stays on a char boundary.
            at = start + 1;
        } else {
            found.push(caps);
            at = end.max(start + 1);
        }
        if at > haystack.len() {
            break;
        }
    }
    found
}

/// Result of scanning one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub count: usize,
    pub prompts: Vec<String>,
}

impl Detection {
    pub fn needs_input(&self) -> bool {
        self.count > 0
    }
}

pub struct Detector;

impl Detector {
    pub fn detect(source: &str, language: Language, placeholders: &Placeholders) -> Detection {
        let count = count_input_calls(source, language);
        let prompts = if count == 0 {
            Vec::new()
        } else {
            extract_input_prompts_with(source, language, placeholders)
        };

        debug!(
            language = %language,
            source_length = source.len(),
            count,
            prompts = prompts.len(),
            "Input detection completed"
        );

        Detection {
            language,
            count,
            prompts,
        }
    }
}
