use super::{word_start_captures, Cleaner, Language};
use once_cell::sync::Lazy;
use regex::Regex;

static SCANF_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"scanf\s*\(").unwrap());

static INPUT_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"input\s*\(").unwrap());

/// Estimate how many blocking read calls `source` performs.
///
/// Every textual occurrence outside comments and literals counts once; a call
/// inside a loop is still a single call. The call name must not be glued to a
/// preceding ASCII identifier character.
pub fn count_input_calls(source: &str, language: Language) -> usize {
    let cleaned = Cleaner::strip(source, language);
    let call = match language {
        Language::C => &SCANF_CALL,
        Language::Python => &INPUT_CALL,
    };
    word_start_captures(call, &cleaned).len()
}
