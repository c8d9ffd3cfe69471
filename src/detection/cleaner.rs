use super::Language;
use once_cell::sync::Lazy;
use regex::Regex;

// ========== C noise ==========

/// Block comment, may span lines.
static C_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Line comment up to end of line.
static C_LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());

/// Double-quoted literal with backslash escapes.
static C_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"\\]*(?:\\.[^"\\]*)*""#).unwrap());

// ========== Python noise ==========

static PY_TRIPLE_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)'''.*?'''").unwrap());

static PY_TRIPLE_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)""".*?""""#).unwrap());

static PY_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[^']*'").unwrap());

static PY_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*""#).unwrap());

static PY_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"#.*").unwrap());

/// Removes comments and string literals that could hide a false read-call match.
///
/// Passes run in a fixed order and each one sees only what the previous ones
/// left behind, so quotes inside an already removed comment are never looked
/// at again. This is a lexical approximation, not a tokenizer.
pub struct Cleaner;

impl Cleaner {
    pub fn strip(source: &str, language: Language) -> String {
        let passes: Vec<&Regex> = match language {
            Language::C => vec![&*C_BLOCK_COMMENT, &*C_LINE_COMMENT, &*C_STRING],
            Language::Python => vec![
                &*PY_TRIPLE_SINGLE,
                &*PY_TRIPLE_DOUBLE,
                &*PY_SINGLE,
                &*PY_DOUBLE,
                &*PY_COMMENT,
            ],
        };

        passes.iter().fold(source.to_string(), |text, pattern| {
            pattern.replace_all(&text, "").into_owned()
        })
    }
}
