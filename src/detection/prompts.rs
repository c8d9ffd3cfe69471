use super::{count_input_calls, word_start_captures, Language, Placeholders};
use once_cell::sync::Lazy;
use regex::Regex;

/// `input(...)` whose only argument is a quoted literal. Exactly one of the
/// three groups participates, depending on the quote style.
static INPUT_WITH_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"input\s*\(\s*(?:'(.*?)'|"(.*?)"|`(.*?)`)\s*\)"#).unwrap()
});

static INPUT_WITHOUT_ARGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"input\s*\(\s*\)").unwrap());

/// Derive one prompt per anticipated read call using the default placeholders.
pub fn extract_input_prompts(source: &str, language: Language) -> Vec<String> {
    extract_input_prompts_with(source, language, &Placeholders::default())
}

/// Derive prompts, falling back to `placeholders` where no literal is available.
///
/// Python prompts come from two independent scans of the raw source: literal
/// prompts first, then one placeholder per argumentless call. An argumentless
/// call therefore lands after every literal prompt even when it appears
/// earlier in the file. The result may also be shorter than the call count.
pub fn extract_input_prompts_with(
    source: &str,
    language: Language,
    placeholders: &Placeholders,
) -> Vec<String> {
    let generic = placeholders.for_language(language);

    match language {
        Language::C => vec![generic.to_string(); count_input_calls(source, Language::C)],
        Language::Python => {
            let mut prompts: Vec<String> = word_start_captures(&INPUT_WITH_LITERAL, source)
                .into_iter()
                .map(|caps| {
                    let literal = (1..=3)
                        .find_map(|group| caps.get(group))
                        .map(|m| m.as_str())
                        .unwrap_or_default();
                    if literal.is_empty() {
                        generic.to_string()
                    } else {
                        literal.to_string()
                    }
                })
                .collect();

            let bare = word_start_captures(&INPUT_WITHOUT_ARGS, source).len();
            prompts.extend(std::iter::repeat(generic.to_string()).take(bare));
            prompts
        }
    }
}
