use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Languages the playground can execute.
///
/// The remote service treats every language name it does not recognise as
/// Python, so parsing here never fails.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    C,
}

impl Language {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "c" => Language::C,
            _ => Language::Python,
        }
    }

    /// Guess the language from a file extension (`.c`/`.h` is C, anything else Python).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("c") || ext.eq_ignore_ascii_case("h") => {
                Language::C
            }
            _ => Language::Python,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::C => "c",
        }
    }

    /// Name of the blocking read call counted for this language.
    pub fn read_call(&self) -> &'static str {
        match self {
            Language::Python => "input",
            Language::C => "scanf",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Language::from_name(&name))
    }
}

/// Fallback prompt text shown when no literal prompt can be derived.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Placeholders {
    pub python: String,
    pub c: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            python: "Enter a value:".to_string(),
            c: "Enter data:".to_string(),
        }
    }
}

impl Placeholders {
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::Python => &self.python,
            Language::C => &self.c,
        }
    }
}
