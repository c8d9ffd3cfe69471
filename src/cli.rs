use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::detection::Language;

#[derive(Parser, Debug)]
#[command(name = "codepad", version, about = "Run code and submit exercises on a coding playground")]
pub struct Cli {
    /// Config file (defaults to ./codepad.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a source file, asking for its input first
    Run {
        file: PathBuf,
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
        /// Answer prompts from these values instead of the terminal
        #[arg(long = "input", short = 'i')]
        inputs: Vec<String>,
    },
    /// Submit a source file as the answer to an exercise
    Submit { exercise_id: u64, file: PathBuf },
    /// Show an exercise
    Exercise {
        exercise_id: u64,
        #[arg(long)]
        hint: bool,
        #[arg(long)]
        solution: bool,
        /// Write the starter code to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Report the detected input calls without contacting the service
    Detect {
        file: PathBuf,
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    Python,
    C,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Python => Language::Python,
            LanguageArg::C => Language::C,
        }
    }
}

/// Explicit `--language`, else guessed from the file extension.
pub fn resolve_language(arg: Option<LanguageArg>, file: &std::path::Path) -> Language {
    arg.map(Language::from)
        .unwrap_or_else(|| Language::from_path(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_run_with_inputs() {
        let cli = Cli::try_parse_from([
            "codepad", "--base-url", "http://judge:8080", "run", "main.c", "-i", "3", "-i", "4",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://judge:8080"));
        match cli.command {
            Command::Run { file, language, inputs } => {
                assert_eq!(file, PathBuf::from("main.c"));
                assert_eq!(language, None);
                assert_eq!(inputs, vec!["3".to_string(), "4".to_string()]);
                assert_eq!(resolve_language(language, &file), Language::C);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn explicit_language_wins_over_extension() {
        assert_eq!(
            resolve_language(Some(LanguageArg::Python), Path::new("main.c")),
            Language::Python
        );
    }

    #[test]
    fn parses_exercise_flags() {
        let cli = Cli::try_parse_from(["codepad", "exercise", "12", "--hint", "--save", "start.py"]).unwrap();
        match cli.command {
            Command::Exercise { exercise_id, hint, solution, save } => {
                assert_eq!(exercise_id, 12);
                assert!(hint);
                assert!(!solution);
                assert_eq!(save, Some(PathBuf::from("start.py")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
