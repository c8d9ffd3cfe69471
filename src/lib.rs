// Client side of a coding playground: detect interactive reads, collect the
// values up front, then run or judge the code on the remote service.

pub mod cli;
pub mod client;
pub mod collector;
pub mod commands;
pub mod config;
pub mod detection;

use crate::cli::{resolve_language, Cli, Command};
use crate::client::PlaygroundClient;
use crate::collector::{PromptSurface, ScriptedSurface, TerminalSurface};
use crate::commands::{BufferEditor, Editor, Playground, RunOutcome};
use crate::config::Config;
use crate::detection::{Detector, Language};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("codepad_lib=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
        config.validate()?;
    }

    match cli.command {
        Command::Detect { file, language } => {
            let language = resolve_language(language, &file);
            let source = read_source(&file)?;
            let detection = Detector::detect(&source, language, &config.prompt.placeholders);
            println!(
                "{} {}() call(s) detected ({})",
                detection.count,
                language.read_call(),
                language
            );
            for (i, prompt) in detection.prompts.iter().enumerate() {
                println!("  {}. {}", i + 1, prompt);
            }
            Ok(())
        }
        Command::Run { file, language, inputs } => {
            let language = resolve_language(language, &file);
            let editor = BufferEditor::new(read_source(&file)?);
            let client = PlaygroundClient::new(&config.service)?;
            let placeholders = config.prompt.placeholders.clone();

            if inputs.is_empty() {
                let surface = TerminalSurface::stdio(config.prompt.cancel_word.clone());
                run_code(Playground::new(client, surface, placeholders), &editor, language).await
            } else {
                let surface = ScriptedSurface::answering(inputs);
                run_code(Playground::new(client, surface, placeholders), &editor, language).await
            }
        }
        Command::Submit { exercise_id, file } => {
            let editor = BufferEditor::new(read_source(&file)?);
            let client = PlaygroundClient::new(&config.service)?;
            let mut playground =
                Playground::new(client, ScriptedSurface::default(), config.prompt.placeholders);

            let result = playground.submit_answer(&editor, exercise_id).await?;
            println!("{}", playground.output().text);
            for case in result.results.iter().filter(|case| !case.passed) {
                let label = case
                    .description
                    .clone()
                    .or_else(|| case.input.clone())
                    .unwrap_or_else(|| "test case".to_string());
                println!("  failed: {}", label);
            }
            Ok(())
        }
        Command::Exercise { exercise_id, hint, solution, save } => {
            let client = PlaygroundClient::new(&config.service)?;
            let mut playground =
                Playground::new(client, ScriptedSurface::default(), config.prompt.placeholders);
            let mut editor = BufferEditor::default();

            let exercise = playground.load_exercise(&mut editor, exercise_id).await?;
            println!(
                "#{} {} [{}] ({})",
                exercise.id,
                exercise.title,
                exercise.language(),
                exercise.difficulty_label()
            );
            println!("\n{}", exercise.description);

            if let Some(path) = save {
                fs::write(&path, editor.text())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "Starter code saved");
            }

            if hint || solution {
                let answer = playground.fetch_solution(exercise_id).await?;
                if hint {
                    println!("\nHint:\n{}", answer.hint.as_deref().unwrap_or("(none)"));
                }
                if solution {
                    println!("\nSolution:\n{}", answer.solution.as_deref().unwrap_or("(none)"));
                }
            }
            Ok(())
        }
    }
}

async fn run_code<S: PromptSurface>(
    mut playground: Playground<S>,
    editor: &dyn Editor,
    language: Language,
) -> Result<()> {
    match playground.run_code(editor, language).await {
        RunOutcome::Cancelled => {
            info!("Run cancelled");
            Ok(())
        }
        RunOutcome::Succeeded => {
            print!("{}", playground.output().text);
            Ok(())
        }
        RunOutcome::Failed => bail!("{}", playground.output().text),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
