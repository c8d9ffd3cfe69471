use crate::client::{ClientError, Exercise, JudgeResult, PlaygroundClient, Solution};
use crate::collector::{CollectError, InputCollector, PromptSurface};
use crate::detection::{Language, Placeholders};
use thiserror::Error;
use tracing::{info, warn};

pub const IDLE_OUTPUT: &str = "Click \"Run\" to see the result...";
const EMPTY_OUTPUT: &str = "(Program finished with no output)";

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Request failed: {0}")]
    Client(#[from] ClientError),
    #[error("{0}")]
    Service(String),
    #[error("Input collection failed: {0}")]
    Collect(CollectError),
}

/// Read access to whatever holds the code being edited.
pub trait Editor {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);
}

/// Plain in-memory editor buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferEditor {
    text: String,
}

impl BufferEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Editor for BufferEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Text shown under the editor, flagged when it reports a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArea {
    pub text: String,
    pub is_error: bool,
}

impl Default for OutputArea {
    fn default() -> Self {
        Self {
            text: IDLE_OUTPUT.to_string(),
            is_error: false,
        }
    }
}

impl OutputArea {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user backed out of input collection; nothing was sent.
    Cancelled,
    Succeeded,
    Failed,
}

/// The editor and exercise pages: collect input, call the service, show the result.
pub struct Playground<S> {
    client: PlaygroundClient,
    collector: InputCollector<S>,
    output: OutputArea,
}

impl<S: PromptSurface> Playground<S> {
    pub fn new(client: PlaygroundClient, surface: S, placeholders: Placeholders) -> Self {
        Self {
            client,
            collector: InputCollector::new(surface, placeholders),
            output: OutputArea::default(),
        }
    }

    pub fn output(&self) -> &OutputArea {
        &self.output
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn surface(&self) -> &S {
        self.collector.surface()
    }

    /// Run the editor's code. Input is collected first; a cancelled
    /// collection returns before any request is made and leaves the output
    /// area untouched.
    pub async fn run_code(&mut self, editor: &dyn Editor, language: Language) -> RunOutcome {
        let code = editor.text();

        let input = match self.collector.collect_all_inputs(&code, language).await {
            Ok(input) => input,
            Err(CollectError::Cancelled) => return RunOutcome::Cancelled,
            Err(e) => {
                warn!(error = %e, "Input collection failed");
                self.output.show_error(CommandError::Collect(e).to_string());
                return RunOutcome::Failed;
            }
        };

        match self.client.run_code(&code, &input, language).await {
            Ok(response) if response.success => {
                let text = response
                    .output
                    .filter(|out| !out.is_empty())
                    .unwrap_or_else(|| EMPTY_OUTPUT.to_string());
                self.output.show(text);
                RunOutcome::Succeeded
            }
            Ok(response) => {
                self.output
                    .show_error(response.error.unwrap_or_else(|| "Execution failed".to_string()));
                RunOutcome::Failed
            }
            Err(e) => {
                warn!(error = %e, "Run request failed");
                self.output.show_error(CommandError::Client(e).to_string());
                RunOutcome::Failed
            }
        }
    }

    /// Submit the editor's code for judging and summarise the verdict.
    pub async fn submit_answer(
        &mut self,
        editor: &dyn Editor,
        exercise_id: u64,
    ) -> Result<JudgeResult, CommandError> {
        let code = editor.text();
        let result = match self.client.submit_answer(exercise_id, &code).await {
            Ok(result) => result,
            Err(e) => {
                let err = CommandError::Client(e);
                self.output.show_error(err.to_string());
                return Err(err);
            }
        };

        if !result.success {
            let err = CommandError::Service(
                result.error.clone().unwrap_or_else(|| "Judging failed".to_string()),
            );
            self.output.show_error(err.to_string());
            return Err(err);
        }

        info!(
            exercise_id,
            correct = result.is_correct,
            passed = ?result.passed_cases,
            total = ?result.total_cases,
            "Answer judged"
        );
        self.output.show(judge_summary(&result));
        Ok(result)
    }

    /// Fetch an exercise and load its starter code into the editor.
    pub async fn load_exercise(
        &mut self,
        editor: &mut dyn Editor,
        exercise_id: u64,
    ) -> Result<Exercise, CommandError> {
        let envelope = self.client.fetch_exercise(exercise_id).await?;
        let exercise = match (envelope.success, envelope.data) {
            (true, Some(exercise)) => exercise,
            _ => {
                return Err(CommandError::Service(
                    envelope.error.unwrap_or_else(|| "Failed to load exercise".to_string()),
                ))
            }
        };

        if let Some(code) = exercise.initial_code.clone() {
            editor.set_text(code);
        }
        Ok(exercise)
    }

    pub async fn fetch_solution(&self, exercise_id: u64) -> Result<Solution, CommandError> {
        let envelope = self.client.fetch_solution(exercise_id).await?;
        match (envelope.success, envelope.data) {
            (true, Some(solution)) => Ok(solution),
            _ => Err(CommandError::Service(
                envelope.error.unwrap_or_else(|| "No solution available".to_string()),
            )),
        }
    }
}

/// One-paragraph verdict; the per-case list is left to the caller.
pub fn judge_summary(result: &JudgeResult) -> String {
    if result.is_manual() {
        let mut text = "Self-check exercise, not judged automatically.".to_string();
        if let Some(hint) = result.hint_prompt.as_deref().filter(|h| !h.is_empty()) {
            text.push_str("\nReference prompt:\n");
            text.push_str(hint);
        }
        return text;
    }

    let mut text = match result.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => match (result.is_correct, result.passed_cases, result.total_cases) {
            (true, _, _) => "All tests passed!".to_string(),
            (false, Some(passed), Some(total)) => format!("Passed {} / {} tests", passed, total),
            (false, _, _) => "Some tests failed".to_string(),
        },
    };
    if let Some(out) = result.code_output.as_deref().filter(|o| !o.is_empty()) {
        text.push_str("\nProgram output:\n");
        text.push_str(out);
    }
    if let Some(err) = result.code_error.as_deref().filter(|e| !e.is_empty()) {
        text.push_str("\nProgram error:\n");
        text.push_str(err);
    }
    text
}
