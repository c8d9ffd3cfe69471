use super::{CollectError, PromptRequest};
use crate::detection::{Detection, Language, Placeholders};
use uuid::Uuid;

/// Per-step modal state: `Idle -> Shown -> {Submitted | Cancelled}`.
///
/// `Submitted` holds until the next step is shown or the session finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Idle,
    Shown,
    Submitted,
    Cancelled,
}

/// Transient state of one collection run. Never persisted; dropping it
/// discards whatever was typed so far.
#[derive(Debug)]
pub struct InputSession {
    id: Uuid,
    language: Language,
    total: usize,
    prompts: Vec<String>,
    fallback: String,
    index: usize,
    state: StepState,
    collected: Vec<String>,
}

impl InputSession {
    pub fn new(detection: Detection, placeholders: &Placeholders) -> Self {
        Self {
            id: Uuid::new_v4(),
            language: detection.language,
            total: detection.count,
            prompts: detection.prompts,
            fallback: placeholders.for_language(detection.language).to_string(),
            index: 0,
            state: StepState::Idle,
            collected: Vec::with_capacity(detection.count),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.collected.len() == self.total
    }

    fn is_settled(&self) -> bool {
        matches!(self.state, StepState::Idle | StepState::Submitted)
    }

    /// Move the current step to `Shown` and describe what to display.
    /// Returns `None` once every value has been collected.
    pub fn show_next(&mut self) -> Result<Option<PromptRequest>, CollectError> {
        if !self.is_settled() {
            return Err(CollectError::InvalidTransition {
                from: self.state,
                action: "show",
            });
        }
        self.state = StepState::Idle;
        if self.is_complete() {
            return Ok(None);
        }

        let prompt = self
            .prompts
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());
        let hint = if self.total > 1 {
            format!("Input {} / {}", self.index + 1, self.total)
        } else {
            String::new()
        };

        self.state = StepState::Shown;
        Ok(Some(PromptRequest {
            prompt,
            hint,
            index: self.index,
            total: self.total,
        }))
    }

    /// Record the value for the shown step.
    pub fn submit(&mut self, value: String) -> Result<(), CollectError> {
        if self.state != StepState::Shown {
            return Err(CollectError::InvalidTransition {
                from: self.state,
                action: "submit",
            });
        }
        self.collected.push(value);
        self.index += 1;
        self.state = StepState::Submitted;
        Ok(())
    }

    /// Abandon the session. Collected values are dropped with it.
    pub fn cancel(mut self) -> CollectError {
        self.state = StepState::Cancelled;
        self.collected.clear();
        CollectError::Cancelled
    }

    /// Join every collected value with newlines.
    pub fn finish(self) -> Result<String, CollectError> {
        if !self.is_settled() || !self.is_complete() {
            return Err(CollectError::InvalidTransition {
                from: self.state,
                action: "finish",
            });
        }
        Ok(self.collected.join("\n"))
    }
}
