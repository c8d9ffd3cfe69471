//! Sequential collection of program input, one prompt per detected read call.

pub mod session;
pub mod surface;

pub use session::{InputSession, StepState};
pub use surface::{
    PromptOutcome, PromptRequest, PromptSurface, ScriptedSurface, SurfaceError, TerminalSurface,
};

use crate::detection::{Detector, Language, Placeholders};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CollectError {
    /// The user backed out. Not a failure; callers stop silently.
    #[error("cancelled")]
    Cancelled,
    #[error("Cannot {action} while step is {from:?}")]
    InvalidTransition {
        from: StepState,
        action: &'static str,
    },
}

impl CollectError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CollectError::Cancelled)
    }
}

pub struct InputCollector<S> {
    surface: S,
    placeholders: Placeholders,
}

impl<S: PromptSurface> InputCollector<S> {
    pub fn new(surface: S, placeholders: Placeholders) -> Self {
        Self {
            surface,
            placeholders,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Ask for every value `source` is expected to read and join them with
    /// newlines, ready to be fed to the program's stdin.
    ///
    /// Nothing is shown when no read call is detected. Cancelling or
    /// dismissing any prompt ends the whole session with
    /// [`CollectError::Cancelled`]; values typed before that are discarded.
    pub async fn collect_all_inputs(
        &mut self,
        source: &str,
        language: Language,
    ) -> Result<String, CollectError> {
        let detection = Detector::detect(source, language, &self.placeholders);
        if !detection.needs_input() {
            return Ok(String::new());
        }

        let mut session = InputSession::new(detection, &self.placeholders);
        info!(
            session = %session.id(),
            language = %session.language(),
            total = session.total(),
            "Collecting program input"
        );

        while let Some(request) = session.show_next()? {
            let index = request.index;
            match self.surface.present(request).await {
                Ok(PromptOutcome::Submitted(value)) => {
                    debug!(session = %session.id(), index, length = value.len(), "Input submitted");
                    session.submit(value)?;
                }
                Ok(PromptOutcome::Cancelled) | Ok(PromptOutcome::Dismissed) => {
                    info!(session = %session.id(), index, "Input collection cancelled");
                    return Err(session.cancel());
                }
                Err(e) => {
                    warn!(session = %session.id(), index, error = %e, "Prompt surface failed");
                    return Err(session.cancel());
                }
            }
        }

        session.finish()
    }
}
