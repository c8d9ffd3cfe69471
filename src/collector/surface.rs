use async_trait::async_trait;
use std::collections::VecDeque;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stderr, Stdin};

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Prompt surface I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
    /// Progress text such as `Input 2 / 3`, empty for single-input programs.
    pub hint: String,
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Raw value as typed, possibly empty.
    Submitted(String),
    Cancelled,
    /// Closed without choosing (window closed, stream ended).
    Dismissed,
}

/// Anything that can show a single prompt and wait for one line of text.
///
/// Only one prompt is ever in flight; the collector awaits each call before
/// issuing the next.
#[async_trait]
pub trait PromptSurface: Send {
    async fn present(&mut self, request: PromptRequest) -> Result<PromptOutcome, SurfaceError>;
}

/// Line-oriented prompt on a terminal.
///
/// Prompts are written to `writer` (stderr for the real terminal so program
/// output on stdout stays clean). End of input dismisses; a line equal to
/// `cancel_word` cancels.
pub struct TerminalSurface<R, W> {
    reader: R,
    writer: W,
    cancel_word: String,
}

impl TerminalSurface<BufReader<Stdin>, Stderr> {
    pub fn stdio(cancel_word: impl Into<String>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr(), cancel_word)
    }
}

impl<R, W> TerminalSurface<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, cancel_word: impl Into<String>) -> Self {
        Self {
            reader,
            writer,
            cancel_word: cancel_word.into(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<R, W> PromptSurface for TerminalSurface<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&mut self, request: PromptRequest) -> Result<PromptOutcome, SurfaceError> {
        if !request.hint.is_empty() {
            self.writer
                .write_all(format!("[{}] ", request.hint).as_bytes())
                .await?;
        }
        self.writer.write_all(request.prompt.as_bytes()).await?;
        if !request.prompt.ends_with(' ') {
            self.writer.write_all(b" ").await?;
        }
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(PromptOutcome::Dismissed);
        }

        let value = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if !self.cancel_word.is_empty() && value == self.cancel_word {
            return Ok(PromptOutcome::Cancelled);
        }
        Ok(PromptOutcome::Submitted(value.to_string()))
    }
}

/// Answers prompts from a prepared list, dismissing once it runs dry.
///
/// Used for non-interactive runs where every value is known in advance.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    script: VecDeque<PromptOutcome>,
    presented: Vec<PromptRequest>,
}

impl ScriptedSurface {
    pub fn new(script: impl IntoIterator<Item = PromptOutcome>) -> Self {
        Self {
            script: script.into_iter().collect(),
            presented: Vec::new(),
        }
    }

    pub fn answering<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(|v| PromptOutcome::Submitted(v.into())))
    }

    /// Every prompt shown so far, in order.
    pub fn presented(&self) -> &[PromptRequest] {
        &self.presented
    }
}

#[async_trait]
impl PromptSurface for ScriptedSurface {
    async fn present(&mut self, request: PromptRequest) -> Result<PromptOutcome, SurfaceError> {
        self.presented.push(request);
        Ok(self.script.pop_front().unwrap_or(PromptOutcome::Dismissed))
    }
}
