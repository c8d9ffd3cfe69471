use super::{ClientResult, PlaygroundClient, RunRequest, RunResponse};
use crate::detection::Language;
use tracing::instrument;

impl PlaygroundClient {
    /// Execute `code` remotely with `input` as its whole stdin.
    #[instrument(skip(self, code, input), fields(code_length = code.len(), input_length = input.len()))]
    pub async fn run_code(
        &self,
        code: &str,
        input: &str,
        language: Language,
    ) -> ClientResult<RunResponse> {
        let url = self.endpoint("api/code/run")?;
        let body = RunRequest {
            code: code.to_string(),
            input: input.to_string(),
            language,
        };
        self.send_json(self.http.post(url).json(&body)).await
    }
}
