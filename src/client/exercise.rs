use super::{ApiEnvelope, ClientResult, Exercise, JudgeResult, PlaygroundClient, Solution, SubmitRequest};
use tracing::instrument;

impl PlaygroundClient {
    #[instrument(skip(self))]
    pub async fn fetch_exercise(&self, exercise_id: u64) -> ClientResult<ApiEnvelope<Exercise>> {
        let url = self.endpoint(&format!("api/exercises/{}", exercise_id))?;
        self.send_json(self.http.get(url)).await
    }

    /// Submit an answer for judging. Exercises are judged against their own
    /// test inputs, so no program input is sent.
    #[instrument(skip(self, code), fields(code_length = code.len()))]
    pub async fn submit_answer(&self, exercise_id: u64, code: &str) -> ClientResult<JudgeResult> {
        let url = self.endpoint(&format!("api/exercises/{}/submit", exercise_id))?;
        let body = SubmitRequest {
            code: code.to_string(),
        };
        self.send_json(self.http.post(url).json(&body)).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_solution(&self, exercise_id: u64) -> ClientResult<ApiEnvelope<Solution>> {
        let url = self.endpoint(&format!("api/exercises/{}/solution", exercise_id))?;
        self.send_json(self.http.get(url)).await
    }
}
