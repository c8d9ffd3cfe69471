use crate::detection::Language;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub code: String,
    pub input: String,
    pub language: Language,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResponse {
    pub success: bool,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub code: String,
}

/// Outcome of one judged test case.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCaseResult {
    #[serde(default)]
    pub case_id: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    /// Runtime error of the program on this case, if any.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub passed: bool,
}

/// Structured response of the submit endpoint. Fields the service does not
/// send stay at their defaults; unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct JudgeResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub test_type: Option<String>,
    #[serde(default)]
    pub hint_prompt: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub passed_cases: Option<u32>,
    #[serde(default)]
    pub total_cases: Option<u32>,
    /// Output and error of the first case, shown as the program's run.
    #[serde(default)]
    pub code_output: Option<String>,
    #[serde(default)]
    pub code_error: Option<String>,
    #[serde(default)]
    pub results: Vec<TestCaseResult>,
    /// Verdict text composed by the service; preferred over a local summary.
    #[serde(default)]
    pub message: Option<String>,
}

impl JudgeResult {
    /// Self-check exercises are not auto-judged.
    pub fn is_manual(&self) -> bool {
        self.test_type.as_deref() == Some("manual")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 1 easy, 2 medium, 3 hard.
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub initial_code: Option<String>,
}

impl Exercise {
    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    pub fn difficulty_label(&self) -> &'static str {
        match self.difficulty {
            Some(1) => "Easy",
            Some(2) => "Medium",
            Some(3) => "Hard",
            _ => "Unknown",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
}

/// `{success, data, error}` wrapper used by the exercise endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}
