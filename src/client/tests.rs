use super::*;
use crate::detection::Language;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio::net::TcpListener;

fn client_for(base_url: &str) -> PlaygroundClient {
    PlaygroundClient::new(&ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn run_code_posts_code_input_and_language() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/code/run")
        .match_body(Matcher::Json(json!({
            "code": "print(input())",
            "input": "Ann",
            "language": "python"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "output": "Hi Ann\n"}"#)
        .create_async()
        .await;
    let client = client_for(&server.url());

    let response = client
        .run_code("print(input())", "Ann", Language::Python)
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.output.as_deref(), Some("Hi Ann\n"));
    mock.assert_async().await;
}

#[tokio::test]
async fn error_bodies_are_decoded_despite_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/code/run")
        .match_body(Matcher::PartialJson(json!({"language": "c"})))
        .with_status(400)
        .with_body(r#"{"success": false, "error": "No code"}"#)
        .create_async()
        .await;
    let client = client_for(&server.url());

    let response = client.run_code("", "", Language::C).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("No code"));
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_error_maps_to_http_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/exercises/7/submit")
        .match_body(Matcher::Json(json!({"code": "x = 1"})))
        .with_status(502)
        .with_body("upstream down")
        .create_async()
        .await;
    let client = client_for(&server.url());

    let err = client.submit_answer(7, "x = 1").await.unwrap_err();
    match err {
        ClientError::Http { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Server error: upstream down");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/playground/api/exercises/3/solution")
        .with_status(200)
        .with_body(r#"{"success": true, "data": {"hint": "Use a loop"}}"#)
        .create_async()
        .await;
    let client = client_for(&format!("{}/playground", server.url()));

    let envelope = client.fetch_solution(3).await.unwrap();
    assert_eq!(
        envelope.data.and_then(|s| s.hint).as_deref(),
        Some("Use a loop")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_decodes_checker_verdict() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/exercises/11/submit")
        .with_status(200)
        .with_body(
            r#"{
                "success": true,
                "is_correct": false,
                "total_cases": 2,
                "passed_cases": 1,
                "results": [
                    {"case_id": 1, "passed": true, "expected": "3", "actual": "3", "error": null, "description": "small"},
                    {"case_id": 2, "passed": false, "expected": "4", "actual": "3", "error": "", "description": "carry"}
                ],
                "code_output": "3\n",
                "code_error": "",
                "message": "通过 1/2 个测试用例"
            }"#,
        )
        .create_async()
        .await;
    let client = client_for(&server.url());

    let result = client.submit_answer(11, "print(3)").await.unwrap();
    assert_eq!(result.total_cases, Some(2));
    assert_eq!(result.passed_cases, Some(1));
    assert_eq!(result.results.len(), 2);
    assert_eq!(result.results[1].description.as_deref(), Some("carry"));
    assert!(!result.results[1].passed);
    assert_eq!(result.message.as_deref(), Some("通过 1/2 个测试用例"));
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_service_is_a_connect_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));
    let err = client.run_code("x", "", Language::Python).await.unwrap_err();
    assert!(matches!(err, ClientError::Connect));
}

#[test]
fn function_test_results_decode() {
    let result: JudgeResult = serde_json::from_str(
        r#"{
            "success": true,
            "is_correct": false,
            "total_cases": 1,
            "passed_cases": 0,
            "results": [
                {"case_id": 1, "passed": false, "input": "add(1, 2)", "expected": "3", "actual": "NameError", "error": "NameError: name 'add' is not defined"}
            ],
            "code_output": "",
            "code_error": "NameError: name 'add' is not defined",
            "message": "通过 0/1 个测试用例",
            "extra": "ignored"
        }"#,
    )
    .unwrap();
    assert_eq!(result.results[0].input.as_deref(), Some("add(1, 2)"));
    assert!(result.results[0].error.as_deref().unwrap().starts_with("NameError"));
    assert!(!result.is_manual());

    let manual: JudgeResult =
        serde_json::from_str(r#"{"success": true, "test_type": "manual", "hint_prompt": "Try it"}"#)
            .unwrap();
    assert!(manual.is_manual());
}

#[test]
fn exercise_language_defaults_to_python() {
    let envelope: ApiEnvelope<Exercise> = serde_json::from_str(
        r#"{"success": true, "data": {"id": 4, "title": "Sum", "difficulty": 2, "language": null}}"#,
    )
    .unwrap();
    let exercise = envelope.data.unwrap();
    assert_eq!(exercise.language(), Language::Python);
    assert_eq!(exercise.difficulty_label(), "Medium");

    let c: Exercise =
        serde_json::from_str(r#"{"id": 5, "title": "Echo", "language": "c", "initial_code": "int main(){}"}"#)
            .unwrap();
    assert_eq!(c.language(), Language::C);
}

#[test]
fn null_difficulty_is_unknown() {
    let exercise: Exercise =
        serde_json::from_str(r#"{"id": 6, "title": "Draft", "difficulty": null}"#).unwrap();
    assert_eq!(exercise.difficulty, None);
    assert_eq!(exercise.difficulty_label(), "Unknown");
}
