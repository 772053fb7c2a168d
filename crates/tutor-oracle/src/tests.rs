//! HTTP-level tests for `OpenAiOracle` against a mock chat-completions server.

use std::time::Duration;

use serde_json::{Value, json};
use tutor_core::{
  TaxonomyLevel,
  conversation::TurnContext,
  oracle::{
    AssessRequest, ContentOracle, ConverseRequest, HandwritingRequest, ImageData,
    MaterialRequest, OracleError,
  },
};
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{body_partial_json, header, method, path},
};

use crate::{OpenAiOracle, OracleConfig};

fn oracle(server: &MockServer) -> OpenAiOracle {
  OpenAiOracle::new(OracleConfig {
    api_key: "test-key".into(),
    base_url: format!("{}/", server.uri()),
    timeout_secs: 1,
    ..OracleConfig::default()
  })
  .unwrap()
}

/// A chat-completions body whose message content is `payload` serialised.
fn completion(payload: &Value) -> Value {
  json!({
    "choices": [{
      "message": { "role": "assistant", "content": payload.to_string() }
    }]
  })
}

async fn respond_with(server: &MockServer, template: ResponseTemplate) {
  Mock::given(method("POST"))
    .and(path("/v1/chat/completions"))
    .respond_with(template)
    .mount(server)
    .await;
}

fn assess_request() -> AssessRequest {
  AssessRequest {
    question: "What is 3/4 + 1/4?".into(),
    answer:   "1".into(),
    level:    TaxonomyLevel::Apply,
  }
}

fn question(level: &str) -> Value {
  json!({
    "bloomLevel": level,
    "question": format!("A {level} question"),
    "solution": "Worked solution",
    "hint": "Think about it",
  })
}

// ─── Success paths ───────────────────────────────────────────────────────────

#[tokio::test]
async fn assess_sends_json_request_with_bearer_auth() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/v1/chat/completions"))
    .and(header("Authorization", "Bearer test-key"))
    .and(body_partial_json(json!({
      "model": "gpt-3.5-turbo",
      "response_format": { "type": "json_object" },
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion(&json!({
      "score": 85,
      "feedback": "Nice work",
      "strengths": "Correct sum",
      "improvements": "Show your steps",
    }))))
    .expect(1)
    .mount(&server)
    .await;

  let assessment = oracle(&server).assess(assess_request()).await.unwrap();
  assert_eq!(assessment.score.value(), 85.0);
  assert_eq!(assessment.feedback, "Nice work");
  assert!(assessment.recognized_text.is_none());
}

#[tokio::test]
async fn fenced_reply_is_unwrapped() {
  let server = MockServer::start().await;
  let fenced = "```json\n{\"score\": 40, \"feedback\": \"Try again\"}\n```";
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(json!({
      "choices": [{ "message": { "content": fenced } }]
    })),
  )
  .await;

  let assessment = oracle(&server).assess(assess_request()).await.unwrap();
  assert_eq!(assessment.score.value(), 40.0);
  assert_eq!(assessment.strengths, "");
}

#[tokio::test]
async fn study_material_questions_come_back_in_taxonomy_order() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(completion(&json!({
      "studyGuide": {
        "introduction": "Fractions describe parts of a whole.",
        "keyConcepts": ["Numerator", "Denominator"],
        "summary": "Fractions are parts of a whole.",
      },
      "questions": [
        question("Create"), question("Remember"), question("Evaluate"),
        question("Apply"), question("Understand"), question("Analyze"),
      ],
    }))),
  )
  .await;

  let content = oracle(&server)
    .generate_material(MaterialRequest {
      grade:   "4".into(),
      subject: "Mathematics".into(),
      topic:   "Fractions".into(),
    })
    .await
    .unwrap();

  let levels: Vec<_> = content.questions.iter().map(|q| q.bloom_level).collect();
  assert_eq!(levels, TaxonomyLevel::ALL);
  assert_eq!(content.study_guide.key_concepts.len(), 2);
}

#[tokio::test]
async fn converse_returns_reply() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(completion(&json!({
      "message": "Can you name three nouns?",
      "bloomLevel": "Remember",
      "suggestNextLevel": true,
      "feedback": "Great start",
    }))),
  )
  .await;

  let reply = oracle(&server)
    .converse(ConverseRequest {
      grade:   "2".into(),
      subject: "English".into(),
      topic:   "Nouns".into(),
      context: TurnContext::new(Vec::new(), TaxonomyLevel::Remember),
    })
    .await
    .unwrap();

  assert_eq!(reply.bloom_level, TaxonomyLevel::Remember);
  assert!(reply.suggest_next_level);
}

#[tokio::test]
async fn handwriting_uses_vision_model() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/v1/chat/completions"))
    .and(body_partial_json(json!({ "model": "gpt-4o-mini" })))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion(&json!({
      "recognizedText": "x = 4",
      "score": 100,
      "feedback": "Correct",
    }))))
    .expect(1)
    .mount(&server)
    .await;

  let assessment = oracle(&server)
    .assess_handwriting(HandwritingRequest {
      image:        ImageData::parse("data:image/png;base64,aGVsbG8=").unwrap(),
      question:     "Solve x + 1 = 5".into(),
      level:        TaxonomyLevel::Apply,
      typed_answer: None,
    })
    .await
    .unwrap();

  assert_eq!(assessment.recognized_text.as_deref(), Some("x = 4"));
  assert_eq!(assessment.score.value(), 100.0);
}

// ─── Failure paths ───────────────────────────────────────────────────────────

#[tokio::test]
async fn out_of_range_score_is_malformed() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200)
      .set_body_json(completion(&json!({ "score": 140, "feedback": "!" }))),
  )
  .await;

  let err = oracle(&server).assess(assess_request()).await.unwrap_err();
  assert!(matches!(err, OracleError::Malformed(_)), "{err:?}");
  assert!(!err.is_retryable());
}

#[tokio::test]
async fn missing_question_level_is_malformed() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(completion(&json!({
      "studyGuide": { "introduction": "Intro", "summary": "Sum" },
      "questions": [question("Remember"), question("Understand")],
    }))),
  )
  .await;

  let err = oracle(&server)
    .generate_material(MaterialRequest {
      grade:   "1".into(),
      subject: "Science".into(),
      topic:   "Plants".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(err, OracleError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn non_json_reply_is_malformed() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(json!({
      "choices": [{ "message": { "content": "Sorry, I cannot help with that." } }]
    })),
  )
  .await;

  let err = oracle(&server).assess(assess_request()).await.unwrap_err();
  assert!(matches!(err, OracleError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn empty_choices_is_malformed() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })),
  )
  .await;

  let err = oracle(&server).assess(assess_request()).await.unwrap_err();
  assert!(matches!(err, OracleError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn error_status_is_reported_without_retry() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/v1/chat/completions"))
    .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
    .expect(1)
    .mount(&server)
    .await;

  let err = oracle(&server).assess(assess_request()).await.unwrap_err();
  match err {
    OracleError::Status { code, ref body } => {
      assert_eq!(code, 503);
      assert_eq!(body, "overloaded");
    }
    other => panic!("expected status error, got {other:?}"),
  }
}

#[tokio::test]
async fn slow_oracle_times_out() {
  let server = MockServer::start().await;
  respond_with(
    &server,
    ResponseTemplate::new(200)
      .set_body_json(completion(&json!({ "score": 50 })))
      .set_delay(Duration::from_secs(3)),
  )
  .await;

  let err = oracle(&server).assess(assess_request()).await.unwrap_err();
  assert!(matches!(err, OracleError::Timeout), "{err:?}");
  assert!(err.is_retryable());
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
  let oracle = OpenAiOracle::new(OracleConfig {
    base_url: "http://localhost:8080/".into(),
    ..OracleConfig::default()
  })
  .unwrap();
  assert_eq!(oracle.config().base_url, "http://localhost:8080");
  assert_eq!(oracle.config().vision_model, "gpt-4o-mini");
}

#[test]
fn debug_redacts_api_key() {
  let config = OracleConfig { api_key: "sk-secret".into(), ..OracleConfig::default() };
  let rendered = format!("{config:?}");
  assert!(!rendered.contains("sk-secret"));
  assert!(rendered.contains("***"));
}
