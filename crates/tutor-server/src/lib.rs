//! HTTP server assembly for the tutoring backend.
//!
//! Loads [`ServerConfig`] and wraps [`tutor_api::api_router`] with the
//! transport layers: CORS, request tracing and the body size limit.

use std::path::{Path, PathBuf};

use axum::{
  Json, Router,
  extract::DefaultBodyLimit,
  http::{HeaderValue, Method, header},
  routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tutor_api::AppState;
use tutor_core::{oracle::ContentOracle, store::TutorStore};
use tutor_oracle::OracleConfig;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TUTOR_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  /// Browser origins allowed to call the API with credentials.
  pub allowed_origins:  Vec<String>,
  /// Large enough for base64 photos of handwritten answers.
  pub body_limit_bytes: usize,
  pub oracle:           OracleConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_owned(),
      port:             3000,
      store_path:       PathBuf::from("tutor.db"),
      allowed_origins:  vec!["http://localhost:5173".to_owned()],
      body_limit_bytes: 10 * 1024 * 1024,
      oracle:           OracleConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under the environment.
  ///
  /// `TUTOR_PORT=8080`, `TUTOR_ORACLE__API_KEY=sk-...`,
  /// `TUTOR_ALLOWED_ORIGINS=https://a.example,https://b.example`.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_sources(
      config::File::from(path).required(false),
      config::Environment::with_prefix("TUTOR")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("allowed_origins")
        .try_parsing(true),
    )
  }

  fn from_sources<F, E>(file: F, env: E) -> Result<Self, config::ConfigError>
  where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// CORS for the configured origins. Unparseable origins are skipped.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
  let origins: Vec<HeaderValue> = config
    .allowed_origins
    .iter()
    .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!(origin, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(origins)
    .allow_credentials(true)
    .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
    .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn health() -> Json<Value> {
  Json(json!({ "status": "ok", "message": "tutoring API is running" }))
}

/// The complete application: `/health` plus the API under `/api`.
pub fn app<S, O>(state: AppState<S, O>, config: &ServerConfig) -> Router
where
  S: TutorStore + 'static,
  O: ContentOracle + 'static,
{
  Router::new()
    .route("/health", get(health))
    .nest("/api", tutor_api::api_router(state))
    .layer(DefaultBodyLimit::max(config.body_limit_bytes))
    .layer(cors_layer(config))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use config::FileFormat;
  use tower::ServiceExt as _;
  use tutor_oracle::OpenAiOracle;
  use tutor_store_sqlite::SqliteStore;

  async fn test_app(config: &ServerConfig) -> Router {
    let store  = SqliteStore::open_in_memory().await.unwrap();
    let oracle = OpenAiOracle::new(config.oracle.clone()).unwrap();
    app(AppState::new(store, oracle), config)
  }

  fn from_toml(toml: &str) -> ServerConfig {
    ServerConfig::from_sources(
      config::File::from_str(toml, FileFormat::Toml),
      config::Environment::with_prefix("TUTOR_TEST_UNSET"),
    )
    .unwrap()
  }

  #[test]
  fn empty_config_uses_defaults() {
    let config = from_toml("");
    assert_eq!(config.port, 3000);
    assert_eq!(config.body_limit_bytes, 10 * 1024 * 1024);
    assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
    assert_eq!(config.oracle.model, "gpt-3.5-turbo");
  }

  #[test]
  fn file_overrides_nested_oracle_settings() {
    let config = from_toml(
      r#"
        port = 8080
        allowed_origins = ["https://tutor.example"]

        [oracle]
        api_key = "sk-test"
        timeout_secs = 15
      "#,
    );
    assert_eq!(config.address(), "127.0.0.1:8080");
    assert_eq!(config.allowed_origins, vec!["https://tutor.example"]);
    assert_eq!(config.oracle.api_key, "sk-test");
    assert_eq!(config.oracle.timeout_secs, 15);
    assert_eq!(config.oracle.base_url, "https://api.openai.com");
  }

  #[tokio::test]
  async fn health_is_ok() {
    let app  = test_app(&ServerConfig::default()).await;
    let req  = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
  }

  #[tokio::test]
  async fn api_is_nested() {
    let app  = test_app(&ServerConfig::default()).await;
    let req  = Request::builder().uri("/api/taxonomy").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn cors_allows_only_configured_origins() {
    let app = test_app(&ServerConfig::default()).await;

    let preflight = |origin: &str| {
      Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/content/progress")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap()
    };

    let resp = app.clone().oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "http://localhost:5173"
    );
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
      "true"
    );

    let resp = app.oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
  }

  #[tokio::test]
  async fn oversized_body_is_rejected() {
    let config = ServerConfig { body_limit_bytes: 64, ..ServerConfig::default() };
    let app    = test_app(&config).await;

    let body = serde_json::to_string(&json!({ "padding": "x".repeat(256) })).unwrap();
    let req  = Request::builder()
      .method(Method::POST)
      .uri("/api/auth/login")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body))
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
  }
}
