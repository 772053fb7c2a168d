//! Handlers for `/auth` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/auth/signup`  | Body: `{"email","password","name","grade"}`; 409 on duplicate email |
//! | `POST`   | `/auth/login`   | Body: `{"email","password"}`; 401 on bad credentials |
//! | `GET`    | `/auth/profile` | Basic auth |
//! | `DELETE` | `/auth/profile` | Basic auth; removes the account and everything it owns |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tutor_core::{
  oracle::ContentOracle,
  store::TutorStore,
  syllabus,
  user::{NewUser, User},
};

use crate::{
  AppState,
  auth::{self, AuthUser},
  error::ApiError,
  validate::required,
};

pub const MIN_PASSWORD_LEN: usize = 8;

// ─── Signup ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupBody {
  pub email:    String,
  pub password: String,
  pub name:     String,
  pub grade:    String,
}

/// `POST /auth/signup`
pub async fn signup<S, O>(
  State(state): State<AppState<S, O>>,
  Json(body): Json<SignupBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let email = auth::normalize_email(required("email", &body.email)?);
  // `:` would split the Basic credentials in the wrong place.
  if !email.contains('@') || email.contains(':') {
    return Err(ApiError::BadRequest(format!("invalid email address {email:?}")));
  }
  if body.password.chars().count() < MIN_PASSWORD_LEN {
    return Err(ApiError::BadRequest(format!(
      "password must be at least {MIN_PASSWORD_LEN} characters"
    )));
  }
  let name  = required("name", &body.name)?;
  let grade = required("grade", &body.grade)?;
  if !syllabus::is_known_grade(grade) {
    return Err(ApiError::BadRequest(format!("unknown grade {grade:?}")));
  }

  let password_hash = auth::hash_password(&body.password)?;
  let user = state
    .store
    .create_user(NewUser {
      email: email.clone(),
      name: name.to_owned(),
      grade: grade.to_owned(),
      password_hash,
    })
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::Conflict(format!("{email} is already registered")))?;

  tracing::info!(user_id = user.user_id, grade = %user.grade, "user signed up");
  Ok((StatusCode::CREATED, Json(user)))
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

/// `POST /auth/login`: checks credentials and returns the profile. Later
/// requests authenticate with the same pair over HTTP Basic.
pub async fn login<S, O>(
  State(state): State<AppState<S, O>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<User>, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let email = required("email", &body.email)?;
  required("password", &body.password)?;

  let user = auth::authenticate(state.store.as_ref(), email, &body.password).await?;
  Ok(Json(user))
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// `GET /auth/profile`
pub async fn profile<S, O>(AuthUser(user): AuthUser) -> Json<User>
where
  S: TutorStore,
  O: ContentOracle,
{
  Json(user)
}

/// `DELETE /auth/profile`
pub async fn delete_profile<S, O>(
  State(state): State<AppState<S, O>>,
  AuthUser(user): AuthUser,
) -> Result<StatusCode, ApiError>
where
  S: TutorStore,
  O: ContentOracle,
{
  let deleted = state
    .store
    .delete_user(user.user_id)
    .await
    .map_err(ApiError::store)?;

  if !deleted {
    return Err(ApiError::NotFound(format!("user {} not found", user.user_id)));
  }
  Ok(StatusCode::NO_CONTENT)
}
