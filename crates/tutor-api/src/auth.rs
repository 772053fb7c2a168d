//! Password hashing and the HTTP Basic-auth extractor.
//!
//! Clients send `Authorization: Basic base64(email:password)` on every
//! authenticated request; the password is checked against the stored argon2
//! hash.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, header, request::Parts},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use rand_core::OsRng;
use tutor_core::{oracle::ContentOracle, store::TutorStore, user::User};

use crate::{AppState, error::ApiError};

/// Hash `password` into a PHC string (`$argon2id$v=19$…`).
pub fn hash_password(password: &str) -> Result<String, ApiError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| ApiError::Internal(format!("password hashing: {e}")))
}

pub fn verify_password(password: &str, phc: &str) -> bool {
  PasswordHash::new(phc).is_ok_and(|parsed| {
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed)
      .is_ok()
  })
}

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String { email.trim().to_lowercase() }

/// Decode `email:password` from a Basic `Authorization` header.
pub fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
  let header_val = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
  let creds   = String::from_utf8(decoded).map_err(|_| ApiError::Unauthorized)?;

  let (email, password) = creds.split_once(':').ok_or(ApiError::Unauthorized)?;
  Ok((email.to_owned(), password.to_owned()))
}

/// Look up `email` and check `password` against its stored hash.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub async fn authenticate<S: TutorStore>(
  store: &S,
  email: &str,
  password: &str,
) -> Result<User, ApiError> {
  let creds = store
    .find_credentials(normalize_email(email))
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::Unauthorized)?;

  if verify_password(password, &creds.password_hash) {
    Ok(creds.user)
  } else {
    Err(ApiError::Unauthorized)
  }
}

/// The authenticated user. Present in a handler means the request carried
/// valid credentials for an existing account.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S, O> FromRequestParts<AppState<S, O>> for AuthUser
where
  S: TutorStore + 'static,
  O: ContentOracle + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S, O>,
  ) -> Result<Self, Self::Rejection> {
    let (email, password) = basic_credentials(&parts.headers)?;
    let user = authenticate(state.store.as_ref(), &email, &password).await?;
    Ok(AuthUser(user))
  }
}
