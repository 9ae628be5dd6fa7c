use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, MeResponse, MessageResponse, SignupRequest, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    errors::AppError,
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.first_name = payload.first_name.trim().to_string();
    payload.last_name = payload.last_name.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();

    if payload.password != payload.confirm_password {
        warn!("signup password mismatch");
        return Err(AppError::Validation("Passwords do not match".into()));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 6 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    if payload.first_name.is_empty() || payload.last_name.is_empty() {
        return Err(AppError::Validation(
            "First and last name are required".into(),
        ));
    }

    // Ensure email is not taken
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Validation("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &hash,
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(MessageResponse {
        message: "Signup successful".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    // Same message for unknown email and bad password; never disclose which.
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            AppError::Auth("Invalid email or password".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Auth("Invalid email or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id, &user.first_name)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
        first_name: user.first_name,
        user_id: user.id,
    }))
}

#[instrument(skip_all)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    })
}
