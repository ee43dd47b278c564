use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest},
        extractors::AuthUser,
        repo,
        repo_types::User,
        services::{hash_password, is_valid_email, verify_password, JwtKeys},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn required_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    match (email, password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => {
            Ok((e.trim().to_lowercase(), p))
        }
        _ => Err(ApiError::Validation(
            "Email and password are required".into(),
        )),
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (email, password) = required_credentials(payload.email, payload.password)?;

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    if password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    // Ensure email is not taken
    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::Conflict("User already exists".into()));
    }

    // Argon2 is CPU-bound; keep it off the async workers.
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(anyhow::Error::from)??;

    let user = match User::create(&state.db, &email, &hash).await {
        Ok(u) => u,
        // Lost the race to the unique email index.
        Err(e) if repo::is_unique_violation(&e) => {
            warn!(email = %email, "email already registered");
            return Err(ApiError::Conflict("User already exists".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = required_credentials(payload.email, payload.password)?;

    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::Auth("Invalid email or password".into()));
        }
    };

    let password_hash = user.password_hash.clone();
    let ok = tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(anyhow::Error::from)??;

    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Auth("Invalid email or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse { token }))
}

#[instrument(skip(state, user), fields(user_id = %user.id, email = %user.email))]
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let record = User::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::Auth("Unauthorized".into()))?;

    Ok(Json(PublicUser {
        id: record.id,
        email: record.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn required_credentials_normalizes_email() {
        let (email, password) =
            required_credentials(Some("  Alice@Example.COM ".into()), Some("hunter22".into()))
                .unwrap();
        assert_eq!(email, "alice@example.com");
        assert_eq!(password, "hunter22");
    }

    #[test]
    fn required_credentials_rejects_missing_or_empty_fields() {
        for (email, password) in [
            (None, Some("secret-password".to_string())),
            (Some("a@b.co".to_string()), None),
            (Some("".to_string()), Some("secret-password".to_string())),
            (Some("a@b.co".to_string()), Some("".to_string())),
            (None, None),
        ] {
            let err = required_credentials(email, password).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn me_response_serialization() {
        let json = serde_json::to_string(&PublicUser {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
        })
        .unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("id"));
        assert!(!json.contains("password"));
    }
}
