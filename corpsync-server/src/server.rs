//! HTTP surface: login and session-restore routes.
//!
//! Two JSON routes over axum:
//!
//! - `POST /api/login` — `{email, password}` in, `{user, token}` out.
//! - `GET /api/me` — `Authorization: Bearer <token>` in, the user out.
//!
//! Everything else the dashboard shows lives client-side; this server
//! only proves identity.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use corpsync_core::User;

use crate::credentials::{CredentialError, CredentialStore};
use crate::session::{AuthError, SessionIssuer};

/// Shared server state: the credential file handle and token issuer.
pub struct AppState {
    /// Credential file, re-read on every request.
    pub credentials: CredentialStore,
    /// Session token issue/verify.
    pub sessions: SessionIssuer,
}

/// Errors a handler can surface.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An authentication failure with a well-defined status and message.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The credential file could not be read or parsed.
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    /// Token encoding failed.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// JSON error body: `{ "message": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Auth(err) => {
                let status = match err {
                    AuthError::InvalidCredentials | AuthError::MissingToken => {
                        StatusCode::UNAUTHORIZED
                    }
                    AuthError::InvalidToken => StatusCode::FORBIDDEN,
                    AuthError::UserNotFound => StatusCode::NOT_FOUND,
                };
                (status, err.to_string())
            }
            Self::Credentials(err) => {
                tracing::error!(error = %err, "credential store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Token(err) => {
                tracing::error!(error = %err, "token encoding failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

/// `POST /api/login` request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password, compared against the stored bcrypt hash.
    pub password: String,
}

/// `POST /api/login` success body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// The authenticated user, password hash stripped.
    pub user: User,
    /// Signed session token, valid for 24 hours.
    pub token: String,
}

/// Builds the API router over the given state.
pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/api/login", post(login))
        .route("/api/me", get(me))
        .with_state(state)
}

/// Binds `bind_addr` and serves the API on a background task.
///
/// Returns the bound address (useful with port 0) and the join handle.
///
/// # Errors
///
/// Returns an I/O error if the listener cannot be bound.
pub async fn start_server(
    bind_addr: &str,
    state: Arc<AppState>,
) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "auth server error");
        }
    });

    Ok((addr, handle))
}

/// `POST /api/login`: verify email/password, issue a session token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(record) = state.credentials.find_by_email(&req.email)? else {
        tracing::info!(email = %req.email, "login rejected: unknown email");
        return Err(AuthError::InvalidCredentials.into());
    };

    // bcrypt's own compare, never a plaintext comparison. A malformed
    // stored hash reads as a failed login rather than a server error.
    let matches = bcrypt::verify(&req.password, &record.password).unwrap_or(false);
    if !matches {
        tracing::info!(email = %req.email, "login rejected: password mismatch");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.sessions.issue(&record)?;
    tracing::info!(user = %record.id, role = %record.role, "login succeeded");
    Ok(Json(LoginResponse {
        user: record.into_public(),
        token,
    }))
}

/// `GET /api/me`: verify the bearer token and return the current user.
async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<User>, ApiError> {
    let token = bearer_token(&headers)?;
    let claims = state.sessions.verify(token)?;
    let Some(record) = state.credentials.find_by_id(&claims.sub)? else {
        return Err(AuthError::UserNotFound.into());
    };
    Ok(Json(record.into_public()))
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)
}
