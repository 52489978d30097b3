//! Session token issue and verification.
//!
//! A session is a signed HS256 JWT carrying `{sub, email, role}` with a
//! fixed 24-hour validity window. Verification is stateless; there is no
//! refresh or revocation, and logout is purely a client-side discard of
//! the token.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use corpsync_core::role::Role;

use crate::credentials::CredentialRecord;

/// Token validity window: 24 hours from issuance.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Authentication failures, surfaced verbatim as HTTP status + message.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. One message for both, so a
    /// failed login never reveals whether the account exists.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// No bearer token was presented.
    #[error("No token provided")]
    MissingToken,
    /// The token failed signature verification or has expired.
    #[error("Invalid or expired token")]
    InvalidToken,
    /// The token verified but its user id no longer exists.
    #[error("User not found")]
    UserNotFound,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Login email at issuance time.
    pub email: String,
    /// Role at issuance time.
    pub role: Role,
    /// Issued-at, seconds since epoch.
    pub iat: u64,
    /// Expiry, seconds since epoch.
    pub exp: u64,
}

/// Issues and verifies session tokens with a shared secret.
pub struct SessionIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionIssuer {
    /// Creates an issuer from the configured signing secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token for the given account, valid for
    /// [`TOKEN_TTL_SECS`] from now.
    ///
    /// # Errors
    ///
    /// Returns the underlying encoding error; with an HS256 secret this
    /// only fails on claim serialization.
    pub fn issue(&self, record: &CredentialRecord) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub: record.id.to_string(),
            email: record.email.clone(),
            role: record.role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for any verification failure;
    /// the caller cannot distinguish a bad signature from an expired
    /// token, matching the single 403 the API exposes.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
