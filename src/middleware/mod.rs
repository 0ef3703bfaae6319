use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;

use crate::error::Error;
use crate::models::{User, VerifiedIdentity};

/// The authenticated caller, resolved from HTTP Basic credentials. This
/// extractor is the whole authentication boundary: handlers receive a
/// verified (name, email) pair and never see credentials.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

impl AuthUser {
    pub fn identity(&self) -> VerifiedIdentity {
        VerifiedIdentity {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl FromRequestParts<Arc<crate::AppState>> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::Unauthorized)?;

        let encoded = auth_header
            .strip_prefix("Basic ")
            .ok_or(Error::Unauthorized)?;

        let decoded = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| Error::Unauthorized)?;
        let credentials = String::from_utf8(decoded).map_err(|_| Error::Unauthorized)?;

        let mut parts = credentials.splitn(2, ':');
        let email = parts.next().ok_or(Error::Unauthorized)?;
        let password = parts.next().ok_or(Error::Unauthorized)?;

        let user = User::find_by_email(email, &state.db)
            .await?
            .ok_or(Error::Unauthorized)?;

        if !user.verify_password(password) {
            return Err(Error::Unauthorized);
        }

        Ok(AuthUser {
            user_id: user.id,
            name: user.display_name,
            email: user.email,
        })
    }
}
