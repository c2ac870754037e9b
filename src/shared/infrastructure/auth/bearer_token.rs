use crate::shared::infrastructure::auth::{AuthError, Authorizer};
use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Accepts requests carrying `Authorization: Bearer <token>` for one configured token.
#[derive(Debug, Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authorizer for BearerToken {
    async fn authorize(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;
        if presented.trim() == self.token {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
