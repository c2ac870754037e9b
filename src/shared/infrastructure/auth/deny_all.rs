use crate::shared::infrastructure::auth::{AuthError, Authorizer};
use axum::http::HeaderMap;

/// Rejects every request whatever credentials it carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait::async_trait]
impl Authorizer for DenyAll {
    async fn authorize(&self, _headers: &HeaderMap) -> Result<(), AuthError> {
        Err(AuthError::MissingToken)
    }
}
