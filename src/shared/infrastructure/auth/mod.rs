// Authorization gate run in front of every API route.
//
// The request is checked before any extractor runs, so an unauthorized caller
// never reaches input validation or the store.

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use thiserror::Error;

use crate::shared::infrastructure::http::error::ApiError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token de autenticación requerido")]
    MissingToken,

    #[error("Token de autenticación inválido")]
    InvalidToken,
}

#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, headers: &HeaderMap) -> Result<(), AuthError>;
}

pub async fn require_auth(
    State(authorizer): State<Arc<dyn Authorizer>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(error) = authorizer.authorize(request.headers()).await {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            %error,
            "request rejected by authorizer"
        );
        return Err(error.into());
    }
    Ok(next.run(request).await)
}

pub mod bearer_token;
pub mod deny_all;
