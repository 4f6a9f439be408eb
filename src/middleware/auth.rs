//! Token verification middleware.
//!
//! Runs before the role gate and before any handler. On success it binds an
//! [`AuthContext`] into the request extensions; binding is all-or-nothing, so
//! downstream logic never observes a partially authenticated request.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The authenticated identity bound to a request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub actor_id: Uuid,
    pub username: String,
    pub role: Role,
}

/// Middleware that verifies the `Authorization: Bearer <token>` header.
///
/// Failure modes, all 401: missing header, malformed header, expired token,
/// and any other verification failure. On success the request continues with
/// the actor bound into its extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::NoToken)?;

    let token = parse_bearer(header_value.to_str().map_err(|_| AppError::MalformedToken)?)?;

    let claims = verify_token(token, &state.jwt_config)?;

    // A well-signed token whose subject is not a uuid was not issued by us.
    let actor_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    req.extensions_mut().insert(AuthContext {
        actor_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Extract the token from a `Bearer <token>` header value.
fn parse_bearer(value: &str) -> Result<&str, AppError> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AppError::MalformedToken);
    }

    Ok(parts[1])
}

/// Extractor yielding the bound [`AuthContext`] to handlers.
///
/// Mutating handlers take this to stamp the actor onto their persistence
/// calls. The gate runs before any handler, so an absent context here is an
/// invariant violation, not a client error: the request fails rather than
/// recording an unattributable change.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(AuthUser)
            .ok_or(AppError::ActorPropagationFailure)
    }
}
