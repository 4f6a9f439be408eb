use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

/// Issue a signed token for the given credential.
///
/// Expiry is `issued_at + ttl`; the claims are immutable once signed.
pub fn create_token(
    user_id: Uuid,
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.ttl;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role,
        iat: now as usize,
        exp: exp as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {e}")))
}

/// Verify a token and return its claims.
///
/// The algorithm is pinned to HS256, so `"none"` and asymmetric-substitution
/// tokens fail as invalid regardless of their signature. Expiry is checked
/// with zero leeway and reported as [`AppError::ExpiredToken`], distinct from
/// every other failure, so clients can re-authenticate instead of treating
/// the token as forged.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::ExpiredToken,
        _ => AppError::InvalidToken,
    })
}
