use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hash a plaintext password with bcrypt and a per-call salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to hash password: {e}")))
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// A structurally invalid stored hash counts as "not matched" rather than an
/// error: the caller only ever learns that the credentials did not verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}
