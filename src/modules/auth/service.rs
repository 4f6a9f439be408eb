use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Create a new credential. Fails with [`AppError::CredentialConflict`]
    /// if the username is taken.
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<Uuid, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(&dto.username)
                .fetch_one(db)
                .await?;

        if exists {
            return Err(AppError::CredentialConflict);
        }

        // bcrypt is CPU-bound; run it off the async workers so a slow hash
        // cannot stall unrelated requests.
        let password = dto.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hashing task failed: {e}")))??;

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&dto.username)
        .bind(&password_hash)
        .bind(dto.role)
        .fetch_one(db)
        .await?;

        Ok(id)
    }

    /// Authenticate a credential and issue a token.
    ///
    /// Unknown username and wrong password are indistinguishable outward;
    /// the difference survives only in server logs.
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        #[derive(sqlx::FromRow)]
        struct CredentialRow {
            id: Uuid,
            username: String,
            password_hash: String,
            role: Role,
        }

        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, username, password_hash, role FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?;

        let Some(row) = row else {
            debug!(username = %dto.username, "login attempt for unknown username");
            return Err(AppError::InvalidCredentials);
        };

        let password = dto.password;
        let stored_hash = row.password_hash.clone();
        let matched = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verification task failed: {e}")))?;

        if !matched {
            debug!(username = %row.username, "password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        create_token(row.id, &row.username, row.role, jwt_config)
    }
}
