use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("user not found"))?;

        Ok(user)
    }
}
