//! User data models.
//!
//! A user is a credential: a unique username, a bcrypt password hash, and one
//! of the closed set of system roles. The password hash never appears on the
//! outward-facing [`User`] model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// System roles, ordered from most to least privileged.
///
/// The set is closed: roles are not user-definable, and anything outside it
/// fails request binding before reaching the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(
            serde_json::to_string(&Role::Manager).unwrap(),
            r#""manager""#
        );
        assert_eq!(serde_json::to_string(&Role::Viewer).unwrap(), r#""viewer""#);
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        assert!(serde_json::from_str::<Role>(r#""superuser""#).is_err());
        assert!(serde_json::from_str::<Role>(r#""Admin""#).is_err());
        assert!(serde_json::from_str::<Role>(r#""""#).is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            role: Role::Admin,
            created_at: chrono::Utc::now(),
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("alice"));
        assert!(serialized.contains(r#""role":"admin""#));
        assert!(!serialized.contains("password"));
    }
}
