use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::Role;

/// JWT claims carried by every issued token.
///
/// Claims are self-contained: verification needs no session storage, at the
/// cost of no revocation before `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Credential id of the subject.
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    pub role: Role,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_unknown_role() {
        let json = r#"{"username":"alice","role":"root","password":"password123"}"#;
        assert!(serde_json::from_str::<RegisterRequest>(json).is_err());
    }

    #[test]
    fn test_register_request_binds_closed_roles() {
        for role in ["admin", "manager", "viewer"] {
            let json =
                format!(r#"{{"username":"alice","role":"{role}","password":"password123"}}"#);
            let dto: RegisterRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(dto.role.as_str(), role);
        }
    }

    #[test]
    fn test_register_request_validates_password_length() {
        let dto = RegisterRequest {
            username: "alice".to_string(),
            role: Role::Viewer,
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = RegisterRequest {
            username: "alice".to_string(),
            role: Role::Viewer,
            password: "longenough".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_claims_round_trip() {
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "alice".to_string(),
            role: Role::Manager,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };

        let json = serde_json::to_string(&claims).unwrap();
        let parsed: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sub, claims.sub);
        assert_eq!(parsed.role, Role::Manager);
        assert_eq!(parsed.exp, claims.exp);
    }
}
