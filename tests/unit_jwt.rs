use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use stockroom::config::jwt::JwtConfig;
use stockroom::modules::users::model::Role;
use stockroom::utils::errors::AppError;
use stockroom::utils::jwt::{create_token, verify_token};
use uuid::Uuid;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        ttl: 3600,
    }
}

#[test]
fn test_create_and_verify_round_trip() {
    let config = test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, "alice", Role::Admin, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn test_round_trip_all_roles() {
    let config = test_jwt_config();

    for role in [Role::Admin, Role::Manager, Role::Viewer] {
        let token = create_token(Uuid::new_v4(), "user", role, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_expiry_is_issued_at_plus_ttl() {
    let config = test_jwt_config();

    let token = create_token(Uuid::new_v4(), "alice", Role::Viewer, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.exp - claims.iat, config.ttl as usize);
}

#[test]
fn test_expired_token_reports_expired_not_invalid() {
    // The signature is valid; only the lifetime has elapsed. The error must
    // be the expiry kind so clients know to re-authenticate.
    let expired_config = JwtConfig {
        secret: test_jwt_config().secret,
        ttl: -60,
    };

    let token = create_token(Uuid::new_v4(), "alice", Role::Admin, &expired_config).unwrap();
    let result = verify_token(&token, &test_jwt_config());

    assert!(matches!(result, Err(AppError::ExpiredToken)));
}

#[test]
fn test_wrong_secret_rejected() {
    let config = test_jwt_config();
    let token = create_token(Uuid::new_v4(), "alice", Role::Admin, &config).unwrap();

    let wrong_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        ttl: 3600,
    };

    assert!(matches!(
        verify_token(&token, &wrong_config),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn test_verify_is_idempotent() {
    let config = test_jwt_config();
    let user_id = Uuid::new_v4();
    let token = create_token(user_id, "alice", Role::Manager, &config).unwrap();

    let first = verify_token(&token, &config).unwrap();
    let second = verify_token(&token, &config).unwrap();

    assert_eq!(first.sub, second.sub);
    assert_eq!(first.role, second.role);
    assert_eq!(first.exp, second.exp);
}

#[test]
fn test_malformed_tokens_rejected() {
    let config = test_jwt_config();
    let malformed = [
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed {
        assert!(
            matches!(verify_token(token, &config), Err(AppError::InvalidToken)),
            "expected invalid: {token:?}"
        );
    }
}

#[test]
fn test_tampered_claims_invalidate_signature() {
    let config = test_jwt_config();
    let token = create_token(Uuid::new_v4(), "alice", Role::Viewer, &config).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let payload = String::from_utf8(URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
    let escalated = payload.replace("viewer", "admin");
    let forged = format!(
        "{}.{}.{}",
        parts[0],
        URL_SAFE_NO_PAD.encode(escalated),
        parts[2]
    );

    assert!(matches!(
        verify_token(&forged, &config),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn test_alg_none_substitution_rejected() {
    let config = test_jwt_config();
    let token = create_token(Uuid::new_v4(), "alice", Role::Viewer, &config).unwrap();
    let payload = token.split('.').nth(1).unwrap();

    let none_header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let forged = format!("{none_header}.{payload}.");

    assert!(matches!(
        verify_token(&forged, &config),
        Err(AppError::InvalidToken)
    ));
}

#[test]
fn test_different_users_get_different_tokens() {
    let config = test_jwt_config();
    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();

    let token1 = create_token(id1, "alice", Role::Admin, &config).unwrap();
    let token2 = create_token(id2, "bob", Role::Admin, &config).unwrap();

    assert_ne!(token1, token2);
    assert_eq!(verify_token(&token1, &config).unwrap().sub, id1.to_string());
    assert_eq!(verify_token(&token2, &config).unwrap().sub, id2.to_string());
}
