use stockroom::middleware::auth::AuthContext;
use stockroom::middleware::role::{Action, check_access, permitted_roles};
use stockroom::modules::users::model::Role;
use stockroom::utils::errors::AppError;
use uuid::Uuid;

fn context(role: Role) -> AuthContext {
    AuthContext {
        actor_id: Uuid::new_v4(),
        username: "test".to_string(),
        role,
    }
}

const ALL_ACTIONS: [Action; 5] = [
    Action::CreateItem,
    Action::UpdateItem,
    Action::DeleteItem,
    Action::ReadAudit,
    Action::ReadUser,
];

#[test]
fn test_admin_and_manager_may_create_and_update() {
    for action in [Action::CreateItem, Action::UpdateItem] {
        assert!(check_access(Some(&context(Role::Admin)), action).is_ok());
        assert!(check_access(Some(&context(Role::Manager)), action).is_ok());
        assert!(matches!(
            check_access(Some(&context(Role::Viewer)), action),
            Err(AppError::AccessDenied)
        ));
    }
}

#[test]
fn test_only_admin_may_delete_and_read_audit() {
    for action in [Action::DeleteItem, Action::ReadAudit] {
        assert!(check_access(Some(&context(Role::Admin)), action).is_ok());
        assert!(matches!(
            check_access(Some(&context(Role::Manager)), action),
            Err(AppError::AccessDenied)
        ));
        assert!(matches!(
            check_access(Some(&context(Role::Viewer)), action),
            Err(AppError::AccessDenied)
        ));
    }
}

#[test]
fn test_any_authenticated_role_may_read_users() {
    for role in [Role::Admin, Role::Manager, Role::Viewer] {
        assert!(check_access(Some(&context(role)), Action::ReadUser).is_ok());
    }
}

#[test]
fn test_gate_is_monotonic() {
    // With an unchanged table, a permitted role is always allowed and a
    // non-member role is always denied; membership is the only criterion.
    for action in ALL_ACTIONS {
        let permitted = permitted_roles(action);
        for role in [Role::Admin, Role::Manager, Role::Viewer] {
            let result = check_access(Some(&context(role)), action);
            if permitted.contains(&role) {
                assert!(result.is_ok(), "{role} should be allowed for {action:?}");
            } else {
                assert!(
                    matches!(result, Err(AppError::AccessDenied)),
                    "{role} should be denied for {action:?}"
                );
            }
        }
    }
}

#[test]
fn test_absent_context_is_denied_for_every_action() {
    // A missing context is never treated as allow, whatever the action.
    for action in ALL_ACTIONS {
        assert!(matches!(
            check_access(None, action),
            Err(AppError::RoleNotBound)
        ));
    }
}

#[test]
fn test_repeated_checks_are_stable() {
    let ctx = context(Role::Manager);
    for _ in 0..3 {
        assert!(check_access(Some(&ctx), Action::CreateItem).is_ok());
        assert!(check_access(Some(&ctx), Action::DeleteItem).is_err());
    }
}
