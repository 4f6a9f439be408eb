//! Role gate and capability table.
//!
//! Authorization is one table: every gated action maps to the set of roles
//! permitted to perform it, and one gate implementation consults it. Routes
//! declare an action; nothing else decides access.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::middleware::auth::AuthContext;
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

/// Gated actions. Public item reads take no token and have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateItem,
    UpdateItem,
    DeleteItem,
    ReadAudit,
    ReadUser,
}

/// The capability table. Admin and manager may create and update items;
/// only admin may delete items or read the audit trail; any authenticated
/// role may read users.
const CAPABILITIES: &[(Action, &[Role])] = &[
    (Action::CreateItem, &[Role::Admin, Role::Manager]),
    (Action::UpdateItem, &[Role::Admin, Role::Manager]),
    (Action::DeleteItem, &[Role::Admin]),
    (Action::ReadAudit, &[Role::Admin]),
    (Action::ReadUser, &[Role::Admin, Role::Manager, Role::Viewer]),
];

/// Roles permitted to perform `action`.
pub fn permitted_roles(action: Action) -> &'static [Role] {
    CAPABILITIES
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

/// Core gate check.
///
/// An absent context is denied as [`AppError::RoleNotBound`]: the gate never
/// treats a request the auth middleware did not bind as allowed.
pub fn check_access(context: Option<&AuthContext>, action: Action) -> Result<(), AppError> {
    let context = context.ok_or(AppError::RoleNotBound)?;

    if permitted_roles(action).contains(&context.role) {
        Ok(())
    } else {
        Err(AppError::AccessDenied)
    }
}

async fn require(action: Action, req: Request, next: Next) -> Result<Response, AppError> {
    check_access(req.extensions().get::<AuthContext>(), action)?;
    Ok(next.run(req).await)
}

pub async fn require_item_create(req: Request, next: Next) -> Result<Response, AppError> {
    require(Action::CreateItem, req, next).await
}

pub async fn require_item_update(req: Request, next: Next) -> Result<Response, AppError> {
    require(Action::UpdateItem, req, next).await
}

pub async fn require_item_delete(req: Request, next: Next) -> Result<Response, AppError> {
    require(Action::DeleteItem, req, next).await
}

pub async fn require_audit_read(req: Request, next: Next) -> Result<Response, AppError> {
    require(Action::ReadAudit, req, next).await
}

pub async fn require_user_read(req: Request, next: Next) -> Result<Response, AppError> {
    require(Action::ReadUser, req, next).await
}
