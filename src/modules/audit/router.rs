use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_audit_read;
use crate::state::AppState;

use super::controller::{compare_versions, get_item_history};

pub fn init_audit_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/items/{id}/history", get(get_item_history))
        .route("/items/compare", post(compare_versions))
        .route_layer(middleware::from_fn(require_audit_read))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}
