use axum::{Router, middleware, routing::get};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_user_read;
use crate::state::AppState;

use super::controller::get_user;

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/{id}", get(get_user))
        .route_layer(middleware::from_fn(require_user_read))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}
