//! Request middleware.
//!
//! The chain for a protected route is always: [`auth::authenticate`] verifies
//! the bearer token and binds the actor, then [`role`] gates on the
//! capability table, then the handler runs. Public item reads skip both.

pub mod auth;
pub mod role;
