use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::audit::model::{
    CompareVersionsRequest, CompareVersionsResponse, HistoryAction, ItemHistory,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::modules::items::model::{
    CreateItemRequest, Item, ItemIdResponse, ListItemsQuery, UpdateItemRequest,
};
use crate::modules::users::model::{Role, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_user,
        crate::modules::items::controller::list_items,
        crate::modules::items::controller::get_item,
        crate::modules::items::controller::create_item,
        crate::modules::items::controller::update_item,
        crate::modules::items::controller::delete_item,
        crate::modules::audit::controller::get_item_history,
        crate::modules::audit::controller::compare_versions,
    ),
    components(
        schemas(
            Role,
            User,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            Item,
            CreateItemRequest,
            UpdateItemRequest,
            ListItemsQuery,
            ItemIdResponse,
            HistoryAction,
            ItemHistory,
            CompareVersionsRequest,
            CompareVersionsResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User lookup"),
        (name = "Items", description = "Inventory item management"),
        (name = "Audit", description = "Item change history")
    ),
    info(
        title = "Stockroom API",
        version = "0.1.0",
        description = "Inventory control REST API with role-based access and an attributable change-history trail.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
