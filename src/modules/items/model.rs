//! Inventory item models and request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub price: Decimal,
}

/// Full-replacement update, mirroring the create shape.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListItemsQuery {
    /// Case-insensitive substring filter on the item name.
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemIdResponse {
    pub id: Uuid,
}
