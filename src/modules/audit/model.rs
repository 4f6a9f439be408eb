//! Change-history models.
//!
//! Every item mutation writes one history record in the same transaction,
//! attributed to the authenticated actor that caused it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The kind of mutation a history record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "history_action", rename_all = "lowercase")]
pub enum HistoryAction {
    Insert,
    Update,
    Delete,
}

/// One recorded mutation of an item.
///
/// `changed_by` always resolves to a user id; inserts carry only `new_data`,
/// deletes only `old_data`, updates both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ItemHistory {
    pub id: Uuid,
    pub item_id: Uuid,
    pub action: HistoryAction,
    pub changed_by: Uuid,
    pub changed_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub old_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub new_data: Option<serde_json::Value>,
}

/// Request body for side-by-side version comparison.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareVersionsRequest {
    #[schema(value_type = Option<Object>)]
    pub old: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub new: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompareVersionsResponse {
    #[schema(value_type = Object)]
    pub old: serde_json::Map<String, serde_json::Value>,
    #[schema(value_type = Object)]
    pub new: serde_json::Map<String, serde_json::Value>,
}
