use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CompareVersionsResponse, HistoryAction, ItemHistory};

pub struct AuditService;

impl AuditService {
    /// Append one history record inside the caller's transaction.
    ///
    /// Taking the transaction (and the actor id explicitly) keeps attribution
    /// in the same unit of work as the mutation it describes: either both
    /// commit or neither does.
    pub async fn record_change(
        tx: &mut Transaction<'_, Postgres>,
        item_id: Uuid,
        action: HistoryAction,
        changed_by: Uuid,
        old_data: Option<serde_json::Value>,
        new_data: Option<serde_json::Value>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO item_history (item_id, action, changed_by, old_data, new_data)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(item_id)
        .bind(action)
        .bind(changed_by)
        .bind(old_data)
        .bind(new_data)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Change history for an item, newest first.
    pub async fn item_history(db: &PgPool, item_id: Uuid) -> Result<Vec<ItemHistory>, AppError> {
        let history = sqlx::query_as::<_, ItemHistory>(
            "SELECT id, item_id, action, changed_by, changed_at, old_data, new_data
             FROM item_history
             WHERE item_id = $1
             ORDER BY changed_at DESC",
        )
        .bind(item_id)
        .fetch_all(db)
        .await?;

        Ok(history)
    }

    /// Decode two history snapshots into maps for side-by-side comparison.
    ///
    /// An absent snapshot compares as an empty map; a snapshot that is not a
    /// JSON object is a client error.
    pub fn compare_versions(
        old: Option<serde_json::Value>,
        new: Option<serde_json::Value>,
    ) -> Result<CompareVersionsResponse, AppError> {
        Ok(CompareVersionsResponse {
            old: into_map(old, "old")?,
            new: into_map(new, "new")?,
        })
    }
}

fn into_map(
    value: Option<serde_json::Value>,
    field: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(serde_json::Map::new()),
        Some(serde_json::Value::Object(map)) => Ok(map),
        Some(_) => Err(AppError::bad_request(format!(
            "{field} must be a JSON object"
        ))),
    }
}
