use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::modules::audit::model::HistoryAction;
use crate::modules::audit::service::AuditService;
use crate::utils::errors::AppError;

use super::model::{CreateItemRequest, Item, UpdateItemRequest};

const ITEM_COLUMNS: &str = "id, name, description, quantity, price, created_at, updated_at";

pub struct ItemService;

impl ItemService {
    /// Create an item and its history record in one transaction.
    ///
    /// Every mutating call takes the actor id explicitly; there is no
    /// session-level attribution channel.
    pub async fn create(
        db: &PgPool,
        actor_id: Uuid,
        dto: CreateItemRequest,
    ) -> Result<Item, AppError> {
        let mut tx = db.begin().await?;

        let item = sqlx::query_as::<_, Item>(&format!(
            "INSERT INTO items (name, description, quantity, price)
             VALUES ($1, $2, $3, $4)
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.quantity)
        .bind(dto.price)
        .fetch_one(&mut *tx)
        .await?;

        AuditService::record_change(
            &mut tx,
            item.id,
            HistoryAction::Insert,
            actor_id,
            None,
            Some(snapshot(&item)?),
        )
        .await?;

        tx.commit().await?;

        Ok(item)
    }

    pub async fn get(db: &PgPool, item_id: Uuid) -> Result<Item, AppError> {
        let item =
            sqlx::query_as::<_, Item>(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
                .bind(item_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found("item not found"))?;

        Ok(item)
    }

    /// All items, optionally filtered by name, newest first.
    pub async fn list(db: &PgPool, name_filter: Option<String>) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS}
             FROM items
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
             ORDER BY created_at DESC"
        ))
        .bind(name_filter)
        .fetch_all(db)
        .await?;

        Ok(items)
    }

    /// Replace an item, snapshotting old and new state into history.
    pub async fn update(
        db: &PgPool,
        actor_id: Uuid,
        item_id: Uuid,
        dto: UpdateItemRequest,
    ) -> Result<Item, AppError> {
        let mut tx = db.begin().await?;

        let old = lock_item(&mut tx, item_id).await?;

        let updated = sqlx::query_as::<_, Item>(&format!(
            "UPDATE items
             SET name = $1, description = $2, quantity = $3, price = $4, updated_at = NOW()
             WHERE id = $5
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.quantity)
        .bind(dto.price)
        .bind(item_id)
        .fetch_one(&mut *tx)
        .await?;

        AuditService::record_change(
            &mut tx,
            item_id,
            HistoryAction::Update,
            actor_id,
            Some(snapshot(&old)?),
            Some(snapshot(&updated)?),
        )
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete an item, preserving its last state in history.
    pub async fn delete(db: &PgPool, actor_id: Uuid, item_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        let old = lock_item(&mut tx, item_id).await?;

        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        AuditService::record_change(
            &mut tx,
            item_id,
            HistoryAction::Delete,
            actor_id,
            Some(snapshot(&old)?),
            None,
        )
        .await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Fetch and row-lock an item so the history snapshot pair stays consistent
/// under concurrent writers.
async fn lock_item(tx: &mut Transaction<'_, Postgres>, item_id: Uuid) -> Result<Item, AppError> {
    sqlx::query_as::<_, Item>(&format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 FOR UPDATE"
    ))
    .bind(item_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::not_found("item not found"))
}

fn snapshot(item: &Item) -> Result<serde_json::Value, AppError> {
    serde_json::to_value(item)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to snapshot item: {e}")))
}
