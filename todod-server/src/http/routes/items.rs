//! Item endpoints
//!
//! Structural validation happens before any store call; not-found is
//! derived from the affected-row count, never from a separate existence
//! query.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::Payload;
use crate::http::server::AppState;
use crate::models::{Item, ItemName, ValidationError};

/// Create item request: `{Name}`
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Update item request: `{IsComplete}`.
///
/// A `Name` member, if sent, is ignored: the name is immutable after
/// creation. A missing flag decodes as `false`.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub is_complete: bool,
}

/// Create item success body: `{Id, Message}`
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCreated {
    pub id: i64,
    pub message: &'static str,
}

/// Confirmation body for update/delete: `{message}`
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// GET /items - every item, in storage order
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let mut repo = ItemRepo::acquire(&state.pool).await?;
    let items = repo.list().await?;

    Ok(Json(items))
}

/// POST /items - insert a new, not-yet-complete item
async fn create_item(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<CreateItemRequest>,
) -> Result<Json<ItemCreated>, ApiError> {
    let name = ItemName::new(body.name.as_deref().unwrap_or_default())?;

    let mut repo = ItemRepo::acquire(&state.pool).await?;
    let id = repo.create(&name).await?;

    Ok(Json(ItemCreated {
        id,
        message: "Item added successfully.",
    }))
}

/// PUT /items/{id} - set the completion flag
async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Payload(body): Payload<UpdateItemRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    if id == 0 {
        return Err(ValidationError::InvalidPayload.into());
    }

    let mut repo = ItemRepo::acquire(&state.pool).await?;
    let affected = repo.set_complete(id, body.is_complete).await?;

    if affected > 0 {
        Ok(Json(MessageBody {
            message: "Item updated successfully.",
        }))
    } else {
        Err(ApiError::NotFound)
    }
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId.into());
    }

    let mut repo = ItemRepo::acquire(&state.pool).await?;
    let affected = repo.delete(id).await?;

    if affected > 0 {
        Ok(Json(MessageBody {
            message: "Item deleted successfully.",
        }))
    } else {
        Err(ApiError::NotFound)
    }
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}
