//! # Item REST Endpoints
//!
//! Axum routes for the `/item` resource. Each handler decodes and validates
//! its input, runs one gateway operation on the blocking pool, and encodes
//! the result.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::query::ListParams;
use crate::schema::{Item, ItemPayload, ItemValidator};
use crate::storage::{ItemGateway, StorageResult};

use super::errors::{RestError, RestResult};

/// State shared by the item handlers
#[derive(Debug, Clone)]
pub struct ApiState {
    gateway: ItemGateway,
}

impl ApiState {
    pub fn new(gateway: ItemGateway) -> Self {
        Self { gateway }
    }

    /// Run one gateway operation off the async runtime.
    ///
    /// The operation opens and releases its own connection.
    async fn with_gateway<T, F>(&self, op: F) -> RestResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ItemGateway) -> StorageResult<T> + Send + 'static,
    {
        let gateway = self.gateway.clone();
        tokio::task::spawn_blocking(move || op(&gateway))
            .await
            .map_err(|e| RestError::Internal(format!("storage task failed: {}", e)))?
            .map_err(RestError::from)
    }
}

/// Build the `/item` router
pub fn item_routes(state: ApiState) -> Router {
    Router::new()
        .route("/item", get(list_items).post(create_item))
        .route("/item/", get(list_items).post(create_item))
        .route(
            "/item/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

fn item_id(path: Result<Path<i64>, PathRejection>) -> RestResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|e| RestError::InvalidPath(e.body_text()))
}

fn item_payload(body: Result<Json<ItemPayload>, JsonRejection>) -> RestResult<ItemPayload> {
    body.map(|Json(payload)| payload)
        .map_err(|e| RestError::InvalidBody(e.body_text()))
}

/// POST /item/
async fn create_item(
    State(state): State<ApiState>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Item>)> {
    let data = ItemValidator::validate(&item_payload(body)?)?;

    let item = state.with_gateway(move |g| g.create(data)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /item/{id}
async fn get_item(
    State(state): State<ApiState>,
    path: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<Item>> {
    let id = item_id(path)?;

    let item = state.with_gateway(move |g| g.get(id)).await?;
    Ok(Json(item))
}

/// GET /item/
async fn list_items(
    State(state): State<ApiState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> RestResult<Json<Vec<Item>>> {
    let Query(params) = query.map_err(|e| RestError::InvalidQueryParam(e.body_text()))?;
    let filter = params.to_filter()?;

    let items = state.with_gateway(move |g| g.list(&filter)).await?;
    Ok(Json(items))
}

/// PUT /item/{id}
async fn update_item(
    State(state): State<ApiState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ItemPayload>, JsonRejection>,
) -> RestResult<(StatusCode, Json<Item>)> {
    let id = item_id(path)?;
    let data = ItemValidator::validate(&item_payload(body)?)?;

    let item = state.with_gateway(move |g| g.update(id, data)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /item/{id}
async fn delete_item(
    State(state): State<ApiState>,
    path: Result<Path<i64>, PathRejection>,
) -> RestResult<StatusCode> {
    let id = item_id(path)?;

    state.with_gateway(move |g| g.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
