//! HTTP route layer: five `/items` endpoints mapped onto the data-access
//! operations, plus the OpenAPI document describing them.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument, warn};
use utoipa::OpenApi;

use crate::crud;
use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateItem, Detail, Item, ItemPatch};

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
}

#[derive(OpenApi)]
#[openapi(
    paths(list_items, get_item, create_item, update_item, delete_item),
    components(schemas(Item, CreateItem, ItemPatch, Detail)),
    tags((name = "items", description = "Item CRUD operations"))
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    // The collection endpoints answer with and without the trailing slash.
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

/// Returns every stored item.
#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    responses((status = 200, description = "All stored items", body = [Item]))
)]
#[instrument(skip(state))]
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    let mut session = db::session(&state.pool).await?;
    let items = crud::list_items(&mut session).await?;

    Ok(Json(items))
}

/// Returns the item with the given id.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The matching item", body = Item),
        (status = 404, description = "No item with this id", body = Detail)
    )
)]
#[instrument(skip(state))]
pub async fn get_item(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Item>> {
    let mut session = db::session(&state.pool).await?;
    let item = crud::get_item(&mut session, id).await?.ok_or_else(|| {
        warn!("Item not found: {}", id);
        ApiError::NotFound
    })?;

    Ok(Json(item))
}

/// Creates an item from the request body and returns it with its
/// storage-assigned id.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = CreateItem,
    responses(
        (status = 200, description = "The created item", body = Item),
        (status = 422, description = "Malformed or incomplete payload")
    )
)]
#[instrument(skip(state, new_item))]
pub async fn create_item(
    State(state): State<AppState>,
    Json(new_item): Json<CreateItem>,
) -> ApiResult<Json<Item>> {
    let mut session = db::session(&state.pool).await?;
    let item = crud::create_item(&mut session, new_item).await?;

    info!(item_id = item.id, "Created item");
    Ok(Json(item))
}

/// Applies a partial update: only fields present in the body overwrite the
/// stored record.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemPatch,
    responses(
        (status = 200, description = "The updated item", body = Item),
        (status = 404, description = "No item with this id", body = Detail)
    )
)]
#[instrument(skip(state, patch))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ItemPatch>,
) -> ApiResult<Json<Item>> {
    let mut session = db::session(&state.pool).await?;
    let item = crud::update_item(&mut session, id, patch)
        .await?
        .ok_or_else(|| {
            warn!("Item not found: {}", id);
            ApiError::NotFound
        })?;

    Ok(Json(item))
}

/// Deletes the item with the given id.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = Detail),
        (status = 404, description = "No item with this id", body = Detail)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Detail>> {
    let mut session = db::session(&state.pool).await?;
    let item = crud::delete_item(&mut session, id).await?.ok_or_else(|| {
        warn!("Item not found: {}", id);
        ApiError::NotFound
    })?;

    info!(item_id = item.id, "Deleted item");
    Ok(Json(Detail::new("Item deleted successfully")))
}
