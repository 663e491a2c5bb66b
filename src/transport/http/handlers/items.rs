use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::types::{
    AppState, CreateItemRequest, ItemCreatedResponse, ItemsResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All catalog items", body = ItemsResponse),
        (status = 503, description = "Catalog schema missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state.catalog.fetch_items().await?;
    Ok(Json(ItemsResponse { items }))
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemCreatedResponse),
        (status = 422, description = "Malformed body or blank name/description", body = ErrorResponse),
        (status = 503, description = "Catalog schema missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemCreatedResponse>, ApiError> {
    let Json(request) = request?;
    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidBody("name must not be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(ApiError::InvalidBody("description must not be empty".to_string()));
    }

    let item = state
        .catalog
        .insert_item(request.name, request.description, request.price)
        .await?;

    Ok(Json(ItemCreatedResponse {
        message: format!("Item '{}' created successfully.", item.item_name),
        item,
    }))
}
