use crate::domain::model::NewOrder;
use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::types::{
    AppState, CreateOrderRequest, OrderCreatedResponse, OrdersQuery, OrdersResponse,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/orders",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders matching the filter (all when none given)", body = OrdersResponse),
        (status = 400, description = "Invalid or conflicting filters", body = ErrorResponse),
        (status = 503, description = "Catalog schema missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_orders_handler(
    State(state): State<AppState>,
    query: Result<Query<OrdersQuery>, QueryRejection>,
) -> Result<Json<OrdersResponse>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter().map_err(ApiError::BadRequest)?;

    let orders = state.catalog.fetch_orders(&filter).await?;
    Ok(Json(OrdersResponse { orders }))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderCreatedResponse),
        (status = 409, description = "Customer name or contact already used", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 503, description = "Catalog schema missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_order_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let Json(request) = request?;

    let order = state
        .catalog
        .insert_order(NewOrder {
            date: request.date,
            status: request.status,
            customer_name: request.customer_name,
            customer_contact: request.customer_contact,
            items: JsonValue::Array(request.items),
        })
        .await?;

    Ok(Json(OrderCreatedResponse {
        message: "Order created successfully.".to_string(),
        order,
    }))
}
