use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::sales::RecordSaleRequest,
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::{Bill, BillDetail, Sale},
    response::{ApiMessage, ErrorBody},
    services::sales_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sales", get(list_sales))
        .route("/api/sales/record", post(record_sale))
        .route("/api/billing", get(list_bills))
        .route("/api/billing/{id}", get(get_bill))
}

#[utoipa::path(
    get,
    path = "/api/sales",
    responses((status = 200, description = "List sales", body = Vec<Sale>)),
    tag = "Sales"
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    Ok(Json(sales_service::list_sales(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/sales/record",
    request_body = RecordSaleRequest,
    responses(
        (status = 201, description = "Sale recorded", body = ApiMessage),
        (status = 404, description = "Artwork not found", body = ErrorBody),
        (status = 409, description = "Artwork not available or unknown customer", body = ErrorBody)
    ),
    tag = "Sales"
)]
pub async fn record_sale(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RecordSaleRequest>,
) -> AppResult<(StatusCode, Json<ApiMessage>)> {
    let resp = sales_service::record_sale(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/billing",
    responses((status = 200, description = "Paid bills, newest first", body = Vec<Bill>)),
    tag = "Billing"
)]
pub async fn list_bills(State(state): State<AppState>) -> AppResult<Json<Vec<Bill>>> {
    Ok(Json(sales_service::list_bills(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/billing/{id}",
    params(("id" = i32, Path, description = "Bill ID")),
    responses(
        (status = 200, description = "Bill detail", body = BillDetail),
        (status = 404, description = "Bill not found", body = ErrorBody)
    ),
    tag = "Billing"
)]
pub async fn get_bill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<BillDetail>> {
    Ok(Json(sales_service::get_bill(&state, id).await?))
}
