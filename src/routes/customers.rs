use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::Customer,
    response::{ApiMessage, Created, ErrorBody},
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/customers", get(list_customers))
        .route("/api/customers/add", post(create_customer))
        .route("/api/customers/update", put(update_customer))
        .route("/api/customers/delete/{id}", delete(delete_customer))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    responses((status = 200, description = "List customers", body = Vec<Customer>)),
    tag = "Customers"
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(customer_service::list_customers(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/customers/add",
    request_body = CreateCustomerRequest,
    responses((status = 201, description = "Customer created", body = Created)),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<Created>)> {
    let resp = customer_service::create_customer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/customers/update",
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiMessage),
        (status = 404, description = "Customer not found", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateCustomerRequest>,
) -> AppResult<Json<ApiMessage>> {
    Ok(Json(customer_service::update_customer(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/customers/delete/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = ApiMessage),
        (status = 404, description = "Customer not found", body = ErrorBody),
        (status = 409, description = "Customer has sales on record", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<ApiMessage>> {
    Ok(Json(customer_service::delete_customer(&state, id).await?))
}
