//! Customer REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CustomerResponse, RegisterCustomerRequest, UpdateCustomerRequest};
use crate::domain::CustomerService;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::ApiError;

/// Customer handler state
#[derive(Clone)]
pub struct CustomerAppState {
    pub service: Arc<CustomerService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Customer list", body = Vec<CustomerResponse>)
    )
)]
pub async fn list_customers(
    State(state): State<CustomerAppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.service.get_all_customers().await?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 404, description = "Not found", body = ApiError)
    )
)]
pub async fn get_customer(
    State(state): State<CustomerAppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = state.service.get_customer(id).await?;
    Ok(Json(customer.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = RegisterCustomerRequest,
    responses(
        (status = 204, description = "Registered"),
        (status = 409, description = "Email already taken", body = ApiError),
        (status = 422, description = "Invalid field values", body = ApiError)
    )
)]
pub async fn register_customer(
    State(state): State<CustomerAppState>,
    ValidatedJson(request): ValidatedJson<RegisterCustomerRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.add_customer(request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Request contains no changes", body = ApiError),
        (status = 404, description = "Not found", body = ApiError),
        (status = 409, description = "Email already taken", body = ApiError)
    )
)]
pub async fn update_customer(
    State(state): State<CustomerAppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateCustomerRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update_customer(id, request.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ApiError)
    )
)]
pub async fn delete_customer(
    State(state): State<CustomerAppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_customer_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
