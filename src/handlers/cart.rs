// src/handlers/cart.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemPayload {
    #[validate(length(min = 1, message = "Informe o serviço."))]
    #[schema(example = "svc-001")]
    pub service_id: String,
}

// GET /api/cart
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "Cart",
    responses(
        (status = 200, description = "Carrinho da sessão", body = crate::models::cart::CartView)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_cart(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.cart_service.view(user.id))))
}

// POST /api/cart/items
//
// O serviço é buscado no catálogo na hora da adição: o preço que entra no
// carrinho é o preço capturado aqui, e é ele que vale no checkout.
#[utoipa::path(
    post,
    path = "/api/cart/items",
    tag = "Cart",
    request_body = AddCartItemPayload,
    responses(
        (status = 201, description = "Item adicionado", body = crate::models::cart::CartView),
        (status = 404, description = "Serviço não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_item(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<AddCartItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let service = app_state
        .service_catalog
        .get_service_by_id(&payload.service_id)
        .await?;
    let view = app_state.cart_service.add_service(user.id, service);

    Ok((StatusCode::CREATED, Json(view)))
}

// DELETE /api/cart/items/{service_id}
#[utoipa::path(
    delete,
    path = "/api/cart/items/{service_id}",
    tag = "Cart",
    params(
        ("service_id" = String, Path, description = "ID do serviço a remover")
    ),
    responses(
        (status = 200, description = "Carrinho após a remoção", body = crate::models::cart::CartView)
    ),
    security(("api_jwt" = []))
)]
pub async fn remove_item(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(service_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.cart_service.remove_service(user.id, &service_id);

    Ok((StatusCode::OK, Json(view)))
}

// DELETE /api/cart
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = "Cart",
    responses(
        (status = 204, description = "Carrinho descartado")
    ),
    security(("api_jwt" = []))
)]
pub async fn clear_cart(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    app_state.cart_service.clear(user.id);

    Ok(StatusCode::NO_CONTENT)
}
