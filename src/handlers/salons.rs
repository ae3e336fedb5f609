// src/handlers/salons.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::salon::SalonListQuery,
};

// =============================================================================
//  NAVEGAÇÃO: DIRETÓRIO DE SALÕES E CATÁLOGO DE SERVIÇOS
// =============================================================================

// GET /api/salons
#[utoipa::path(
    get,
    path = "/api/salons",
    tag = "Salons",
    params(
        ("page" = Option<u32>, Query, description = "Página (padrão 1)"),
        ("limit" = Option<u32>, Query, description = "Itens por página (padrão 10)"),
        ("search" = Option<String>, Query, description = "Busca por nome/cidade")
    ),
    responses(
        (status = 200, description = "Lista de salões", body = Vec<crate::models::salon::Salon>)
    )
)]
pub async fn list_salons(
    State(app_state): State<AppState>,
    Query(query): Query<SalonListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let salons = app_state
        .salon_directory
        .get_salons(query.page(), query.limit(), query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(salons)))
}

// GET /api/salons/{salon_id}
#[utoipa::path(
    get,
    path = "/api/salons/{salon_id}",
    tag = "Salons",
    params(
        ("salon_id" = String, Path, description = "ID do salão")
    ),
    responses(
        (status = 200, description = "Salão", body = crate::models::salon::Salon),
        (status = 404, description = "Salão não encontrado")
    )
)]
pub async fn get_salon(
    State(app_state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let salon = app_state.salon_directory.get_salon_by_id(&salon_id).await?;

    Ok((StatusCode::OK, Json(salon)))
}

// GET /api/salons/{salon_id}/services
#[utoipa::path(
    get,
    path = "/api/salons/{salon_id}/services",
    tag = "Salons",
    params(
        ("salon_id" = String, Path, description = "ID do salão")
    ),
    responses(
        (status = 200, description = "Serviços do salão", body = Vec<crate::models::catalog::ServiceOffering>)
    )
)]
pub async fn list_salon_services(
    State(app_state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let services = app_state.service_catalog.get_services_by_salon(&salon_id).await?;

    Ok((StatusCode::OK, Json(services)))
}

// GET /api/services/{service_id}
#[utoipa::path(
    get,
    path = "/api/services/{service_id}",
    tag = "Salons",
    params(
        ("service_id" = String, Path, description = "ID do serviço")
    ),
    responses(
        (status = 200, description = "Serviço", body = crate::models::catalog::ServiceOffering),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn get_service(
    State(app_state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.service_catalog.get_service_by_id(&service_id).await?;

    Ok((StatusCode::OK, Json(service)))
}
