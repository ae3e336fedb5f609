// src/handlers/availability.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    // "AAAA-MM-DD"
    pub date: NaiveDate,
}

// GET /api/salons/{salon_id}/slots
//
// Qualquer troca de data no cliente refaz esta chamada; a grade nunca é
// guardada entre requisições, então resposta velha não suja data nova.
#[utoipa::path(
    get,
    path = "/api/salons/{salon_id}/slots",
    tag = "Booking Flow",
    params(
        ("salon_id" = String, Path, description = "ID do salão"),
        ("date" = String, Query, description = "Dia desejado (AAAA-MM-DD)")
    ),
    responses(
        (status = 200, description = "Grade de horários do dia", body = Vec<crate::models::booking::TimeSlot>),
        (status = 404, description = "Salão não encontrado")
    )
)]
pub async fn get_slots(
    State(app_state): State<AppState>,
    Path(salon_id): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let slots = app_state
        .availability_service
        .resolve_slots(&salon_id, query.date)
        .await?;

    Ok((StatusCode::OK, Json(slots)))
}
