// src/handlers/bookings.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::booking::{BookingDetail, CheckoutPayload},
};

// =============================================================================
//  FLUXO DE RESERVA
// =============================================================================

// POST /api/bookings/checkout
#[utoipa::path(
    post,
    path = "/api/bookings/checkout",
    tag = "Booking Flow",
    request_body = CheckoutPayload,
    responses(
        (status = 201, description = "Reserva criada; redirecionamento ou sucesso local", body = crate::services::booking_flow_service::CheckoutOutcome),
        (status = 400, description = "Validação falhou (carrinho, data ou horário)"),
        (status = 409, description = "Envio já em andamento para esta sessão"),
        (status = 502, description = "Colaborador falhou; se a reserva já existia, o id vem no corpo")
    ),
    security(("api_jwt" = []))
)]
pub async fn checkout(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CheckoutPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let outcome = app_state.booking_flow_service.checkout(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

// =============================================================================
//  CONSULTAS DE RESERVA
// =============================================================================

// GET /api/bookings/customer
#[utoipa::path(
    get,
    path = "/api/bookings/customer",
    tag = "Bookings",
    responses(
        (status = 200, description = "Reservas do cliente da sessão", body = Vec<crate::models::booking::Booking>)
    ),
    security(("api_jwt" = []))
)]
pub async fn my_bookings(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state.booking_gateway.get_customer_bookings(user.id).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/bookings/salon/{salon_id}
#[utoipa::path(
    get,
    path = "/api/bookings/salon/{salon_id}",
    tag = "Bookings",
    params(
        ("salon_id" = String, Path, description = "ID do salão")
    ),
    responses(
        (status = 200, description = "Reservas do salão", body = Vec<crate::models::booking::Booking>)
    ),
    security(("api_jwt" = []))
)]
pub async fn salon_bookings(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(salon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = app_state.booking_gateway.get_salon_bookings(&salon_id).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/bookings/{booking_id}
//
// A visão de confirmação pós-pagamento: a reserva com o salão e o serviço
// agregados. Salão/serviço indisponíveis não derrubam a visão — a reserva
// em si é o que confirma.
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = "Bookings",
    params(
        ("booking_id" = String, Path, description = "ID da reserva")
    ),
    responses(
        (status = 200, description = "Reserva com salão e serviço", body = BookingDetail),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_booking(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state.booking_gateway.get_booking_by_id(&booking_id).await?;

    let salon = app_state
        .salon_directory
        .get_salon_by_id(&booking.salon_id)
        .await
        .ok();
    let service = app_state
        .service_catalog
        .get_service_by_id(&booking.service_id)
        .await
        .ok();

    Ok((StatusCode::OK, Json(BookingDetail { booking, salon, service })))
}

// POST /api/bookings/{booking_id}/cancel
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = "Bookings",
    params(
        ("booking_id" = String, Path, description = "ID da reserva")
    ),
    responses(
        (status = 200, description = "Reserva cancelada", body = crate::models::booking::Booking),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = app_state.booking_gateway.cancel_booking(&booking_id).await?;

    Ok((StatusCode::OK, Json(booking)))
}
