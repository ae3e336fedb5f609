// src/models/booking.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{catalog::ServiceOffering, payment::PaymentMethod, salon::Salon};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Refunded,
}

// --- Reserva ---

// Projeção somente-leitura de uma reserva. Depois de criada, a reserva
// pertence ao serviço de reservas; este fluxo nunca marca uma reserva como
// paga por conta própria — a confirmação vem do redirecionamento de
// pagamento ou da visão de confirmação.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[schema(example = "bkg-001")]
    pub id: String,
    #[serde(alias = "userId")]
    pub customer_id: Option<String>,
    pub salon_id: String,
    pub service_id: String,
    #[serde(alias = "bookingDate")]
    pub date: String,
    #[serde(alias = "bookingTime")]
    #[schema(example = "11:00")]
    pub time: String,
    pub status: BookingStatus,
    pub total_price: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

// Corpo enviado ao serviço de reservas na criação (contrato do gateway).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub salon_id: String,
    pub service_id: String,
    pub booking_date: NaiveDate,
    // "HH:MM"
    pub booking_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// Resposta do serviço de reservas para horários já ocupados de um dia.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlotsResponse {
    #[serde(default)]
    pub booked_times: Vec<String>,
}

// Dados que o cliente envia para confirmar a reserva do carrinho atual.
// `date` e `time` são opcionais de propósito: ausência vira erro de
// validação legível ("selecione uma data"), não um 422 opaco.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    #[validate(length(min = 1, message = "Informe o salão."))]
    #[schema(example = "salon-001")]
    pub salon_id: String,

    // "AAAA-MM-DD"
    #[schema(example = "2031-05-20")]
    pub date: Option<String>,

    // "HH:MM", alinhado na grade de meia em meia hora
    #[schema(example = "11:00")]
    pub time: Option<String>,

    #[validate(length(max = 500, message = "As observações devem ter no máximo 500 caracteres."))]
    pub notes: Option<String>,

    #[serde(default)]
    pub payment_method: PaymentMethod,
}

// --- Horários ---

// Um horário da grade de meia em meia hora. Efêmero: recalculado a cada
// troca de data, nunca persistido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeSlot {
    #[schema(example = "11:00")]
    pub time: String,
    pub available: bool,
}

// --- Visão de confirmação ---

// A visão de confirmação (pós-pagamento) mostra a reserva junto com o
// salão e o serviço; o agregado evita três idas do cliente ao gateway.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub booking: Booking,
    pub salon: Option<Salon>,
    pub service: Option<ServiceOffering>,
}
