// src/services/availability_service.rs

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    common::error::AppError,
    gateway::{BookingGateway, SalonDirectory},
    models::{booking::TimeSlot, salon::Salon},
};

// Janela padrão quando o salão não informa (ou informa mal) o horário de
// funcionamento.
const DEFAULT_OPENING: &str = "09:00";
const DEFAULT_CLOSING: &str = "18:00";

// A grade anda de meia em meia hora.
const SLOT_MINUTES: i64 = 30;

// Resolve os horários reserváveis de um salão num dia: a grade fixa de
// meia em meia hora dentro do funcionamento, cruzada com os horários já
// ocupados que o serviço de reservas conhece.
#[derive(Clone)]
pub struct AvailabilityService {
    salon_directory: Arc<dyn SalonDirectory>,
    booking_gateway: Arc<dyn BookingGateway>,
    // Política assumida de degradação: se a busca de ocupados falhar,
    // devolve a grade inteira como disponível em vez de travar o usuário.
    degrade_on_error: bool,
}

impl AvailabilityService {
    pub fn new(
        salon_directory: Arc<dyn SalonDirectory>,
        booking_gateway: Arc<dyn BookingGateway>,
        degrade_on_error: bool,
    ) -> Self {
        Self { salon_directory, booking_gateway, degrade_on_error }
    }

    /// Grade ordenada de horários do salão em `date`, cada um marcado como
    /// disponível ou não. Recalculada a cada chamada; nada fica retido.
    pub async fn resolve_slots(
        &self,
        salon_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, AppError> {
        // Sem salão não há grade; esse erro propaga normalmente.
        let salon = self.salon_directory.get_salon_by_id(salon_id).await?;
        let (opening, closing) = business_hours(&salon);

        let booked: HashSet<String> =
            match self.booking_gateway.get_booked_slots(salon_id, date).await {
                Ok(times) => times.into_iter().collect(),
                Err(err) if self.degrade_on_error => {
                    // Degradação deliberada: melhor mostrar tudo livre do
                    // que bloquear a seleção. O conflito real é pego pelo
                    // serviço de reservas na hora de criar.
                    tracing::warn!(
                        "Falha ao buscar horários ocupados de {} em {}: {}. Exibindo a grade completa como disponível.",
                        salon_id,
                        date,
                        err
                    );
                    HashSet::new()
                }
                Err(err) => return Err(err),
            };

        Ok(build_grid(opening, closing, &booked))
    }
}

pub(crate) fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

// Horário de funcionamento do salão, ou a janela padrão quando os campos
// estão ausentes, ilegíveis ou invertidos.
fn business_hours(salon: &Salon) -> (NaiveTime, NaiveTime) {
    let opening = salon.opening_time.as_deref().and_then(parse_hhmm);
    let closing = salon.closing_time.as_deref().and_then(parse_hhmm);

    match (opening, closing) {
        (Some(opening), Some(closing)) if opening < closing => (opening, closing),
        _ => (
            parse_hhmm(DEFAULT_OPENING).unwrap(),
            parse_hhmm(DEFAULT_CLOSING).unwrap(),
        ),
    }
}

// Grade estritamente crescente de `opening` (inclusivo) até `closing`
// (exclusivo), com (closing - opening) / 30min entradas.
fn build_grid(opening: NaiveTime, closing: NaiveTime, booked: &HashSet<String>) -> Vec<TimeSlot> {
    let total = (closing - opening).num_minutes() / SLOT_MINUTES;
    let mut slots = Vec::with_capacity(total.max(0) as usize);

    let mut cursor = opening;
    for _ in 0..total {
        let time = cursor.format("%H:%M").to_string();
        let available = !booked.contains(&time);
        slots.push(TimeSlot { time, available });
        cursor = cursor + chrono::Duration::minutes(SLOT_MINUTES);
    }

    slots
}
