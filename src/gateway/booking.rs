// src/gateway/booking.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::booking::{BookedSlotsResponse, Booking, CreateBookingRequest};

use super::GatewayHttpClient;

// Serviço de reservas (BOOKING-SERVICE, via gateway).
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Horários já ocupados de um salão num dia ("HH:MM").
    async fn get_booked_slots(
        &self,
        salon_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<String>, AppError>;

    async fn create_booking(&self, req: &CreateBookingRequest) -> Result<Booking, AppError>;

    async fn get_booking_by_id(&self, id: &str) -> Result<Booking, AppError>;

    async fn get_customer_bookings(&self, customer_id: Uuid) -> Result<Vec<Booking>, AppError>;

    async fn get_salon_bookings(&self, salon_id: &str) -> Result<Vec<Booking>, AppError>;

    async fn cancel_booking(&self, id: &str) -> Result<Booking, AppError>;
}

#[derive(Clone)]
pub struct HttpBookingGateway {
    http: GatewayHttpClient,
}

impl HttpBookingGateway {
    pub fn new(http: GatewayHttpClient) -> Self {
        HttpBookingGateway { http }
    }
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn get_booked_slots(
        &self,
        salon_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<String>, AppError> {
        let response: BookedSlotsResponse = self
            .http
            .get(
                &format!("/salons/{}/availability", salon_id),
                &[("date", date.format("%Y-%m-%d").to_string())],
            )
            .await?;
        Ok(response.booked_times)
    }

    async fn create_booking(&self, req: &CreateBookingRequest) -> Result<Booking, AppError> {
        self.http.post("/bookings", req).await
    }

    async fn get_booking_by_id(&self, id: &str) -> Result<Booking, AppError> {
        self.http.get(&format!("/bookings/{}", id), &[]).await
    }

    async fn get_customer_bookings(&self, customer_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.http.get(&format!("/users/{}/bookings", customer_id), &[]).await
    }

    async fn get_salon_bookings(&self, salon_id: &str) -> Result<Vec<Booking>, AppError> {
        self.http.get(&format!("/salons/{}/bookings", salon_id), &[]).await
    }

    async fn cancel_booking(&self, id: &str) -> Result<Booking, AppError> {
        self.http.post(&format!("/bookings/{}/cancel", id), &serde_json::json!({})).await
    }
}
