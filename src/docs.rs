// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Navegação ---
        handlers::salons::list_salons,
        handlers::salons::get_salon,
        handlers::salons::list_salon_services,
        handlers::salons::get_service,

        // --- Fluxo de reserva ---
        handlers::availability::get_slots,
        handlers::bookings::checkout,

        // --- Carrinho ---
        handlers::cart::get_cart,
        handlers::cart::add_item,
        handlers::cart::remove_item,
        handlers::cart::clear_cart,

        // --- Reservas ---
        handlers::bookings::my_bookings,
        handlers::bookings::salon_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::cancel_booking,
    ),
    components(
        schemas(
            // --- Navegação ---
            models::salon::Salon,
            models::catalog::ServiceOffering,

            // --- Fluxo de reserva ---
            models::booking::TimeSlot,
            models::booking::CheckoutPayload,
            models::booking::Booking,
            models::booking::BookingStatus,
            models::booking::BookingDetail,
            models::payment::PaymentMethod,
            services::booking_flow_service::CheckoutOutcome,

            // --- Carrinho ---
            models::cart::Cart,
            models::cart::CartItem,
            models::cart::CartView,

            // --- Sessão ---
            models::auth::SessionUser,
            models::auth::UserRole,

            // --- Payloads ---
            handlers::cart::AddCartItemPayload,
        )
    ),
    tags(
        (name = "Salons", description = "Diretório de salões e catálogo de serviços"),
        (name = "Booking Flow", description = "Horários disponíveis e envio da reserva"),
        (name = "Cart", description = "Carrinho da sessão"),
        (name = "Bookings", description = "Consultas e cancelamento de reservas")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
