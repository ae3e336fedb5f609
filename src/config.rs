// src/config.rs

use std::{env, sync::Arc};

use crate::{
    gateway::{
        BookingGateway, GatewayHttpClient, HttpBookingGateway, HttpPaymentGateway,
        HttpSalonDirectory, HttpServiceCatalog, PaymentGateway, SalonDirectory, ServiceCatalog,
    },
    services::{
        availability_service::AvailabilityService, booking_flow_service::BookingFlowService,
        cart_service::CartService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação.
// Os colaboradores entram como `Arc<dyn …>` de propósito: os serviços do
// fluxo não sabem (nem devem saber) se falam com o gateway real ou com um
// dublê de teste.
#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: String,
    pub salon_directory: Arc<dyn SalonDirectory>,
    pub service_catalog: Arc<dyn ServiceCatalog>,
    pub booking_gateway: Arc<dyn BookingGateway>,
    pub availability_service: AvailabilityService,
    pub cart_service: Arc<CartService>,
    pub booking_flow_service: Arc<BookingFlowService>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // O gateway roteia todos os microsserviços (diretório de salões,
        // catálogo, reservas, pagamentos).
        let gateway_url = env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:8862/api".to_string());
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let service_token = env::var("GATEWAY_SERVICE_TOKEN").ok();

        // Política de disponibilidade degradada: com a busca de ocupados
        // fora do ar, a grade inteira aparece livre. Desligável por
        // ambiente.
        let degrade_on_error = env::var("DEGRADE_ON_ERROR")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let http = GatewayHttpClient::new(gateway_url.clone(), service_token)?;
        tracing::info!("✅ Cliente do gateway configurado para {}", gateway_url);

        // --- Monta o gráfico de dependências ---
        let salon_directory: Arc<dyn SalonDirectory> =
            Arc::new(HttpSalonDirectory::new(http.clone()));
        let service_catalog: Arc<dyn ServiceCatalog> =
            Arc::new(HttpServiceCatalog::new(http.clone()));
        let booking_gateway: Arc<dyn BookingGateway> =
            Arc::new(HttpBookingGateway::new(http.clone()));
        let payment_gateway: Arc<dyn PaymentGateway> = Arc::new(HttpPaymentGateway::new(http));

        let availability_service = AvailabilityService::new(
            salon_directory.clone(),
            booking_gateway.clone(),
            degrade_on_error,
        );
        let cart_service = Arc::new(CartService::new());
        let booking_flow_service = Arc::new(BookingFlowService::new(
            booking_gateway.clone(),
            payment_gateway,
            cart_service.clone(),
        ));

        Ok(Self {
            jwt_secret,
            salon_directory,
            service_catalog,
            booking_gateway,
            availability_service,
            cart_service,
            booking_flow_service,
        })
    }
}
