//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod gateway;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .expect("Falha ao inicializar o estado da aplicação.");

    // Rotas públicas de navegação (diretório, catálogo e horários)
    let browse_routes = Router::new()
        .route("/salons", get(handlers::salons::list_salons))
        .route("/salons/{salon_id}", get(handlers::salons::get_salon))
        .route(
            "/salons/{salon_id}/services",
            get(handlers::salons::list_salon_services),
        )
        .route(
            "/salons/{salon_id}/slots",
            get(handlers::availability::get_slots),
        )
        .route("/services/{service_id}", get(handlers::salons::get_service));

    // Carrinho da sessão (protegido pelo middleware)
    let cart_routes = Router::new()
        .route("/"
               ,get(handlers::cart::get_cart)
               .delete(handlers::cart::clear_cart)
        )
        .route("/items"
               ,post(handlers::cart::add_item)
        )
        .route("/items/{service_id}"
               ,delete(handlers::cart::remove_item)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Fluxo de reserva e consultas (protegido)
    let booking_routes = Router::new()
        .route("/checkout"
               ,post(handlers::bookings::checkout)
        )
        .route("/customer"
               ,get(handlers::bookings::my_bookings)
        )
        .route("/salon/{salon_id}"
               ,get(handlers::bookings::salon_bookings)
        )
        .route("/{booking_id}"
               ,get(handlers::bookings::get_booking)
        )
        .route("/{booking_id}/cancel"
               ,post(handlers::bookings::cancel_booking)
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", browse_routes)
        .nest("/api/cart", cart_routes)
        .nest("/api/bookings", booking_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
