// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Um serviço oferecido por um salão (catálogo de serviços, via gateway).
// Somente leitura neste fluxo; o preço capturado aqui é o que vale na hora
// de montar o carrinho e cobrar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    #[schema(example = "svc-001")]
    pub id: String,
    pub salon_id: String,
    #[schema(example = "Corte de cabelo")]
    pub name: String,
    #[schema(example = "haircut")]
    pub category: String,
    #[schema(example = 300.0)]
    pub price: Decimal,
    // Duração em minutos
    #[schema(example = 30)]
    pub duration: u32,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
}
