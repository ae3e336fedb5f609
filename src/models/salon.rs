// src/models/salon.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Representa um salão vindo do diretório de salões (via gateway).
// Imutável depois de buscado; este fluxo só lê.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    #[schema(example = "salon-001")]
    pub id: String,
    pub owner_id: Option<String>,
    #[schema(example = "Premium Salon & Spa")]
    pub name: String,
    #[schema(example = "123 Main Street, Tech Park")]
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    pub total_reviews: Option<u32>,
    pub description: Option<String>,
    // Horário de funcionamento no formato "HH:MM". Quando ausente (ou
    // ilegível), o resolvedor de horários usa a janela padrão 09:00–18:00.
    #[schema(example = "09:00")]
    pub opening_time: Option<String>,
    #[schema(example = "18:00")]
    pub closing_time: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// Parâmetros de paginação/busca da listagem de salões.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl SalonListQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(10)
    }
}
