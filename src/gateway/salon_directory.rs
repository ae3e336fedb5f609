// src/gateway/salon_directory.rs

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::salon::Salon;

use super::GatewayHttpClient;

// Diretório de salões (SALON-SERVICE, via gateway).
#[async_trait]
pub trait SalonDirectory: Send + Sync {
    async fn get_salon_by_id(&self, id: &str) -> Result<Salon, AppError>;

    async fn get_salons(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<Vec<Salon>, AppError>;
}

#[derive(Clone)]
pub struct HttpSalonDirectory {
    http: GatewayHttpClient,
}

impl HttpSalonDirectory {
    pub fn new(http: GatewayHttpClient) -> Self {
        HttpSalonDirectory { http }
    }
}

#[async_trait]
impl SalonDirectory for HttpSalonDirectory {
    async fn get_salon_by_id(&self, id: &str) -> Result<Salon, AppError> {
        self.http.get(&format!("/salons/{}", id), &[]).await
    }

    async fn get_salons(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<Vec<Salon>, AppError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        self.http.get("/salons", &query).await
    }
}
