// src/gateway/service_catalog.rs

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::catalog::ServiceOffering;

use super::GatewayHttpClient;

// Catálogo de serviços (SERVICE-OFFERING, via gateway).
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn get_service_by_id(&self, id: &str) -> Result<ServiceOffering, AppError>;

    async fn get_services_by_salon(&self, salon_id: &str)
        -> Result<Vec<ServiceOffering>, AppError>;
}

#[derive(Clone)]
pub struct HttpServiceCatalog {
    http: GatewayHttpClient,
}

impl HttpServiceCatalog {
    pub fn new(http: GatewayHttpClient) -> Self {
        HttpServiceCatalog { http }
    }
}

#[async_trait]
impl ServiceCatalog for HttpServiceCatalog {
    async fn get_service_by_id(&self, id: &str) -> Result<ServiceOffering, AppError> {
        self.http.get(&format!("/services/{}", id), &[]).await
    }

    async fn get_services_by_salon(
        &self,
        salon_id: &str,
    ) -> Result<Vec<ServiceOffering>, AppError> {
        self.http.get(&format!("/salons/{}/services", salon_id), &[]).await
    }
}
