// src/gateway/payment.rs

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::payment::{PaymentLinkRequest, PaymentLinkResponse};

use super::GatewayHttpClient;

// Serviço de pagamentos (PAYMENT-SERVICE, via gateway). O fluxo só pede o
// link de checkout; liquidação, confirmação e estorno ficam do outro lado.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_link(
        &self,
        req: &PaymentLinkRequest,
    ) -> Result<PaymentLinkResponse, AppError>;
}

#[derive(Clone)]
pub struct HttpPaymentGateway {
    http: GatewayHttpClient,
}

impl HttpPaymentGateway {
    pub fn new(http: GatewayHttpClient) -> Self {
        HttpPaymentGateway { http }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_payment_link(
        &self,
        req: &PaymentLinkRequest,
    ) -> Result<PaymentLinkResponse, AppError> {
        self.http.post("/payments", req).await
    }
}
