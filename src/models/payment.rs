// src/models/payment.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Stripe,
    Card,
    Upi,
    Wallet,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Stripe
    }
}

// Corpo enviado ao serviço de pagamentos para criar o link de checkout.
// O `amount` é o total capturado no momento da reserva — deliberadamente
// não re-buscado, para não correr atrás de preço alterado no meio do fluxo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkRequest {
    pub booking_id: String,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
}

// O serviço de pagamentos responde com `paymentLink` ou `checkoutUrl`
// dependendo da versão; os dois campos são aceitos.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkResponse {
    pub payment_link: Option<String>,
    pub checkout_url: Option<String>,
}

impl PaymentLinkResponse {
    /// O link de checkout, se o serviço devolveu algum (não-vazio).
    pub fn link(&self) -> Option<String> {
        self.payment_link
            .as_deref()
            .or(self.checkout_url.as_deref())
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.to_string())
    }
}
