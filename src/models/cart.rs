// src/models/cart.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::catalog::ServiceOffering;

// Um item do carrinho: o serviço com o preço capturado no momento da
// adição, e a quantidade.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub service: ServiceOffering,
    #[schema(example = 1)]
    pub quantity: u32,
}

// O carrinho de uma sessão de navegação. Estado puramente em memória,
// exclusivo da sessão; é descartado ao sair do fluxo (ou ao trocar de
// salão). Itens são chaveados pela identidade do serviço.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    // Todos os itens pertencem ao mesmo salão.
    pub salon_id: Option<String>,
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Adiciona um serviço. Se já está no carrinho, incrementa a quantidade
    /// em vez de duplicar a entrada.
    pub fn add(&mut self, service: ServiceOffering) {
        if let Some(item) = self.items.iter_mut().find(|i| i.service.id == service.id) {
            item.quantity += 1;
            return;
        }
        self.salon_id.get_or_insert_with(|| service.salon_id.clone());
        self.items.push(CartItem { service, quantity: 1 });
    }

    /// Remove a entrada do serviço (a entrada inteira, não uma unidade).
    pub fn remove(&mut self, service_id: &str) {
        self.items.retain(|i| i.service.id != service_id);
        if self.items.is_empty() {
            self.salon_id = None;
        }
    }

    /// Total do carrinho: Σ preço × quantidade. Sem impostos, descontos ou
    /// conversão de moeda.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.service.price * Decimal::from(i.quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Resposta dos endpoints de carrinho: itens + total calculado.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub salon_id: Option<String>,
    pub items: Vec<CartItem>,
    #[schema(example = 650.0)]
    pub total: Decimal,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total = cart.total();
        CartView { salon_id: cart.salon_id, items: cart.items, total }
    }
}
