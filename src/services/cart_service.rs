// src/services/cart_service.rs

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{
    cart::{Cart, CartView},
    catalog::ServiceOffering,
};

// Guarda o carrinho de cada sessão autenticada. Estado efêmero em memória:
// não sobrevive a reinício do processo e não é compartilhado com nenhum
// outro serviço — o carrinho só existe enquanto o cliente navega.
pub struct CartService {
    carts: DashMap<Uuid, Cart>,
}

impl CartService {
    pub fn new() -> Self {
        CartService { carts: DashMap::new() }
    }

    /// Adiciona um serviço ao carrinho do cliente. Trocar de salão descarta
    /// o carrinho anterior — a seleção pertence à visita de um salão só.
    pub fn add_service(&self, customer_id: Uuid, service: ServiceOffering) -> CartView {
        let mut cart = self.carts.entry(customer_id).or_default();
        if cart.salon_id.as_deref().is_some_and(|s| s != service.salon_id) {
            *cart = Cart::default();
        }
        cart.add(service);
        cart.clone().into()
    }

    pub fn remove_service(&self, customer_id: Uuid, service_id: &str) -> CartView {
        let mut cart = self.carts.entry(customer_id).or_default();
        cart.remove(service_id);
        cart.clone().into()
    }

    /// Visão do carrinho (itens + total); vazio quando nunca houve adição.
    pub fn view(&self, customer_id: Uuid) -> CartView {
        self.snapshot(customer_id).into()
    }

    /// Cópia do carrinho atual, para o fluxo de reserva trabalhar sem
    /// segurar referência no mapa.
    pub fn snapshot(&self, customer_id: Uuid) -> Cart {
        self.carts
            .get(&customer_id)
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self, customer_id: Uuid) {
        self.carts.remove(&customer_id);
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::gateway::mock::sample_service;

    fn customer() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn adicionar_o_mesmo_servico_incrementa_a_quantidade() {
        let carts = CartService::new();
        let id = customer();

        carts.add_service(id, sample_service("svc-1", 300));
        let view = carts.add_service(id, sample_service("svc-1", 300));

        // Uma entrada só, com quantidade 2 — nunca duas entradas.
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.total, Decimal::from(600));
    }

    #[test]
    fn total_independe_da_ordem_de_adicao() {
        let carts = CartService::new();
        let a = customer();
        let b = customer();

        carts.add_service(a, sample_service("svc-1", 300));
        carts.add_service(a, sample_service("svc-2", 500));

        carts.add_service(b, sample_service("svc-2", 500));
        carts.add_service(b, sample_service("svc-1", 300));

        assert_eq!(carts.view(a).total, carts.view(b).total);
        assert_eq!(carts.view(a).total, Decimal::from(800));
    }

    #[test]
    fn remover_tira_a_entrada_inteira() {
        let carts = CartService::new();
        let id = customer();

        carts.add_service(id, sample_service("svc-1", 300));
        carts.add_service(id, sample_service("svc-1", 300));
        carts.add_service(id, sample_service("svc-2", 500));

        let view = carts.remove_service(id, "svc-1");

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].service.id, "svc-2");
        assert_eq!(view.total, Decimal::from(500));
    }

    #[test]
    fn trocar_de_salao_descarta_o_carrinho() {
        let carts = CartService::new();
        let id = customer();

        carts.add_service(id, sample_service("svc-1", 300));

        let mut other = sample_service("svc-9", 900);
        other.salon_id = "salon-002".to_string();
        let view = carts.add_service(id, other);

        assert_eq!(view.salon_id.as_deref(), Some("salon-002"));
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].service.id, "svc-9");
    }

    #[test]
    fn carrinho_de_quem_nunca_adicionou_e_vazio() {
        let carts = CartService::new();

        let view = carts.view(customer());

        assert!(view.items.is_empty());
        assert_eq!(view.total, Decimal::ZERO);
    }

    #[test]
    fn limpar_zera_o_carrinho() {
        let carts = CartService::new();
        let id = customer();

        carts.add_service(id, sample_service("svc-1", 300));
        carts.clear(id);

        assert!(carts.snapshot(id).is_empty());
    }
}
