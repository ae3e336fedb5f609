// src/services/booking_flow_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Timelike, Utc};
use dashmap::DashMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::SessionUser,
        booking::{CheckoutPayload, CreateBookingRequest},
        payment::PaymentLinkRequest,
    },
    gateway::{BookingGateway, PaymentGateway},
    services::cart_service::CartService,
};

// Desfecho do fluxo de reserva. `Redirected` entrega o controle ao
// processador de pagamento externo (navegação completa, não um fetch);
// `LocalSuccess` é o atalho da configuração degenerada/de teste, quando o
// serviço de pagamentos não devolve link.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutOutcome {
    #[serde(rename_all = "camelCase")]
    Redirected { checkout_url: String, booking_id: String },
    #[serde(rename_all = "camelCase")]
    LocalSuccess { booking_id: String },
}

// Orquestra a sequência reserva → link de pagamento → redirecionamento.
//
// A máquina de estados é linear: Idle → Submitting → BookingCreated →
// PaymentLinkCreated → Redirected | LocalSuccess, com Error alcançável a
// partir de Submitting e de BookingCreated. Cada passo espera o anterior;
// nada roda em paralelo porque cada chamada depende do resultado da
// antecedente.
pub struct BookingFlowService {
    booking_gateway: Arc<dyn BookingGateway>,
    payment_gateway: Arc<dyn PaymentGateway>,
    cart_service: Arc<CartService>,
    // Sessões com envio em andamento. Enquanto a entrada existir, um novo
    // envio da mesma sessão é recusado — duplo clique não cria duas
    // reservas.
    in_flight: DashMap<Uuid, ()>,
}

impl BookingFlowService {
    pub fn new(
        booking_gateway: Arc<dyn BookingGateway>,
        payment_gateway: Arc<dyn PaymentGateway>,
        cart_service: Arc<CartService>,
    ) -> Self {
        Self {
            booking_gateway,
            payment_gateway,
            cart_service,
            in_flight: DashMap::new(),
        }
    }

    /// Envia a reserva do carrinho atual e pede o link de pagamento.
    ///
    /// A validação toda acontece antes de qualquer chamada de rede; um erro
    /// de validação nunca gera tráfego. Depois da reserva criada, falha no
    /// pagamento NÃO desfaz a reserva — o id dela volta no erro para o
    /// cliente tentar pagar de novo.
    pub async fn checkout(
        &self,
        customer: &SessionUser,
        payload: CheckoutPayload,
    ) -> Result<CheckoutOutcome, AppError> {
        let _guard = self.begin_submission(customer.id)?;

        // --- Idle → Submitting: validação local ---
        let cart = self.cart_service.snapshot(customer.id);
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        if cart.salon_id.as_deref() != Some(payload.salon_id.as_str()) {
            return Err(AppError::CartSalonMismatch);
        }
        let date = parse_selected_date(payload.date.as_deref())?;
        let time = parse_selected_time(payload.time.as_deref())?;

        // Preço capturado na montagem do carrinho; não re-buscamos para não
        // disputar com alteração de preço no meio do fluxo.
        let total = cart.total();
        let service_id = cart.items[0].service.id.clone();

        tracing::info!(
            "Fluxo de reserva: Submitting (cliente {}, salão {}, {} {})",
            customer.id,
            payload.salon_id,
            date,
            time
        );

        // --- Submitting → BookingCreated ---
        // Falha aqui aborta o fluxo com a mensagem do servidor repassada
        // textualmente; sem retry automático e sem chamada de pagamento.
        let booking = self
            .booking_gateway
            .create_booking(&CreateBookingRequest {
                user_id: customer.id,
                salon_id: payload.salon_id.clone(),
                service_id,
                booking_date: date,
                booking_time: time,
                notes: payload.notes.clone(),
            })
            .await?;

        tracing::info!("Fluxo de reserva: BookingCreated ({})", booking.id);

        // --- BookingCreated → PaymentLinkCreated ---
        let link_request = PaymentLinkRequest {
            booking_id: booking.id.clone(),
            amount: total,
            payment_method: payload.payment_method,
        };
        let link_response = match self.payment_gateway.create_payment_link(&link_request).await {
            Ok(response) => response,
            Err(err) => {
                // A reserva fica de pé (sem compensação automática aqui; o
                // serviço de reservas é quem teria que varrer pendências).
                tracing::warn!(
                    "Reserva {} criada, mas o link de pagamento falhou: {}",
                    booking.id,
                    err
                );
                return Err(AppError::PaymentLinkFailed {
                    booking_id: booking.id,
                    message: err.upstream_message(),
                });
            }
        };

        tracing::info!("Fluxo de reserva: PaymentLinkCreated ({})", booking.id);

        // Reserva enviada com sucesso: o carrinho da sessão cumpriu o papel.
        self.cart_service.clear(customer.id);

        match link_response.link() {
            Some(checkout_url) => Ok(CheckoutOutcome::Redirected {
                checkout_url,
                booking_id: booking.id,
            }),
            None => {
                tracing::warn!(
                    "Serviço de pagamentos não devolveu link para {}; confirmando localmente (modo de teste).",
                    booking.id
                );
                Ok(CheckoutOutcome::LocalSuccess { booking_id: booking.id })
            }
        }
    }

    fn begin_submission(&self, customer_id: Uuid) -> Result<SubmissionGuard<'_>, AppError> {
        use dashmap::mapref::entry::Entry;

        match self.in_flight.entry(customer_id) {
            Entry::Occupied(_) => Err(AppError::SubmissionInProgress),
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Ok(SubmissionGuard { in_flight: &self.in_flight, customer_id })
            }
        }
    }
}

// Libera a trava de envio em qualquer saída do fluxo, inclusive pelo `?`.
struct SubmissionGuard<'a> {
    in_flight: &'a DashMap<Uuid, ()>,
    customer_id: Uuid,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.customer_id);
    }
}

fn parse_selected_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::DateNotSelected)?;

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(raw.to_string()))?;

    if date < Utc::now().date_naive() {
        return Err(AppError::DateInPast);
    }

    Ok(date)
}

// Normaliza o horário escolhido para "HH:MM" e exige alinhamento na grade
// de meia em meia hora — a fronteira de seleção já desabilita horários
// fora da grade, mas o envio não confia nela.
fn parse_selected_time(raw: Option<&str>) -> Result<String, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::TimeNotSelected)?;

    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AppError::InvalidTime(raw.to_string()))?;

    if time.minute() % 30 != 0 {
        return Err(AppError::InvalidTime(raw.to_string()));
    }

    Ok(time.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::gateway::mock::{sample_service, MockBookingGateway, MockPaymentGateway};
    use crate::models::auth::UserRole;
    use crate::models::payment::PaymentMethod;

    fn a_customer() -> SessionUser {
        SessionUser { id: Uuid::new_v4(), role: UserRole::Customer }
    }

    fn payload(date: Option<&str>, time: Option<&str>) -> CheckoutPayload {
        CheckoutPayload {
            salon_id: "salon-001".to_string(),
            date: date.map(|s| s.to_string()),
            time: time.map(|s| s.to_string()),
            notes: None,
            payment_method: PaymentMethod::Stripe,
        }
    }

    struct Harness {
        flow: BookingFlowService,
        bookings: Arc<MockBookingGateway>,
        payments: Arc<MockPaymentGateway>,
        carts: Arc<CartService>,
    }

    fn harness(bookings: MockBookingGateway, payments: MockPaymentGateway) -> Harness {
        let bookings = Arc::new(bookings);
        let payments = Arc::new(payments);
        let carts = Arc::new(CartService::new());
        let flow =
            BookingFlowService::new(bookings.clone(), payments.clone(), carts.clone());
        Harness { flow, bookings, payments, carts }
    }

    #[tokio::test]
    async fn fluxo_completo_termina_em_redirecionamento() {
        let h = harness(
            MockBookingGateway::default(),
            MockPaymentGateway::returning(Some("https://pay/x")),
        );
        let customer = a_customer();
        h.carts.add_service(customer.id, sample_service("svc-1", 300));

        let outcome = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap();

        match outcome {
            CheckoutOutcome::Redirected { checkout_url, booking_id } => {
                assert_eq!(checkout_url, "https://pay/x");
                assert_eq!(booking_id, "B1");
            }
            other => panic!("esperava Redirected, veio {:?}", other),
        }
        assert_eq!(h.bookings.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.payments.calls.load(Ordering::SeqCst), 1);
        // Carrinho consumido pelo envio.
        assert!(h.carts.snapshot(customer.id).is_empty());
    }

    #[tokio::test]
    async fn sem_link_de_checkout_cai_no_sucesso_local() {
        let h = harness(
            MockBookingGateway::default(),
            MockPaymentGateway::returning(None),
        );
        let customer = a_customer();
        h.carts.add_service(customer.id, sample_service("svc-1", 300));

        let outcome = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap();

        assert!(
            matches!(outcome, CheckoutOutcome::LocalSuccess { ref booking_id } if booking_id == "B1")
        );
    }

    #[tokio::test]
    async fn falha_na_reserva_repassa_a_mensagem_e_nao_chama_pagamento() {
        let bookings = MockBookingGateway {
            reject_create_with: Some("Slot already taken".to_string()),
            ..MockBookingGateway::default()
        };
        let h = harness(bookings, MockPaymentGateway::returning(Some("https://pay/x")));
        let customer = a_customer();
        h.carts.add_service(customer.id, sample_service("svc-1", 300));

        let err = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap_err();

        match err {
            AppError::UpstreamRejected { message, .. } => {
                assert_eq!(message, "Slot already taken");
            }
            other => panic!("esperava UpstreamRejected, veio {:?}", other),
        }
        assert_eq!(h.payments.calls.load(Ordering::SeqCst), 0);
        // O formulário (carrinho) continua populado para nova tentativa.
        assert!(!h.carts.snapshot(customer.id).is_empty());
    }

    #[tokio::test]
    async fn falha_no_pagamento_preserva_a_reserva_criada() {
        let payments = MockPaymentGateway {
            fail: true,
            ..MockPaymentGateway::returning(None)
        };
        let h = harness(MockBookingGateway::default(), payments);
        let customer = a_customer();
        h.carts.add_service(customer.id, sample_service("svc-1", 300));

        let err = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap_err();

        match err {
            AppError::PaymentLinkFailed { booking_id, .. } => assert_eq!(booking_id, "B1"),
            other => panic!("esperava PaymentLinkFailed, veio {:?}", other),
        }
        assert_eq!(h.bookings.create_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn validacao_rejeita_sem_nenhuma_chamada_de_rede() {
        let h = harness(
            MockBookingGateway::default(),
            MockPaymentGateway::returning(Some("https://pay/x")),
        );
        let customer = a_customer();

        // Carrinho vazio
        let err = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyCart));

        // Sem data / sem horário
        h.carts.add_service(customer.id, sample_service("svc-1", 300));
        let err = h.flow.checkout(&customer, payload(None, Some("11:00"))).await.unwrap_err();
        assert!(matches!(err, AppError::DateNotSelected));
        let err = h.flow.checkout(&customer, payload(Some("2031-05-20"), None)).await.unwrap_err();
        assert!(matches!(err, AppError::TimeNotSelected));

        // Data no passado e horário fora da grade
        let err = h.flow.checkout(&customer, payload(Some("2020-01-01"), Some("11:00"))).await.unwrap_err();
        assert!(matches!(err, AppError::DateInPast));
        let err = h.flow.checkout(&customer, payload(Some("2031-05-20"), Some("11:10"))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));

        assert_eq!(h.bookings.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.bookings.booked_fetch_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.payments.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn carrinho_de_outro_salao_e_rejeitado() {
        let h = harness(
            MockBookingGateway::default(),
            MockPaymentGateway::returning(Some("https://pay/x")),
        );
        let customer = a_customer();
        let mut service = sample_service("svc-1", 300);
        service.salon_id = "salon-002".to_string();
        h.carts.add_service(customer.id, service);

        let err = h
            .flow
            .checkout(&customer, payload(Some("2031-05-20"), Some("11:00")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CartSalonMismatch));
        assert_eq!(h.bookings.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn duplo_envio_cria_exatamente_uma_reserva() {
        let bookings = MockBookingGateway {
            create_delay: Some(Duration::from_millis(50)),
            ..MockBookingGateway::default()
        };
        let h = harness(bookings, MockPaymentGateway::returning(Some("https://pay/x")));
        let customer = a_customer();
        h.carts.add_service(customer.id, sample_service("svc-1", 300));

        let first = h.flow.checkout(&customer, payload(Some("2031-05-20"), Some("11:00")));
        let second = h.flow.checkout(&customer, payload(Some("2031-05-20"), Some("11:00")));
        let (first, second) = tokio::join!(first, second);

        // Um envio passa; o outro é barrado pela trava (ou, se chegar
        // depois do primeiro terminar, pelo carrinho já consumido).
        assert_eq!(h.bookings.create_calls.load(Ordering::SeqCst), 1);
        assert!(first.is_ok() || second.is_ok());
        assert!(first.is_err() || second.is_err());
    }
}
