// src/gateway/mod.rs
//
// A camada de colaboradores externos. O papel que o `db/` teria num
// serviço com banco próprio: aqui toda a persistência mora atrás do
// gateway de microsserviços, então cada "repositório" é um cliente HTTP.
//
// Cada colaborador é um trait, e os serviços do fluxo recebem `Arc<dyn …>`.
// Isso colapsa a antiga duplicação mock-vs-real numa interface só: a
// implementação HTTP vive aqui, e as implementações de mentira vivem
// apenas nos testes.

pub mod booking;
pub mod http;
pub mod payment;
pub mod salon_directory;
pub mod service_catalog;

pub use booking::{BookingGateway, HttpBookingGateway};
pub use http::GatewayHttpClient;
pub use payment::{HttpPaymentGateway, PaymentGateway};
pub use salon_directory::{HttpSalonDirectory, SalonDirectory};
pub use service_catalog::{HttpServiceCatalog, ServiceCatalog};

#[cfg(test)]
pub(crate) mod mock {
    //! Colaboradores de mentira para os testes dos serviços do fluxo.
    //! Contam chamadas com `AtomicUsize` para as propriedades do tipo
    //! "rejeitado sem nenhuma chamada de rede".

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::common::error::AppError;
    use crate::models::booking::{Booking, BookingStatus, CreateBookingRequest};
    use crate::models::catalog::ServiceOffering;
    use crate::models::payment::{PaymentLinkRequest, PaymentLinkResponse};
    use crate::models::salon::Salon;

    use super::{BookingGateway, PaymentGateway, SalonDirectory};

    pub fn sample_salon(opening: Option<&str>, closing: Option<&str>) -> Salon {
        Salon {
            id: "salon-001".to_string(),
            owner_id: None,
            name: "Premium Salon & Spa".to_string(),
            address: "123 Main Street, Tech Park".to_string(),
            city: "Baddi".to_string(),
            phone: Some("9876543210".to_string()),
            email: Some("salon@example.com".to_string()),
            rating: Some(4.5),
            total_reviews: Some(156),
            description: None,
            opening_time: opening.map(|s| s.to_string()),
            closing_time: closing.map(|s| s.to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn sample_service(id: &str, price: u32) -> ServiceOffering {
        ServiceOffering {
            id: id.to_string(),
            salon_id: "salon-001".to_string(),
            name: format!("Serviço {}", id),
            category: "haircut".to_string(),
            price: Decimal::from(price),
            duration: 30,
            description: None,
            is_active: Some(true),
            created_at: None,
        }
    }

    pub struct MockSalonDirectory {
        pub salon: Salon,
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl MockSalonDirectory {
        pub fn returning(salon: Salon) -> Self {
            MockSalonDirectory { salon, fail: false, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl SalonDirectory for MockSalonDirectory {
        async fn get_salon_by_id(&self, _id: &str) -> Result<Salon, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::UpstreamRejected {
                    status: 404,
                    message: "Salão não encontrado".to_string(),
                });
            }
            Ok(self.salon.clone())
        }

        async fn get_salons(
            &self,
            _page: u32,
            _limit: u32,
            _search: Option<&str>,
        ) -> Result<Vec<Salon>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![self.salon.clone()])
        }
    }

    pub struct MockBookingGateway {
        pub booked_times: Vec<String>,
        pub fail_booked_fetch: bool,
        // Mensagem de erro que `create_booking` deve devolver (verbatim).
        pub reject_create_with: Option<String>,
        // Atraso artificial em `create_booking`, para testes de reenvio
        // concorrente.
        pub create_delay: Option<std::time::Duration>,
        pub booked_fetch_calls: AtomicUsize,
        pub create_calls: AtomicUsize,
    }

    impl Default for MockBookingGateway {
        fn default() -> Self {
            MockBookingGateway {
                booked_times: Vec::new(),
                fail_booked_fetch: false,
                reject_create_with: None,
                create_delay: None,
                booked_fetch_calls: AtomicUsize::new(0),
                create_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BookingGateway for MockBookingGateway {
        async fn get_booked_slots(
            &self,
            _salon_id: &str,
            _date: NaiveDate,
        ) -> Result<Vec<String>, AppError> {
            self.booked_fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_booked_fetch {
                return Err(AppError::UpstreamRejected {
                    status: 503,
                    message: "Serviço de reservas indisponível".to_string(),
                });
            }
            Ok(self.booked_times.clone())
        }

        async fn create_booking(&self, req: &CreateBookingRequest) -> Result<Booking, AppError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.create_delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(message) = &self.reject_create_with {
                return Err(AppError::UpstreamRejected {
                    status: 409,
                    message: message.clone(),
                });
            }
            Ok(Booking {
                id: "B1".to_string(),
                customer_id: Some(req.user_id.to_string()),
                salon_id: req.salon_id.clone(),
                service_id: req.service_id.clone(),
                date: req.booking_date.to_string(),
                time: req.booking_time.clone(),
                status: BookingStatus::Pending,
                total_price: None,
                notes: req.notes.clone(),
                created_at: None,
            })
        }

        async fn get_booking_by_id(&self, _id: &str) -> Result<Booking, AppError> {
            Err(AppError::UpstreamRejected {
                status: 404,
                message: "Reserva não encontrada".to_string(),
            })
        }

        async fn get_customer_bookings(&self, _customer_id: Uuid) -> Result<Vec<Booking>, AppError> {
            Ok(Vec::new())
        }

        async fn get_salon_bookings(&self, _salon_id: &str) -> Result<Vec<Booking>, AppError> {
            Ok(Vec::new())
        }

        async fn cancel_booking(&self, _id: &str) -> Result<Booking, AppError> {
            Err(AppError::UpstreamRejected {
                status: 404,
                message: "Reserva não encontrada".to_string(),
            })
        }
    }

    pub struct MockPaymentGateway {
        // `None` simula a configuração degenerada/teste sem link de checkout.
        pub link: Option<String>,
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl MockPaymentGateway {
        pub fn returning(link: Option<&str>) -> Self {
            MockPaymentGateway {
                link: link.map(|l| l.to_string()),
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockPaymentGateway {
        async fn create_payment_link(
            &self,
            _req: &PaymentLinkRequest,
        ) -> Result<PaymentLinkResponse, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::UpstreamRejected {
                    status: 502,
                    message: "Serviço de pagamentos indisponível".to_string(),
                });
            }
            Ok(PaymentLinkResponse { payment_link: self.link.clone(), checkout_url: None })
        }
    }
}
