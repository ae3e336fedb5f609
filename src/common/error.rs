use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
//
// Três famílias, cada uma com um destino diferente:
// - Erros de validação nunca chegam à rede: são detectados antes de
//   qualquer chamada aos colaboradores e voltam como 4xx.
// - Erros dos colaboradores (gateway) abortam a transição atual do fluxo,
//   preservando o que já foi criado (uma reserva criada não sofre rollback).
// - Erros internos viram 500 genérico, com o detalhe apenas no log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Carrinho vazio")]
    EmptyCart,

    #[error("Data não selecionada")]
    DateNotSelected,

    #[error("Horário não selecionado")]
    TimeNotSelected,

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("Horário inválido: {0}")]
    InvalidTime(String),

    #[error("Data no passado")]
    DateInPast,

    #[error("Carrinho pertence a outro salão")]
    CartSalonMismatch,

    #[error("Sessão não autenticada")]
    Unauthenticated,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Envio já em andamento")]
    SubmissionInProgress,

    // O serviço remoto respondeu com erro; a mensagem dele é repassada
    // textualmente ao usuário (contrato do fluxo, nunca engolida).
    #[error("Erro do serviço remoto ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    // Falha de transporte (rede, timeout, DNS) a caminho do gateway.
    #[error("Falha ao contactar o gateway")]
    GatewayUnreachable(#[from] reqwest::Error),

    // A reserva foi criada mas o link de pagamento falhou. A reserva fica
    // de pé; o id dela volta na resposta para o cliente poder tentar o
    // pagamento de novo.
    #[error("Reserva {booking_id} criada, mas o pagamento falhou: {message}")]
    PaymentLinkFailed { booking_id: String, message: String },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Mensagem legível para o usuário quando o erro vem de um colaborador.
    pub fn upstream_message(&self) -> String {
        match self {
            AppError::UpstreamRejected { message, .. } => message.clone(),
            AppError::GatewayUnreachable(_) => {
                "O serviço está temporariamente indisponível.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmptyCart => {
                (StatusCode::BAD_REQUEST, "Selecione ao menos um serviço antes de reservar.".to_string())
            }
            AppError::DateNotSelected => {
                (StatusCode::BAD_REQUEST, "Selecione uma data para a reserva.".to_string())
            }
            AppError::TimeNotSelected => {
                (StatusCode::BAD_REQUEST, "Selecione um horário para a reserva.".to_string())
            }
            AppError::InvalidDate(ref d) => {
                (StatusCode::BAD_REQUEST, format!("A data '{}' não é válida (use AAAA-MM-DD).", d))
            }
            AppError::InvalidTime(ref t) => {
                (StatusCode::BAD_REQUEST, format!("O horário '{}' não é válido (use HH:MM em passos de 30 minutos).", t))
            }
            AppError::DateInPast => {
                (StatusCode::BAD_REQUEST, "A data da reserva não pode estar no passado.".to_string())
            }
            AppError::CartSalonMismatch => {
                (StatusCode::BAD_REQUEST, "O carrinho atual pertence a outro salão.".to_string())
            }
            AppError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Faça login para continuar.".to_string())
            }
            AppError::InvalidToken | AppError::JwtError(_) => {
                (StatusCode::UNAUTHORIZED, "Token de autenticação inválido ou ausente.".to_string())
            }
            AppError::SubmissionInProgress => {
                (StatusCode::CONFLICT, "Já existe uma reserva sendo enviada para esta sessão.".to_string())
            }
            // A mensagem do serviço remoto é repassada como veio; o status
            // original é preservado quando for um 4xx significativo.
            AppError::UpstreamRejected { status, message } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, message)
            }
            AppError::GatewayUnreachable(ref e) => {
                tracing::error!("Falha de transporte ao contactar o gateway: {}", e);
                (StatusCode::BAD_GATEWAY, "O serviço está temporariamente indisponível.".to_string())
            }
            AppError::PaymentLinkFailed { booking_id, message } => {
                let body = Json(json!({
                    "error": format!("Sua reserva foi criada, mas o pagamento falhou: {}", message),
                    "bookingId": booking_id,
                }));
                return (StatusCode::BAD_GATEWAY, body).into_response();
            }
            // Todos os outros erros viram 500. O `tracing` loga a mensagem
            // detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
