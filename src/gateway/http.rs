// src/gateway/http.rs

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::error::AppError;

// O cliente HTTP compartilhado por todos os colaboradores. Roteia tudo
// pelo gateway de microsserviços e anexa a credencial de serviço de forma
// transparente — o fluxo em si nunca lida com token de transporte.
//
// Contrato transversal: um 401 de QUALQUER chamada significa "sessão
// inválida" e vira `AppError::InvalidToken` (o cliente redireciona para o
// login); qualquer outro não-2xx tem a mensagem do corpo repassada
// textualmente quando existir.
#[derive(Clone)]
pub struct GatewayHttpClient {
    client: reqwest::Client,
    base_url: String,
    service_token: Option<String>,
}

impl GatewayHttpClient {
    pub fn new(base_url: String, service_token: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(GatewayHttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.service_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        tracing::debug!("GET gateway{}", path);
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        tracing::debug!("POST gateway{}", path);
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::InvalidToken);
        }

        if !status.is_success() {
            let message = Self::extract_message(response).await;
            return Err(AppError::UpstreamRejected { status: status.as_u16(), message });
        }

        Ok(response.json::<T>().await?)
    }

    // Procura `message`/`error` no corpo de erro; sem corpo legível, cai
    // na mensagem genérica (o erro nunca é engolido em silêncio).
    async fn extract_message(response: reqwest::Response) -> String {
        const FALLBACK: &str = "O serviço remoto retornou um erro inesperado.";

        let text = match response.text().await {
            Ok(text) => text,
            Err(_) => return FALLBACK.to_string(),
        };

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            for key in ["message", "error"] {
                if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                    if !message.trim().is_empty() {
                        return message.to_string();
                    }
                }
            }
        }

        if !text.trim().is_empty() {
            return text.trim().to_string();
        }

        FALLBACK.to_string()
    }
}
