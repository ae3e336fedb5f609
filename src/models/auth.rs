// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Customer,
    SalonOwner,
    Admin,
}

// Estrutura de dados ("claims") dentro do JWT emitido pelo serviço de
// usuários (atrás do gateway). Este serviço só valida, nunca emite.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // Subject (ID do usuário)
    pub role: UserRole,
    pub exp: usize,  // Expiration time (quando o token expira)
    pub iat: usize,  // Issued At (quando o token foi criado)
}

// A identidade autenticada da sessão, extraída do token. O fluxo exige uma
// identidade explícita: não existe usuário padrão fabricado — sessão sem
// token válido é `Unauthenticated`, e ponto.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl From<&Claims> for SessionUser {
    fn from(claims: &Claims) -> Self {
        SessionUser { id: claims.sub, role: claims.role }
    }
}
