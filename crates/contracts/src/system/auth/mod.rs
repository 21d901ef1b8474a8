use crate::domain::a001_vendedor::VendedorPublico;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential for `/api/auth/*` calls
    pub token: String,
    pub vendedor: VendedorPublico,
    #[serde(default)]
    pub mensagem: Option<String>,
}
