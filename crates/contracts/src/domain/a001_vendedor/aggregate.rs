use serde::{Deserialize, Serialize};

/// Salesperson identifier as issued by the API (integer primary key)
pub type VendedorId = i64;

/// Row of `GET /api/vendedores`
///
/// The listing joins the salesperson with its commission table, so
/// `porcentagem_comissao` and `nome_tabela` are absent for salespeople
/// without any commission configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendedorDto {
    pub id: VendedorId,
    pub nome_vendedor: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ativo: Option<bool>,
    #[serde(default)]
    pub porcentagem_comissao: Option<f64>,
    #[serde(default)]
    pub nome_tabela: Option<String>,
}

/// Public identity of a logged-in salesperson (login and dashboard payloads)
///
/// This is also the record persisted in browser storage for session restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendedorPublico {
    pub id: VendedorId,
    pub nome_vendedor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}
