use crate::domain::a001_vendedor::VendedorId;
use serde::{Deserialize, Serialize};

pub type VendaId = i64;

/// Sale record as returned by the listing, report and dashboard endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaDto {
    pub id: VendaId,
    /// Masked CPF, `XXX.XXX.XXX-XX`
    pub cpf_cliente: String,
    pub nome_cliente: String,
    /// ISO date `YYYY-MM-DD`
    #[serde(default)]
    pub data_venda: Option<String>,
    pub valor_venda: f64,
    #[serde(default)]
    pub valor_comissao: f64,
    #[serde(default)]
    pub comissao_paga: bool,

    // Commission table join
    #[serde(default)]
    pub id_vendedor_comissao: Option<i64>,
    #[serde(default)]
    pub id_vendedor: Option<VendedorId>,
    #[serde(default)]
    pub nome_vendedor: Option<String>,
    #[serde(default)]
    pub nome_tabela: Option<String>,
    #[serde(default)]
    pub porcentagem_comissao: Option<f64>,

    #[serde(default)]
    pub usuario_cadastro: Option<String>,
}

impl VendaDto {
    /// Label used in tables and exports for the commission flag
    pub fn status_comissao(&self) -> &'static str {
        if self.comissao_paga {
            "Paga"
        } else {
            "Pendente"
        }
    }
}
