use crate::domain::a001_vendedor::VendedorPublico;
use crate::domain::a002_venda::VendaDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardEstatisticas {
    pub total_vendas: u64,
    pub total_valor_vendas: f64,
    #[serde(default)]
    pub total_comissoes: f64,
    pub comissoes_pagas: f64,
    pub comissoes_pendentes: f64,
}

/// Response of the authenticated `GET /api/auth/dashboard`
///
/// Accepts `data_inicio`, `data_fim` and `comissao_paga` as query filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendedorDashboardResponse {
    pub vendedor: VendedorPublico,
    pub vendas: Vec<VendaDto>,
    pub estatisticas: DashboardEstatisticas,
}
