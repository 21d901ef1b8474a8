use crate::domain::a002_venda::VendaDto;
use serde::{Deserialize, Serialize};

/// Aggregates over the filtered sales set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatorioResumo {
    pub total_vendas: u64,
    pub total_valor_vendas: f64,
    pub comissoes_pagas: f64,
    pub comissoes_pendentes: f64,
}

/// Response of `GET /api/relatorio/vendas`
///
/// Query parameters (all optional): `nome_vendedor`, `data_inicio`,
/// `data_fim` (`YYYY-MM-DD`) and `comissao_paga` (`true`/`false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioVendasResponse {
    pub resumo: RelatorioResumo,
    pub vendas: Vec<VendaDto>,
}
