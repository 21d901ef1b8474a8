//! Chart series derived from a loaded report

use contracts::dashboards::d400_relatorio_vendas::RelatorioResumo;
use contracts::domain::a001_vendedor::VendedorDto;
use contracts::domain::a002_venda::VendaDto;

pub const PAID_COLOR: &str = "#10b981";
pub const PENDING_COLOR: &str = "#f59e0b";

#[derive(Debug, Clone, PartialEq)]
pub struct VendedorTotals {
    pub nome: String,
    pub vendas: usize,
    pub valor: f64,
    pub comissao: f64,
}

/// Per-vendedor totals over the report rows, in vendedor list order.
/// Vendedores without sales in the report are left out. Rows without an
/// `id_vendedor` are matched on `nome_vendedor`.
pub fn totals_por_vendedor(vendedores: &[VendedorDto], vendas: &[VendaDto]) -> Vec<VendedorTotals> {
    vendedores
        .iter()
        .map(|vendedor| {
            let (count, valor, comissao) = vendas
                .iter()
                .filter(|v| match v.id_vendedor {
                    Some(id) => id == vendedor.id,
                    None => v.nome_vendedor.as_deref() == Some(vendedor.nome_vendedor.as_str()),
                })
                .fold((0, 0.0, 0.0), |(n, valor, comissao), v| {
                    (n + 1, valor + v.valor_venda, comissao + v.valor_comissao)
                });
            VendedorTotals {
                nome: vendedor.nome_vendedor.clone(),
                vendas: count,
                valor,
                comissao,
            }
        })
        .filter(|t| t.vendas > 0)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusTotal {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

pub fn status_comissoes(resumo: &RelatorioResumo) -> [StatusTotal; 2] {
    [
        StatusTotal {
            label: "Comissões Pagas",
            value: resumo.comissoes_pagas,
            color: PAID_COLOR,
        },
        StatusTotal {
            label: "Comissões Pendentes",
            value: resumo.comissoes_pendentes,
            color: PENDING_COLOR,
        },
    ]
}
