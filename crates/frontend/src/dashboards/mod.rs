pub mod d400_relatorio_vendas;
pub mod d401_vendedor_dashboard;

pub use d400_relatorio_vendas::ui::RelatorioVendasDashboard;
pub use d401_vendedor_dashboard::ui::VendedorDashboard;
