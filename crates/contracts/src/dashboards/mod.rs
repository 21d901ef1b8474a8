pub mod d400_relatorio_vendas;
pub mod d401_vendedor_dashboard;
