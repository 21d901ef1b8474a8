pub mod a001_vendedor;
pub mod a002_venda;
