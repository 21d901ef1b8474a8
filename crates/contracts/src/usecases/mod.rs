pub mod common;
pub mod u501_importacao_vendas;
