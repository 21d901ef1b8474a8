use crate::shared::fetch::ApiRequest;
use crate::shared::filters::{FilterQuery, FilterSchema};

pub const RELATORIO_PATH: &str = "/api/relatorio/vendas";

pub const RELATORIO_FILTERS: FilterSchema =
    &["nome_vendedor", "data_inicio", "data_fim", "comissao_paga"];

/// Public endpoint, no bearer token
pub fn relatorio_request(query: FilterQuery) -> ApiRequest {
    ApiRequest::get(RELATORIO_PATH).with_query(query)
}
