pub mod response;

pub use response::{
    ImportacaoDetalhes, ImportacaoVendasResponse, TemplateGeradoResponse, VendaImportada,
};

use crate::usecases::common::UseCaseMetadata;

/// Multipart form field carrying the spreadsheet
pub const UPLOAD_FIELD: &str = "arquivo";

pub struct ImportacaoVendas;

impl UseCaseMetadata for ImportacaoVendas {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "importacao_vendas"
    }

    fn display_name() -> &'static str {
        "Importação de Vendas"
    }

    fn description() -> &'static str {
        "Importe vendas em lote através de planilha Excel"
    }
}
