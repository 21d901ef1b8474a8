use serde::{Deserialize, Serialize};

/// One sale created from a spreadsheet row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendaImportada {
    /// Spreadsheet row number (header is row 1)
    pub linha: u32,
    pub cliente: String,
    pub valor: f64,
    #[serde(default)]
    pub comissao: f64,
    pub vendedor: String,
    pub tabela: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportacaoDetalhes {
    #[serde(default)]
    pub vendas: Vec<VendaImportada>,
    /// One human-readable message per rejected row
    #[serde(default)]
    pub erros: Vec<String>,
}

/// Response of `POST /api/importacao/vendas`
///
/// Either the per-row breakdown or a top-level `erro` when the whole upload
/// was refused (missing columns, wrong format, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportacaoVendasResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub vendas_criadas: u32,
    #[serde(default)]
    pub erros_encontrados: u32,
    #[serde(default)]
    pub detalhes: Option<ImportacaoDetalhes>,
    #[serde(default)]
    pub erro: Option<String>,
}

/// Response of `GET /api/importacao/template` (server-side generation step)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateGeradoResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}
