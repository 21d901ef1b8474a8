//! Client-side state of a spreadsheet import
//!
//! ```text
//! Idle -> FileSelected -> Uploading -> CompletedSuccess
//!                                   -> CompletedWithErrors
//!                                   -> CompletedTotalFailure
//! ```
//! A new file may be selected from any state except `Uploading`; `reset`
//! goes back to `Idle`.

use contracts::usecases::u501_importacao_vendas::{ImportacaoVendasResponse, VendaImportada};
use thiserror::Error;

use crate::shared::fetch::FetchError;
use crate::shared::notifications::NoticeLevel;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];
/// Shown in the drop zone; the server enforces the real limit
pub const ADVERTISED_MAX_SIZE_MB: u32 = 10;

const GENERIC_FAILURE_MESSAGE: &str = "Erro na importação";
const TRANSPORT_FAILURE_NOTICE: &str = "Erro de conexão durante a importação";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportRejection {
    #[error("Por favor, selecione um arquivo Excel (.xlsx ou .xls)")]
    UnsupportedFile,
    #[error("Selecione um arquivo primeiro")]
    NoFileSelected,
    #[error("Aguarde a importação em andamento terminar")]
    UploadInProgress,
}

/// Metadata of the file the user picked
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }

    pub fn is_spreadsheet(&self) -> bool {
        is_accepted_spreadsheet(&self.name, &self.mime_type)
    }
}

/// Accepts by MIME type, or by extension when the browser reports none
pub fn is_accepted_spreadsheet(name: &str, mime_type: &str) -> bool {
    if ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return true;
    }
    let name = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportSummary {
    pub created_count: u32,
    pub error_count: u32,
    pub created_items: Vec<VendaImportada>,
    pub error_items: Vec<String>,
}

impl From<ImportacaoVendasResponse> for ImportSummary {
    fn from(response: ImportacaoVendasResponse) -> Self {
        let detalhes = response.detalhes.unwrap_or_default();
        Self {
            created_count: response.vendas_criadas,
            error_count: response.erros_encontrados,
            created_items: detalhes.vendas,
            error_items: detalhes.erros,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImportState {
    #[default]
    Idle,
    FileSelected(SelectedFile),
    Uploading(SelectedFile),
    CompletedSuccess {
        file: SelectedFile,
        summary: ImportSummary,
    },
    CompletedWithErrors {
        file: SelectedFile,
        summary: ImportSummary,
    },
    CompletedTotalFailure {
        file: SelectedFile,
        message: String,
    },
}

impl ImportState {
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), ImportRejection> {
        if self.is_uploading() {
            return Err(ImportRejection::UploadInProgress);
        }
        if !file.is_spreadsheet() {
            log::debug!("rejected '{}' ({})", file.name, file.mime_type);
            return Err(ImportRejection::UnsupportedFile);
        }
        *self = ImportState::FileSelected(file);
        Ok(())
    }

    /// Moves to `Uploading` and returns the file to send
    pub fn start_upload(&mut self) -> Result<SelectedFile, ImportRejection> {
        match self {
            ImportState::FileSelected(file) => {
                let file = file.clone();
                *self = ImportState::Uploading(file.clone());
                Ok(file)
            }
            ImportState::Uploading(_) => Err(ImportRejection::UploadInProgress),
            _ => Err(ImportRejection::NoFileSelected),
        }
    }

    /// Applies the server's answer. Returns the toast to show, or `None` when
    /// no upload was pending (the user reset meanwhile).
    pub fn finish_upload(
        &mut self,
        outcome: Result<ImportacaoVendasResponse, FetchError>,
    ) -> Option<(NoticeLevel, String)> {
        let ImportState::Uploading(file) = self else {
            log::debug!("upload finished with no upload pending, ignoring");
            return None;
        };
        let file = file.clone();

        let is_transport = matches!(outcome, Err(FetchError::Transport(_)));
        let failure = match outcome {
            Ok(response) => {
                let erro = response
                    .erro
                    .as_deref()
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(str::to_string);
                if erro.is_none() {
                    let summary = ImportSummary::from(response);
                    let notice = format!(
                        "Importação concluída! {} vendas criadas.",
                        summary.created_count
                    );
                    log::info!(
                        "import of '{}': {} created, {} errors",
                        file.name,
                        summary.created_count,
                        summary.error_count
                    );
                    *self = if summary.error_count > 0 {
                        ImportState::CompletedWithErrors { file, summary }
                    } else {
                        ImportState::CompletedSuccess { file, summary }
                    };
                    return Some((NoticeLevel::Success, notice));
                }
                erro.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
            }
            Err(e) => {
                log::warn!("import upload failed: {}", e);
                e.user_message(GENERIC_FAILURE_MESSAGE)
            }
        };
        let notice = if is_transport {
            TRANSPORT_FAILURE_NOTICE.to_string()
        } else {
            failure.clone()
        };

        *self = ImportState::CompletedTotalFailure {
            file,
            message: failure,
        };
        Some((NoticeLevel::Error, notice))
    }

    pub fn reset(&mut self) {
        *self = ImportState::Idle;
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, ImportState::Uploading(_))
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match self {
            ImportState::Idle => None,
            ImportState::FileSelected(file) | ImportState::Uploading(file) => Some(file),
            ImportState::CompletedSuccess { file, .. }
            | ImportState::CompletedWithErrors { file, .. }
            | ImportState::CompletedTotalFailure { file, .. } => Some(file),
        }
    }

    pub fn summary(&self) -> Option<&ImportSummary> {
        match self {
            ImportState::CompletedSuccess { summary, .. }
            | ImportState::CompletedWithErrors { summary, .. } => Some(summary),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ImportState::CompletedTotalFailure { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_importacao_vendas::ImportacaoDetalhes;

    fn xlsx() -> SelectedFile {
        SelectedFile {
            name: "vendas_junho.xlsx".to_string(),
            mime_type: ACCEPTED_MIME_TYPES[0].to_string(),
            size_bytes: 2 * 1024 * 1024,
        }
    }

    fn uploading() -> ImportState {
        let mut state = ImportState::default();
        state.select_file(xlsx()).unwrap();
        state.start_upload().unwrap();
        state
    }

    fn item(linha: u32) -> VendaImportada {
        VendaImportada {
            linha,
            cliente: format!("Cliente {}", linha),
            valor: 100.0,
            comissao: 10.0,
            vendedor: "Maria".to_string(),
            tabela: "Padrão".to_string(),
        }
    }

    #[test]
    fn test_pdf_is_rejected_and_state_kept() {
        let mut state = ImportState::default();
        let pdf = SelectedFile {
            name: "relatorio.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size_bytes: 100,
        };
        assert_eq!(state.select_file(pdf), Err(ImportRejection::UnsupportedFile));
        assert_eq!(state, ImportState::Idle);
        assert_eq!(
            ImportRejection::UnsupportedFile.to_string(),
            "Por favor, selecione um arquivo Excel (.xlsx ou .xls)"
        );
    }

    #[test]
    fn test_xlsx_is_accepted() {
        let mut state = ImportState::default();
        assert!(state.select_file(xlsx()).is_ok());
        assert_eq!(state, ImportState::FileSelected(xlsx()));
        assert_eq!(xlsx().size_label(), "2.00 MB");
    }

    #[test]
    fn test_extension_fallback_when_mime_is_missing() {
        assert!(is_accepted_spreadsheet("Planilha.XLS", ""));
        assert!(!is_accepted_spreadsheet("planilha.csv", "text/csv"));
    }

    #[test]
    fn test_upload_without_file() {
        let mut state = ImportState::default();
        assert_eq!(state.start_upload(), Err(ImportRejection::NoFileSelected));
        assert_eq!(
            ImportRejection::NoFileSelected.to_string(),
            "Selecione um arquivo primeiro"
        );
    }

    #[test]
    fn test_no_second_upload_or_selection_while_uploading() {
        let mut state = uploading();
        assert_eq!(state.start_upload(), Err(ImportRejection::UploadInProgress));
        assert_eq!(
            state.select_file(xlsx()),
            Err(ImportRejection::UploadInProgress)
        );
        assert!(state.is_uploading());
    }

    #[test]
    fn test_partial_success() {
        let mut state = uploading();
        let response = ImportacaoVendasResponse {
            mensagem: Some("Importação concluída".to_string()),
            vendas_criadas: 3,
            erros_encontrados: 2,
            detalhes: Some(ImportacaoDetalhes {
                vendas: vec![item(2), item(3), item(5)],
                erros: vec![
                    "Linha 4: CPF inválido".to_string(),
                    "Linha 6: vendedor não encontrado".to_string(),
                ],
            }),
            erro: None,
        };

        let notice = state.finish_upload(Ok(response));
        assert_eq!(
            notice,
            Some((
                NoticeLevel::Success,
                "Importação concluída! 3 vendas criadas.".to_string()
            ))
        );
        assert!(matches!(state, ImportState::CompletedWithErrors { .. }));
        let summary = state.summary().unwrap();
        assert_eq!(summary.created_items.len(), 3);
        assert_eq!(summary.error_items.len(), 2);
    }

    #[test]
    fn test_full_success() {
        let mut state = uploading();
        let response = ImportacaoVendasResponse {
            vendas_criadas: 1,
            detalhes: Some(ImportacaoDetalhes {
                vendas: vec![item(2)],
                erros: vec![],
            }),
            ..Default::default()
        };
        let _ = state.finish_upload(Ok(response));
        assert!(matches!(state, ImportState::CompletedSuccess { .. }));
    }

    #[test]
    fn test_top_level_erro_is_total_failure() {
        let mut state = uploading();
        let response = ImportacaoVendasResponse {
            erro: Some("formato invalido".to_string()),
            ..Default::default()
        };

        let notice = state.finish_upload(Ok(response));
        assert_eq!(
            notice,
            Some((NoticeLevel::Error, "formato invalido".to_string()))
        );
        assert_eq!(state.failure(), Some("formato invalido"));
        assert!(state.summary().is_none());
    }

    #[test]
    fn test_transport_failure() {
        let mut state = uploading();
        let notice = state.finish_upload(Err(FetchError::Transport("offline".into())));
        assert_eq!(
            notice,
            Some((
                NoticeLevel::Error,
                "Erro de conexão durante a importação".to_string()
            ))
        );
        assert_eq!(state.failure(), Some("Erro de conexão"));
    }

    #[test]
    fn test_http_error_uses_server_message() {
        let mut state = uploading();
        let _ = state.finish_upload(Err(FetchError::Api {
            status: 400,
            message: Some("Colunas obrigatórias ausentes".to_string()),
        }));
        assert_eq!(state.failure(), Some("Colunas obrigatórias ausentes"));
    }

    #[test]
    fn test_reset_and_late_response() {
        let mut state = uploading();
        state.reset();
        assert_eq!(state, ImportState::Idle);
        assert_eq!(
            state.finish_upload(Ok(ImportacaoVendasResponse::default())),
            None
        );
        assert_eq!(state, ImportState::Idle);
    }

    #[test]
    fn test_new_selection_after_completion() {
        let mut state = uploading();
        let _ = state.finish_upload(Ok(ImportacaoVendasResponse::default()));
        assert!(matches!(state, ImportState::CompletedSuccess { .. }));
        assert!(state.select_file(xlsx()).is_ok());
        assert!(matches!(state, ImportState::FileSelected(_)));
    }
}
