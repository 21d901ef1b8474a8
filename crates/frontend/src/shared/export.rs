//! CSV export of table data and browser downloads

use contracts::domain::a002_venda::VendaDto;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::date_utils::format_optional_date_br;
use crate::shared::notifications::Notifier;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";
pub const NO_DATA_MESSAGE: &str = "Nenhum dado para exportar";
pub const EXPORT_SUCCESS_MESSAGE: &str = "Relatório exportado com sucesso!";

/// Trait for rows that can be exported to CSV
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// Unescaped cell values, same order as [`CsvExportable::headers`]
    fn to_csv_row(&self) -> Vec<String>;
}

impl CsvExportable for VendaDto {
    fn headers() -> Vec<&'static str> {
        vec![
            "Cliente",
            "CPF",
            "Data",
            "Valor Venda",
            "Vendedor",
            "Comissão",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.nome_cliente.clone(),
            self.cpf_cliente.clone(),
            format_optional_date_br(self.data_venda.as_deref()),
            self.valor_venda.to_string(),
            self.nome_vendedor.clone().unwrap_or_default(),
            self.valor_comissao.to_string(),
            self.status_comissao().to_string(),
        ]
    }
}

/// Saves a file on the user's machine
pub trait Download {
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<(), String>;
}

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("download failed: {0}")]
    Download(String),
}

/// Header line plus one line per row, `\n`-separated, no trailing newline.
/// `None` when there are no rows.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));
    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        lines.push(escaped_row.join(","));
    }
    Some(lines.join("\n"))
}

/// Quotes a cell if it contains the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

pub fn sales_export_filename(today_iso: &str) -> String {
    format!("relatorio_vendas_{}.csv", today_iso)
}

/// Exports report rows and tells the user how it went. Returns the filename.
pub fn export_sales_csv(
    vendas: Option<&[VendaDto]>,
    today_iso: &str,
    download: &dyn Download,
    notifier: &dyn Notifier,
) -> Result<String, ExportError> {
    let Some(csv) = vendas.and_then(build_csv) else {
        notifier.error(NO_DATA_MESSAGE);
        return Err(ExportError::Empty);
    };

    let filename = sales_export_filename(today_iso);
    // BOM so spreadsheet apps pick UTF-8 for the accented headers
    let content = format!("\u{FEFF}{}", csv);
    if let Err(e) = download.save(&filename, CSV_MIME_TYPE, content.as_bytes()) {
        log::error!("csv export failed: {}", e);
        notifier.error(&format!("Erro ao exportar relatório: {}", e));
        return Err(ExportError::Download(e));
    }

    log::info!("exported {} ({} bytes)", filename, content.len());
    notifier.success(EXPORT_SUCCESS_MESSAGE);
    Ok(filename)
}

/// Downloads through a temporary object URL and a hidden anchor
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

impl Download for BrowserDownload {
    fn save(&self, filename: &str, mime_type: &str, bytes: &[u8]) -> Result<(), String> {
        let blob = create_blob(bytes, mime_type)?;
        download_blob(&blob, filename)
    }
}

fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fetch::{interpret_response, ApiResponse};
    use crate::shared::notifications::NoticeLevel;
    use contracts::dashboards::d400_relatorio_vendas::RelatorioVendasResponse;
    use crate::shared::testing::{RecordingDownload, RecordingNotifier};

    fn venda(nome: &str, valor: f64, comissao: f64, paga: bool) -> VendaDto {
        VendaDto {
            id: 1,
            cpf_cliente: "123.456.789-00".to_string(),
            nome_cliente: nome.to_string(),
            data_venda: Some("2025-06-29".to_string()),
            valor_venda: valor,
            valor_comissao: comissao,
            comissao_paga: paga,
            id_vendedor_comissao: None,
            id_vendedor: Some(3),
            nome_vendedor: Some("Maria".to_string()),
            nome_tabela: None,
            porcentagem_comissao: Some(10.0),
            usuario_cadastro: None,
        }
    }

    #[test]
    fn test_build_csv_rows() {
        let csv = build_csv(&[
            venda("Ana", 1000.0, 100.0, true),
            venda("Bruno", 250.5, 25.05, false),
        ])
        .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Cliente,CPF,Data,Valor Venda,Vendedor,Comissão,Status");
        assert_eq!(lines[1], "Ana,123.456.789-00,29/06/2025,1000,Maria,100,Paga");
        assert_eq!(
            lines[2],
            "Bruno,123.456.789-00,29/06/2025,250.5,Maria,25.05,Pendente"
        );
    }

    #[test]
    fn test_report_response_to_csv() {
        let body = r#"{
            "resumo": {
                "total_vendas": 2,
                "total_valor_vendas": 1500.0,
                "comissoes_pagas": 100.0,
                "comissoes_pendentes": 50.0
            },
            "vendas": [
                {"id": 1, "cpf_cliente": "111.111.111-11", "nome_cliente": "Ana",
                 "data_venda": "2025-06-29", "valor_venda": 1000.0, "valor_comissao": 100.0,
                 "comissao_paga": true, "nome_vendedor": "Maria"},
                {"id": 2, "cpf_cliente": "222.222.222-22", "nome_cliente": "Bruno",
                 "data_venda": null, "valor_venda": 500.0, "valor_comissao": 50.0,
                 "comissao_paga": false, "nome_vendedor": null}
            ]
        }"#;
        let report: RelatorioVendasResponse = interpret_response(
            &ApiResponse {
                status: 200,
                body: body.to_string(),
            },
            false,
        )
        .unwrap();
        assert_eq!(report.resumo.total_vendas, 2);

        let csv = build_csv(&report.vendas).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Ana,111.111.111-11,29/06/2025,1000,Maria,100,Paga");
        assert_eq!(lines[2], "Bruno,222.222.222-22,,500,,50,Pendente");
    }

    #[test]
    fn test_cells_with_separator_are_quoted() {
        let csv = build_csv(&[venda("Silva, João \"Jota\"", 10.0, 1.0, false)]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Silva, João \"\"Jota\"\"\",123.456.789-00,"));
    }

    #[test]
    fn test_missing_vendedor_and_date_are_blank() {
        let mut v = venda("Ana", 1.0, 0.0, false);
        v.nome_vendedor = None;
        v.data_venda = None;
        assert_eq!(
            v.to_csv_row(),
            vec!["Ana", "123.456.789-00", "", "1", "", "0", "Pendente"]
        );
    }

    #[test]
    fn test_export_without_rows_notifies_and_skips_download() {
        let download = RecordingDownload::default();
        let notifier = RecordingNotifier::default();

        assert_eq!(
            export_sales_csv(Some(&[][..]), "2025-06-30", &download, &notifier),
            Err(ExportError::Empty)
        );
        assert_eq!(
            export_sales_csv(None, "2025-06-30", &download, &notifier),
            Err(ExportError::Empty)
        );
        assert!(download.files.borrow().is_empty());
        assert_eq!(
            notifier.errors(),
            vec![NO_DATA_MESSAGE.to_string(), NO_DATA_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_export_downloads_named_file() {
        let download = RecordingDownload::default();
        let notifier = RecordingNotifier::default();
        let vendas = vec![
            venda("Ana", 1000.0, 100.0, true),
            venda("Bruno", 500.0, 50.0, false),
        ];

        let filename =
            export_sales_csv(Some(vendas.as_slice()), "2025-06-30", &download, &notifier).unwrap();
        assert_eq!(filename, "relatorio_vendas_2025-06-30.csv");

        let files = download.files.borrow();
        assert_eq!(files.len(), 1);
        let (name, mime, bytes) = &files[0];
        assert_eq!(name, "relatorio_vendas_2025-06-30.csv");
        assert_eq!(mime, CSV_MIME_TYPE);
        let text = std::str::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_start_matches('\u{FEFF}').lines().count(), 3);
        assert_eq!(
            *notifier.notices.borrow(),
            vec![(NoticeLevel::Success, EXPORT_SUCCESS_MESSAGE.to_string())]
        );
    }

    #[test]
    fn test_export_reports_download_failure() {
        let download = RecordingDownload::failing();
        let notifier = RecordingNotifier::default();
        let vendas = vec![venda("Ana", 1.0, 0.1, true)];

        let result = export_sales_csv(Some(vendas.as_slice()), "2025-06-30", &download, &notifier);
        assert!(matches!(result, Err(ExportError::Download(_))));
        assert_eq!(notifier.errors().len(), 1);
    }
}
