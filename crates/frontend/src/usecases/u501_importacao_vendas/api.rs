use contracts::usecases::u501_importacao_vendas::{
    ImportacaoVendasResponse, TemplateGeradoResponse, UPLOAD_FIELD,
};
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::FormData;

use crate::shared::api_utils::api_url;
use crate::shared::export::Download;
use crate::shared::fetch::{interpret_response, send, ApiRequest, ApiResponse, FetchError};

pub const IMPORT_PATH: &str = "/api/importacao/vendas";
pub const TEMPLATE_PATH: &str = "/api/importacao/template";
pub const TEMPLATE_DOWNLOAD_PATH: &str = "/api/importacao/template/download";
pub const TEMPLATE_FILENAME: &str = "template_vendas.xlsx";
pub const TEMPLATE_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const TEMPLATE_SUCCESS_MESSAGE: &str = "Template baixado com sucesso!";

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Erro ao gerar template")]
    Generate,
    #[error("Erro ao baixar template")]
    Fetch,
    #[error("{0}")]
    Save(String),
}

impl TemplateError {
    pub fn user_message(&self) -> String {
        format!("Erro ao baixar template: {}", self)
    }
}

/// Sends the spreadsheet as multipart form data
pub async fn upload_vendas(file: &web_sys::File) -> Result<ImportacaoVendasResponse, FetchError> {
    let form = FormData::new().map_err(|e| FetchError::Transport(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| FetchError::Transport(format!("{:?}", e)))?;

    let url = api_url(IMPORT_PATH);
    log::debug!("POST {} ({} bytes)", url, file.size());
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    interpret_response(&ApiResponse { status, body }, false)
}

/// Generation step: any 2xx counts, the body is informational
fn check_generated(response: &ApiResponse) -> Result<(), TemplateError> {
    if !response.is_success() {
        log::warn!("template generation failed: HTTP {}", response.status);
        return Err(TemplateError::Generate);
    }
    if let Some(mensagem) = serde_json::from_str::<TemplateGeradoResponse>(&response.body)
        .ok()
        .and_then(|generated| generated.mensagem)
    {
        log::debug!("template generated: {}", mensagem);
    }
    Ok(())
}

/// Asks the server to generate the template, then downloads the file
pub async fn download_template(download: &dyn Download) -> Result<(), TemplateError> {
    let generated = send(&ApiRequest::get(TEMPLATE_PATH)).await.map_err(|e| {
        log::warn!("template generation failed: {}", e);
        TemplateError::Generate
    })?;
    check_generated(&generated)?;

    let url = api_url(TEMPLATE_DOWNLOAD_PATH);
    let response = Request::get(&url).send().await.map_err(|e| {
        log::warn!("template download failed: {}", e);
        TemplateError::Fetch
    })?;
    if !response.ok() {
        log::warn!("template download failed: HTTP {}", response.status());
        return Err(TemplateError::Fetch);
    }
    let bytes = response.binary().await.map_err(|e| {
        log::warn!("template download failed: {}", e);
        TemplateError::Fetch
    })?;

    download
        .save(TEMPLATE_FILENAME, TEMPLATE_MIME_TYPE, &bytes)
        .map_err(TemplateError::Save)
}
