use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::FetchError;
use crate::shared::api_utils::api_url;
use crate::shared::filters::FilterQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Everything needed to issue one API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: FilterQuery,
    pub json_body: Option<String>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: FilterQuery::default(),
            json_body: None,
            bearer: None,
        }
    }

    pub fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Self, FetchError> {
        let json = serde_json::to_string(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(Self {
            method: HttpMethod::Post,
            json_body: Some(json),
            ..Self::get(path)
        })
    }

    pub fn with_query(mut self, query: FilterQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    /// Path plus query string, relative to the API base
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }

    pub fn url(&self) -> String {
        api_url(&self.path_and_query())
    }
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turns a raw response into a typed payload or a [`FetchError`].
///
/// A 401 only means "session expired" when the call carried a token; the
/// login endpoint answers 401 for bad credentials and that is an ordinary
/// API error.
pub fn interpret_response<T: DeserializeOwned>(
    response: &ApiResponse,
    authenticated: bool,
) -> Result<T, FetchError> {
    if response.is_success() {
        return serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()));
    }
    if response.status == 401 && authenticated {
        return Err(FetchError::Unauthorized);
    }
    let message = serde_json::from_str::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string));
    Err(FetchError::Api {
        status: response.status,
        message,
    })
}

pub async fn send(request: &ApiRequest) -> Result<ApiResponse, FetchError> {
    let url = request.url();
    log::debug!("{:?} {}", request.method, url);

    let mut builder = match request.method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
    };
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = match &request.json_body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body.clone())
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    if !(200..300).contains(&status) {
        log::warn!("{:?} {} -> {}", request.method, url, status);
    }
    Ok(ApiResponse { status, body })
}

pub async fn fetch_json<T: DeserializeOwned>(request: &ApiRequest) -> Result<T, FetchError> {
    let response = send(request).await?;
    interpret_response(&response, request.is_authenticated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::FilterSet;
    use contracts::dashboards::d400_relatorio_vendas::RelatorioVendasResponse;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_path_and_query() {
        let mut filters = FilterSet::new(&["data_inicio", "data_fim"]);
        let _ = filters.set_field("data_inicio", "2025-06-01");
        let request = ApiRequest::get("/api/relatorio/vendas").with_query(filters.apply());
        assert_eq!(
            request.path_and_query(),
            "/api/relatorio/vendas?data_inicio=2025-06-01"
        );
        assert_eq!(
            ApiRequest::get("/api/vendas").path_and_query(),
            "/api/vendas"
        );
    }

    #[test]
    fn test_success_is_decoded() {
        let body = r#"{"resumo": {"total_vendas": 1, "total_valor_vendas": 100.0,
            "comissoes_pagas": 0.0, "comissoes_pendentes": 10.0},
            "vendas": []}"#;
        let parsed: RelatorioVendasResponse =
            interpret_response(&response(200, body), false).unwrap();
        assert_eq!(parsed.resumo.total_vendas, 1);
    }

    #[test]
    fn test_unparseable_success_is_decode_error() {
        let result: Result<RelatorioVendasResponse, _> =
            interpret_response(&response(200, "<html>"), false);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_401_with_token_is_unauthorized() {
        let result: Result<serde_json::Value, _> =
            interpret_response(&response(401, r#"{"erro": "Token expirado"}"#), true);
        assert_eq!(result, Err(FetchError::Unauthorized));
    }

    #[test]
    fn test_401_without_token_is_api_error() {
        let result: Result<serde_json::Value, _> =
            interpret_response(&response(401, r#"{"erro": "Credenciais inválidas"}"#), false);
        assert_eq!(
            result,
            Err(FetchError::Api {
                status: 401,
                message: Some("Credenciais inválidas".to_string())
            })
        );
    }

    #[test]
    fn test_error_without_body_message() {
        let result: Result<serde_json::Value, _> =
            interpret_response(&response(500, "Internal Server Error"), true);
        assert_eq!(
            result,
            Err(FetchError::Api {
                status: 500,
                message: None
            })
        );
    }

    #[test]
    fn test_bearer_marks_request_authenticated() {
        let request = ApiRequest::get("/api/auth/dashboard").with_bearer("tok");
        assert!(request.is_authenticated());
        assert!(!ApiRequest::get("/api/vendas").is_authenticated());
    }
}
