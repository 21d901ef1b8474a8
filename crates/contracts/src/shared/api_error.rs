use serde::{Deserialize, Serialize};

/// Error envelope used by every endpoint on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub erro: Option<String>,
    #[serde(default)]
    pub mensagem: Option<String>,
}

impl ApiErrorBody {
    /// Server-supplied message, preferring `erro`; blank strings count as absent
    pub fn message(&self) -> Option<&str> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().map(str::trim).filter(|m| !m.is_empty())
        }
        present(&self.erro).or_else(|| present(&self.mensagem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefers_erro() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"erro": "Token inválido", "mensagem": "x"}"#).unwrap();
        assert_eq!(body.message(), Some("Token inválido"));
    }

    #[test]
    fn test_message_blank_is_absent() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"erro": "  "}"#).unwrap();
        assert_eq!(body.message(), None);
        assert_eq!(ApiErrorBody::default().message(), None);
    }

    #[test]
    fn test_blank_erro_falls_back_to_mensagem() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"erro": "", "mensagem": " Arquivo vazio "}"#).unwrap();
        assert_eq!(body.message(), Some("Arquivo vazio"));
    }
}
