use thiserror::Error;

use crate::system::auth::session::SESSION_EXPIRED_MESSAGE;

pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// 401 on a call made with a bearer token
    #[error("unauthorized")]
    Unauthorized,
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        message: Option<String>,
    },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown to the user; `fallback` is the view's generic failure
    /// message, used when the server gave nothing better.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FetchError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            FetchError::Api {
                message: Some(m), ..
            } => m.clone(),
            FetchError::Api { message: None, .. } | FetchError::Decode(_) => fallback.to_string(),
            FetchError::Transport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let fallback = "Erro ao carregar relatório";
        let api = FetchError::Api {
            status: 400,
            message: Some("Data inválida".to_string()),
        };
        assert_eq!(api.user_message(fallback), "Data inválida");
        assert_eq!(
            FetchError::Api {
                status: 500,
                message: None
            }
            .user_message(fallback),
            fallback
        );
        assert_eq!(
            FetchError::Transport("offline".into()).user_message(fallback),
            CONNECTION_ERROR_MESSAGE
        );
        assert_eq!(
            FetchError::Unauthorized.user_message(fallback),
            SESSION_EXPIRED_MESSAGE
        );
    }
}
