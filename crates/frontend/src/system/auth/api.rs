use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::fetch::{fetch_json, ApiRequest, FetchError};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Email e senha são obrigatórios";

/// Trims the email and refuses empty fields before any request is made
pub fn validate_credentials(email: &str, senha: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || senha.is_empty() {
        return Err(CREDENTIALS_REQUIRED_MESSAGE);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        senha: senha.to_string(),
    })
}

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, FetchError> {
    fetch_json(&ApiRequest::post_json(LOGIN_PATH, request)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_rejected() {
        assert_eq!(
            validate_credentials("", "x").err(),
            Some(CREDENTIALS_REQUIRED_MESSAGE)
        );
        assert_eq!(
            validate_credentials("   ", "x").err(),
            Some(CREDENTIALS_REQUIRED_MESSAGE)
        );
        assert_eq!(
            validate_credentials("ana@loja.com", "").err(),
            Some(CREDENTIALS_REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn test_email_is_trimmed() {
        let request = validate_credentials(" ana@loja.com ", "s3nha").unwrap();
        assert_eq!(request.email, "ana@loja.com");
        assert_eq!(request.senha, "s3nha");
    }

    #[test]
    fn test_login_body_shape() {
        let request = validate_credentials("ana@loja.com", "s3nha").unwrap();
        let api_request = ApiRequest::post_json(LOGIN_PATH, &request).unwrap();
        assert!(!api_request.is_authenticated());
        let body: serde_json::Value =
            serde_json::from_str(api_request.json_body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "ana@loja.com", "senha": "s3nha"})
        );
    }
}
