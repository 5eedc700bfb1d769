//! 인증 요청 폼/쿼리 객체
//!
//! 로그인·가입 폼과 OAuth 콜백 쿼리의 역직렬화 대상입니다.
//! 가입 폼만 `validator` 검증을 거치며, 로그인 폼은 검증 없이
//! 전략에 그대로 전달됩니다 (존재하지 않는 계정과 동일하게 거부되므로).

use serde::Deserialize;
use validator::Validate;

/// 로그인 폼 (`POST /login`)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// 가입 폼 (`POST /register`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Facebook OAuth 콜백 쿼리 (`GET /auth/facebook/callback`)
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`/`error_description`이
/// 전달됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_accepts_valid_input() {
        let form = RegisterForm {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_form_rejects_invalid_email() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            password: "pw1".to_string(),
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_rejects_empty_password() {
        let form = RegisterForm {
            email: "a@x.com".to_string(),
            password: String::new(),
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn test_callback_query_parses_denied_consent() {
        let query: FacebookCallbackQuery = serde_json::from_str(
            r#"{"error": "access_denied", "error_description": "Permissions error"}"#,
        )
        .unwrap();

        assert!(query.code.is_none());
        assert_eq!(query.error.as_deref(), Some("access_denied"));
    }
}
