//! 로컬 비밀번호 인증 전략
//!
//! 이메일로 사용자를 조회한 뒤 bcrypt 해시를 비교합니다.
//! 사용자가 없는 경우, 비밀번호 해시가 없는 계정(OAuth 전용)인 경우,
//! 해시가 일치하지 않는 경우 모두 동일한 메시지로 거부합니다.
//! 저장소 조회 실패는 거부와 구분되는 하드 에러로 전파됩니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dto::auth_request::LoginForm;
use crate::repositories::UserStore;
use crate::services::auth::strategy::{
    AuthOutcome, AuthResult, CredentialStrategy, INVALID_CREDENTIALS,
};
use crate::utils::string_utils::trim_string;

/// 로컬 전략의 자격 증명
#[derive(Debug, Clone)]
pub struct LocalCredentials {
    pub email: String,
    pub password: String,
}

impl From<LoginForm> for LocalCredentials {
    fn from(form: LoginForm) -> Self {
        Self {
            email: trim_string(&form.email),
            password: form.password,
        }
    }
}

/// 이메일/비밀번호 검증 전략
pub struct LocalStrategy {
    store: Arc<dyn UserStore>,
}

impl LocalStrategy {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialStrategy for LocalStrategy {
    type Credentials = LocalCredentials;

    async fn verify(&self, credentials: LocalCredentials) -> AuthResult {
        let Some(user) = self.store.find_by_email(&credentials.email).await? else {
            return Ok(AuthOutcome::Denied(INVALID_CREDENTIALS));
        };

        if !user.can_authenticate_with_password() {
            return Ok(AuthOutcome::Denied(INVALID_CREDENTIALS));
        }

        if user.verify_password(&credentials.password)? {
            Ok(AuthOutcome::Granted(user))
        } else {
            Ok(AuthOutcome::Denied(INVALID_CREDENTIALS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;
    use crate::repositories::memory::MemoryUserStore;

    async fn seeded_strategy() -> LocalStrategy {
        let store = Arc::new(MemoryUserStore::new());

        store
            .create(User::new_local(
                "alice@example.com".to_string(),
                bcrypt::hash("right-password", 4).unwrap(),
            ))
            .await
            .unwrap();
        store
            .create(User::new_facebook("fb-1".to_string(), "Bob".to_string()))
            .await
            .unwrap();

        LocalStrategy::new(store)
    }

    fn credentials(email: &str, password: &str) -> LocalCredentials {
        LocalCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_verify_grants_matching_credentials() {
        let strategy = seeded_strategy().await;

        let outcome = strategy
            .verify(credentials("alice@example.com", "right-password"))
            .await
            .unwrap();

        match outcome {
            AuthOutcome::Granted(user) => {
                assert_eq!(user.email.as_deref(), Some("alice@example.com"));
            }
            AuthOutcome::Denied(reason) => panic!("unexpected denial: {}", reason),
        }
    }

    #[actix_web::test]
    async fn test_verify_denies_wrong_password() {
        let strategy = seeded_strategy().await;

        let outcome = strategy
            .verify(credentials("alice@example.com", "wrong-password"))
            .await
            .unwrap();

        assert!(matches!(outcome, AuthOutcome::Denied(INVALID_CREDENTIALS)));
    }

    #[actix_web::test]
    async fn test_verify_denies_unknown_email_with_same_message() {
        let strategy = seeded_strategy().await;

        let outcome = strategy
            .verify(credentials("nobody@example.com", "whatever"))
            .await
            .unwrap();

        // 알 수 없는 계정과 잘못된 비밀번호의 메시지가 구분되지 않아야 한다
        assert!(matches!(outcome, AuthOutcome::Denied(INVALID_CREDENTIALS)));
    }

    #[actix_web::test]
    async fn test_verify_denies_password_login_for_oauth_account() {
        let store = Arc::new(MemoryUserStore::new());
        store
            .create(User::new_facebook("fb-2".to_string(), "Carol".to_string()))
            .await
            .unwrap();
        let strategy = LocalStrategy::new(store);

        // facebook 계정에는 이메일이 없으므로 이메일이 있는 변형도 함께 확인
        let outcome = strategy
            .verify(credentials("carol@example.com", "whatever"))
            .await
            .unwrap();

        assert!(matches!(outcome, AuthOutcome::Denied(INVALID_CREDENTIALS)));
    }

    #[actix_web::test]
    async fn test_credentials_from_form_trims_email() {
        let form = LoginForm {
            email: "  alice@example.com  ".to_string(),
            password: "pw".to_string(),
        };

        let credentials = LocalCredentials::from(form);
        assert_eq!(credentials.email, "alice@example.com");
        assert_eq!(credentials.password, "pw");
    }
}
