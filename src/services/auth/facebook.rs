//! # Facebook OAuth 인증 전략
//!
//! OAuth 2.0 Authorization Code 플로우를 통한 Facebook 로그인을 제공합니다.
//!
//! ```text
//! 브라우저                     이 서버                      Facebook
//!    │  GET /auth/facebook       │                             │
//!    ├──────────────────────────►│ state 생성 + 세션 보관        │
//!    │  302 → 동의 화면           │                             │
//!    │◄──────────────────────────┤                             │
//!    │  사용자 동의                                              │
//!    ├─────────────────────────────────────────────────────────►│
//!    │  302 → /auth/facebook/callback?code=..&state=..          │
//!    │◄─────────────────────────────────────────────────────────┤
//!    │  GET callback             │                             │
//!    ├──────────────────────────►│ state 검증                   │
//!    │                           │ code → access_token 교환     │
//!    │                           ├────────────────────────────►│
//!    │                           │ 프로필 조회 (/me)             │
//!    │                           ├────────────────────────────►│
//!    │                           │ 프로바이더 ID로 조회/생성       │
//!    │  302 → /                  │                             │
//!    │◄──────────────────────────┤                             │
//! ```
//!
//! ## 계정 정책
//!
//! 프로바이더 ID당 사용자 레코드는 최대 1개이며, 처음 보는 ID는
//! 첫 로그인 시점에 지연 생성됩니다. 기존 로컬 계정과의 연동 단계는
//! 없습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::FacebookOAuthConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::facebook::{FacebookProfile, FacebookTokenResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::UserStore;
use crate::services::auth::strategy::{AuthOutcome, AuthResult, CredentialStrategy};

/// Facebook OAuth 검증 전략
///
/// 토큰 교환과 프로필 조회는 Graph API 왕복이며, verify 연산은
/// 교환이 끝난 프로필만 입력으로 받습니다.
pub struct FacebookStrategy {
    store: Arc<dyn UserStore>,
    http: reqwest::Client,
}

impl FacebookStrategy {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
        }
    }

    /// 사용자를 동의 화면으로 보낼 Authorization URL을 생성합니다.
    pub fn authorize_url(&self, state: &str) -> String {
        build_authorize_url(
            &FacebookOAuthConfig::dialog_uri(),
            &FacebookOAuthConfig::client_id(),
            &FacebookOAuthConfig::redirect_uri(),
            state,
        )
    }

    /// Authorization Code를 액세스 토큰으로 교환합니다.
    ///
    /// 전송 실패와 비정상 상태 코드는 모두 거부가 아닌 하드 에러로
    /// 전파됩니다.
    pub async fn exchange_code(&self, code: &str) -> AppResult<FacebookTokenResponse> {
        let params = [
            ("client_id", FacebookOAuthConfig::client_id()),
            ("client_secret", FacebookOAuthConfig::client_secret()),
            ("redirect_uri", FacebookOAuthConfig::redirect_uri()),
            ("code", code.to_string()),
        ];

        let response = self
            .http
            .get(FacebookOAuthConfig::token_uri())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Facebook 토큰 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Facebook 토큰 교환 실패: {}",
                error_text
            )));
        }

        response.json::<FacebookTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Facebook 토큰 응답 파싱 실패: {}", e))
        })
    }

    /// 액세스 토큰으로 Graph API 프로필을 조회합니다.
    pub async fn fetch_profile(&self, access_token: &str) -> AppResult<FacebookProfile> {
        let response = self
            .http
            .get(FacebookOAuthConfig::profile_uri())
            .query(&[("fields", "id,name,email"), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Facebook 프로필 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Facebook 프로필 조회 실패: {}",
                error_text
            )));
        }

        response.json::<FacebookProfile>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Facebook 프로필 파싱 실패: {}", e))
        })
    }
}

#[async_trait]
impl CredentialStrategy for FacebookStrategy {
    type Credentials = FacebookProfile;

    /// 프로바이더 ID로 사용자를 해석합니다.
    ///
    /// 기존 사용자는 속성 변경 없이 그대로 반환하고, 처음 보는 ID는
    /// 새 사용자 레코드를 생성합니다. 저장소 실패는 하드 에러입니다.
    async fn verify(&self, profile: FacebookProfile) -> AuthResult {
        match self.store.find_by_facebook_id(&profile.id).await? {
            Some(user) => {
                log::info!("Facebook 사용자 로그인: {}", profile.id);
                Ok(AuthOutcome::Granted(user))
            }
            None => {
                log::info!("새 Facebook 사용자 등록: {}", profile.id);
                let created = self
                    .store
                    .create(User::new_facebook(profile.id, profile.name))
                    .await?;
                Ok(AuthOutcome::Granted(created))
            }
        }
    }
}

/// Authorization URL을 구성합니다.
fn build_authorize_url(dialog_uri: &str, client_id: &str, redirect_uri: &str, state: &str) -> String {
    let params = [
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("state", state),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", dialog_uri, query_string)
}
