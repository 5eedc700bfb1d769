//! # Authentication Configuration Module
//!
//! 세션 서명 비밀값과 Facebook OAuth 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 세션 설정
//! ```bash
//! export SESSION_SECRET="your-session-secret"
//! ```
//!
//! 미설정 시 개발용 기본값으로 동작하며 경고가 출력됩니다.
//! 운영 환경에서는 반드시 설정해야 합니다.
//!
//! ### Facebook OAuth 설정
//! ```bash
//! export FACEBOOK_CLIENT_ID="your-app-id"
//! export FACEBOOK_CLIENT_SECRET="your-app-secret"
//! export FACEBOOK_REDIRECT_URI="http://localhost:3000/auth/facebook/callback"
//! ```

use std::env;

use actix_web::cookie::Key;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use crate::errors::errors::AppError;

/// 세션 쿠키 서명 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 서명 비밀값을 반환합니다.
    ///
    /// `SESSION_SECRET` 환경 변수가 없으면 개발용 기본값으로 대체하고
    /// 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("SESSION_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ SESSION_SECRET 미설정 - 개발용 기본값 사용중 (운영 환경에서는 반드시 설정하세요)");
            "keyboard cat".to_string()
        })
    }

    /// 세션/플래시 쿠키 서명에 사용할 키를 생성합니다.
    ///
    /// 비밀값 길이와 무관하게 64바이트 키가 필요하므로
    /// SHA-512 다이제스트를 마스터 키로 사용합니다.
    pub fn signing_key() -> Key {
        let digest = Sha512::digest(Self::secret().as_bytes());
        Key::from(digest.as_slice())
    }
}

/// Facebook OAuth 2.0 설정
///
/// Graph API 엔드포인트는 기본값을 제공하며, 앱 자격 증명은
/// 환경 변수로만 제공됩니다.
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    /// Facebook 앱 ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `FACEBOOK_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("FACEBOOK_CLIENT_ID")
            .expect("FACEBOOK_CLIENT_ID 환경 변수가 설정되어야 합니다")
    }

    /// Facebook 앱 시크릿을 반환합니다.
    ///
    /// # Panics
    ///
    /// `FACEBOOK_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("FACEBOOK_CLIENT_SECRET")
            .expect("FACEBOOK_CLIENT_SECRET 환경 변수가 설정되어야 합니다")
    }

    /// 인증 완료 후 돌아올 콜백 URI를 반환합니다.
    pub fn redirect_uri() -> String {
        env::var("FACEBOOK_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/facebook/callback".to_string())
    }

    /// 사용자 동의 화면(로그인 다이얼로그) URI를 반환합니다.
    pub fn dialog_uri() -> String {
        env::var("FACEBOOK_DIALOG_URI")
            .unwrap_or_else(|_| "https://www.facebook.com/v12.0/dialog/oauth".to_string())
    }

    /// Authorization Code를 액세스 토큰으로 교환하는 엔드포인트 URI를 반환합니다.
    pub fn token_uri() -> String {
        env::var("FACEBOOK_TOKEN_URI")
            .unwrap_or_else(|_| "https://graph.facebook.com/v12.0/oauth/access_token".to_string())
    }

    /// 프로필 조회 엔드포인트 URI를 반환합니다.
    pub fn profile_uri() -> String {
        env::var("FACEBOOK_PROFILE_URI")
            .unwrap_or_else(|_| "https://graph.facebook.com/v12.0/me".to_string())
    }
}

/// 인증 프로바이더
///
/// 사용자가 어떤 경로로 생성/인증되었는지 나타내는 닫힌 집합입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 이메일/비밀번호 기반 로컬 인증
    Local,
    /// Facebook OAuth 인증
    Facebook,
}

impl AuthProvider {
    /// 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 문자열에서 프로바이더를 파싱합니다. (대소문자 무관)
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "facebook" => Ok(AuthProvider::Facebook),
            other => Err(AppError::ValidationError(format!(
                "지원하지 않는 인증 프로바이더: {}",
                other
            ))),
        }
    }
}
