//! Facebook Graph API 통합 모델
//!
//! OAuth 토큰 교환과 프로필 조회 응답의 역직렬화 대상입니다.
//!
//! ## 토큰 응답 구조
//!
//! ```json
//! {
//!   "access_token": "EAACEdEose0cBA...",
//!   "token_type": "bearer",
//!   "expires_in": 5183944
//! }
//! ```
//!
//! ## 프로필 응답 구조 (`/me?fields=id,name,email`)
//!
//! ```json
//! {
//!   "id": "10150000000000000",
//!   "name": "Alice Kim",
//!   "email": "alice@example.com"
//! }
//! ```
//!
//! `email`은 email 권한이 없으면 응답에서 빠지므로 옵션으로 다룹니다.

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// Authorization Code 교환 결과로 받는 액세스 토큰 응답
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

/// Graph API 프로필 응답
///
/// `id`는 Facebook 전체에서 고유하며 변경되지 않으므로
/// 사용자 레코드의 프로바이더 식별자로 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookProfile {
    /// Facebook 사용자 고유 식별자
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 이메일 주소 (email 권한이 있는 경우에만 제공됨)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "EAACEdEose0cBA",
            "token_type": "bearer",
            "expires_in": 5183944
        }"#;

        let token: FacebookTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "EAACEdEose0cBA");
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert_eq!(token.expires_in, Some(5183944));
    }

    #[test]
    fn test_profile_deserialization_with_email() {
        let json = r#"{"id": "10150000000000000", "name": "Alice Kim", "email": "alice@example.com"}"#;

        let profile: FacebookProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "10150000000000000");
        assert_eq!(profile.name, "Alice Kim");
        assert_eq!(profile.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_profile_deserialization_without_email() {
        let json = r#"{"id": "10150000000000000", "name": "Alice Kim"}"#;

        let profile: FacebookProfile = serde_json::from_str(json).unwrap();
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_profile_blank_email_normalized_to_none() {
        let json = r#"{"id": "10150000000000000", "name": "Alice Kim", "email": "  "}"#;

        let profile: FacebookProfile = serde_json::from_str(json).unwrap();
        assert!(profile.email.is_none());
    }
}
