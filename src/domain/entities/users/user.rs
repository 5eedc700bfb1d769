//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/비밀번호)과 Facebook 인증을 모두 지원하는
//! 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 엔티티
///
/// 생성 경로에 따라 서로 다른 속성 집합이 채워집니다.
/// 로컬 가입은 `email` + `password_hash`, Facebook 첫 로그인은
/// `facebook_id` + `display_name`을 채우며, 두 경로 모두 동일한
/// ObjectId 식별자 공간을 공유합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (존재하는 경우 unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Facebook 사용자 고유 ID (로컬 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 표시 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/비밀번호)
    pub fn new_local(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: Some(email),
            password_hash: Some(password_hash),
            facebook_id: None,
            display_name: None,
            auth_provider: AuthProvider::Local,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Facebook 사용자 생성
    ///
    /// Facebook 프로필로 첫 로그인한 사용자를 생성합니다. 비밀번호가 없으며
    /// 프로바이더 ID로만 조회됩니다.
    pub fn new_facebook(facebook_id: String, display_name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: None,
            password_hash: None,
            facebook_id: Some(facebook_id),
            display_name: Some(display_name),
            auth_provider: AuthProvider::Facebook,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local) && self.password_hash.is_some()
    }

    /// 후보 비밀번호를 저장된 해시와 비교합니다.
    ///
    /// 비밀번호 해시가 없는 사용자(OAuth 계정)는 항상 `false`를 반환합니다.
    pub fn verify_password(&self, candidate: &str) -> AppResult<bool> {
        let Some(hash) = self.password_hash.as_deref() else {
            return Ok(false);
        };

        bcrypt::verify(candidate, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}
