//! 사용자 계정 서비스
//!
//! 가입 요청을 받아 비밀번호를 해시하고 새 로컬 계정을 생성합니다.
//! 비밀번호 평문은 어떤 경로로도 저장되지 않습니다.

use std::sync::Arc;

use crate::domain::dto::auth_request::RegisterForm;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::UserStore;
use crate::utils::string_utils::trim_string;

/// 계정 생성을 담당하는 서비스
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 새 로컬 사용자 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn register(&self, form: RegisterForm) -> AppResult<User> {
        let email = trim_string(&form.email);

        // 유니크 인덱스가 최종 방어선이지만, 일반적인 중복은 여기서 걸러
        // 사용자에게 보여줄 수 있는 충돌로 표면화한다
        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&form.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = self.store.create(User::new_local(email, password_hash)).await?;

        log::info!("새 사용자 가입: {}", user.email.as_deref().unwrap_or(""));

        Ok(user)
    }
}
