//! 자격 증명 검증 전략의 공통 계약
//!
//! 거부(Denied)와 하드 에러는 서로 다른 채널로 전파됩니다.
//! 거부는 사용자에게 보여줄 메시지와 함께 로그인 폼으로 돌려보내고,
//! 하드 에러(저장소/외부 서비스 장애)는 `Err(AppError)`로 장애 경계까지
//! 올라갑니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 알 수 없는 계정과 잘못된 비밀번호에 동일하게 사용하는 거부 메시지.
/// 계정 존재 여부가 드러나지 않도록 의도적으로 구분하지 않습니다.
pub const INVALID_CREDENTIALS: &str = "Invalid email/password";

/// 자격 증명 검증 결과
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// 인증 성공: 해석된 사용자
    Granted(User),
    /// 인증 거부: 사용자에게 보여줄 사유
    Denied(&'static str),
}

/// 전략 verify 연산의 반환 타입
pub type AuthResult = Result<AuthOutcome, AppError>;

/// 자격 증명 검증 전략
///
/// 전략마다 입력 타입이 다르므로 자격 증명은 연관 타입으로 표현합니다.
/// 구현체는 [`crate::services::auth::LocalStrategy`]와
/// [`crate::services::auth::FacebookStrategy`] 둘뿐입니다.
#[async_trait]
pub trait CredentialStrategy: Send + Sync {
    type Credentials: Send + 'static;

    /// 자격 증명을 검증하여 사용자 또는 거부 사유를 생성합니다.
    async fn verify(&self, credentials: Self::Credentials) -> AuthResult;
}
