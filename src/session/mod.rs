//! 세션 식별자 매퍼
//!
//! 인증에 성공한 사용자를 세션에 기록하고, 이후 요청에서 세션의
//! 주체(principal)를 다시 사용자 레코드로 복원하는 모듈입니다.
//!
//! 세션은 암묵적인 요청 상태가 아니라 각 핸들러에 명시적으로 전달되는
//! [`Session`] 값이며, 이 모듈은 그 위의 get/set/clear 연산만 제공합니다.
//!
//! ## 직렬화 규칙
//!
//! 세션에는 사용자 전체가 아니라 ID 16진수 문자열 하나만 저장합니다.
//! 복원 시 저장소 조회가 실패하면 하드 에러로 전파하고, 사용자가
//! 더 이상 존재하지 않으면 익명으로 처리합니다.

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;

use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::UserStore;

/// 세션에 저장되는 인증 주체 키
const PRINCIPAL_KEY: &str = "user_id";

/// OAuth 왕복 사이에만 존재하는 state 키
const OAUTH_STATE_KEY: &str = "oauth_state";

/// 세션 미들웨어를 생성합니다.
///
/// 쿠키 기반 스토어를 사용하므로 세션 상태는 프로세스 밖으로 나가지 않으며,
/// 만료는 쿠키 수명으로 관리됩니다. 개발 환경의 일반 HTTP에서도 동작하도록
/// Secure 속성은 끕니다.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("scrapbook_session".to_string())
        .cookie_secure(false)
        .build()
}

/// 인증된 사용자를 세션의 주체로 기록합니다.
pub fn remember(session: &Session, user: &User) -> AppResult<()> {
    let id = user.id_string().ok_or_else(|| {
        AppError::InternalError("저장되지 않은 사용자는 세션에 기록할 수 없습니다".to_string())
    })?;

    session.renew();
    session
        .insert(PRINCIPAL_KEY, id)
        .map_err(|e| AppError::InternalError(format!("세션 저장 실패: {}", e)))
}

/// 세션에 기록된 주체 ID를 반환합니다. (없으면 익명)
pub fn principal(session: &Session) -> AppResult<Option<String>> {
    session
        .get::<String>(PRINCIPAL_KEY)
        .map_err(|e| AppError::InternalError(format!("세션 조회 실패: {}", e)))
}

/// 세션의 주체를 사용자 레코드로 복원합니다.
///
/// 주체가 없거나 해당 사용자가 더 이상 존재하지 않으면 `Ok(None)`,
/// 저장소 조회가 실패하면 `Err`를 반환합니다.
pub async fn current_user(session: &Session, store: &dyn UserStore) -> AppResult<Option<User>> {
    match principal(session)? {
        Some(id) => store.find_by_id(&id).await,
        None => Ok(None),
    }
}

/// 세션을 파기합니다. (로그아웃)
pub fn forget(session: &Session) {
    session.purge();
}

/// OAuth 시작 시 생성한 state 값을 세션에 보관합니다.
pub fn put_oauth_state(session: &Session, state: &str) -> AppResult<()> {
    session
        .insert(OAUTH_STATE_KEY, state)
        .map_err(|e| AppError::InternalError(format!("세션 저장 실패: {}", e)))
}

/// 콜백 검증을 위해 보관된 state 값을 꺼내고 세션에서 제거합니다.
pub fn take_oauth_state(session: &Session) -> Option<String> {
    session
        .remove_as::<String>(OAUTH_STATE_KEY)
        .and_then(|value| value.ok())
}
