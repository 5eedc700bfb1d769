//! # Repository Layer Module
//!
//! 사용자 영속성의 포트와 구현체를 담당합니다.
//!
//! [`UserStore`]는 도메인이 필요로 하는 조회/저장 연산만 노출하는 포트이며,
//! 운영 환경에서는 MongoDB 구현체가, 테스트에서는 인메모리 구현체가
//! 주입됩니다. 핸들과 인덱스는 서버가 요청을 받기 전에 초기화됩니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::errors::AppResult;

pub mod users;

#[cfg(test)]
pub mod memory;

pub use users::user_repo::MongoUserRepository;

/// 사용자 영속성 포트
///
/// 단일 문서 단위의 원자적 연산만 가정하며, 문서 간 트랜잭션은
/// 요구하지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일 주소로 사용자를 조회합니다. (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID 문자열로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Facebook 프로바이더 ID로 사용자를 조회합니다.
    async fn find_by_facebook_id(&self, facebook_id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;
}
