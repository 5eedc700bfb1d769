//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 MongoDB 리포지토리입니다.
//! [`crate::repositories::UserStore`] 포트를 구현하며, `main`에서
//! 명시적으로 생성되어 핸들러에 주입됩니다.

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::UserStore;

/// MongoDB `users` 컬렉션 기반 사용자 리포지토리
///
/// ## 인덱스
///
/// - `email` (unique, sparse) - 중복 가입 방지, 이메일 조회 최적화
/// - `facebook_id` (unique, sparse) - 프로바이더 ID당 사용자 1명 보장
///
/// 이메일이 없는 OAuth 사용자 문서와 충돌하지 않도록 두 인덱스 모두
/// sparse로 생성합니다.
pub struct MongoUserRepository {
    collection: mongodb::Collection<User>,
}

impl MongoUserRepository {
    /// 초기화된 데이터베이스 핸들에서 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>("users"),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 서버가 요청을 받기 전, 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let facebook_id_index = IndexModel::builder()
            .keys(doc! { "facebook_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("facebook_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, facebook_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_facebook_id(&self, facebook_id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "facebook_id": facebook_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }
}
