//! 테스트용 인메모리 사용자 스토어
//!
//! MongoDB 없이 전략과 라우트를 검증할 수 있도록 [`UserStore`] 포트를
//! 프로세스 내 벡터로 구현합니다. `email_unique` 인덱스와 동일하게
//! 이메일 중복을 거부합니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.users.read().expect("user store lock poisoned").len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users
            .iter()
            .find(|user| user.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users
            .iter()
            .find(|user| user.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_facebook_id(&self, facebook_id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users
            .iter()
            .find(|user| user.facebook_id.as_deref() == Some(facebook_id))
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().expect("user store lock poisoned");

        if let Some(email) = user.email.as_deref() {
            if users.iter().any(|u| u.email.as_deref() == Some(email)) {
                return Err(AppError::ConflictError(format!(
                    "duplicate email: {}",
                    email
                )));
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_assigns_id_and_enforces_unique_email() {
        let store = MemoryUserStore::new();

        let created = store
            .create(User::new_local("a@x.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        assert!(created.id.is_some());
        assert_eq!(store.len(), 1);

        let duplicate = store
            .create(User::new_local("a@x.com".to_string(), "hash2".to_string()))
            .await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_lookups_by_email_id_and_facebook_id() {
        let store = MemoryUserStore::new();

        let local = store
            .create(User::new_local("a@x.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let oauth = store
            .create(User::new_facebook("fb-1".to_string(), "Alice".to_string()))
            .await
            .unwrap();

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, local.id);

        let by_id = store
            .find_by_id(&oauth.id_string().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.id, oauth.id);

        let by_facebook = store.find_by_facebook_id("fb-1").await.unwrap().unwrap();
        assert_eq!(by_facebook.id, oauth.id);

        assert!(store.find_by_email("missing@x.com").await.unwrap().is_none());
    }
}
