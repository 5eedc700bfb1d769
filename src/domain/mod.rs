//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 핵심 비즈니스 객체 (User)
//! ├── dto       - 폼/쿼리 요청 객체
//! └── models    - 외부 시스템 통합 모델 (Facebook Graph API)
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::auth_request::{FacebookCallbackQuery, LoginForm, RegisterForm};
pub use entities::users::user::User;
pub use models::oauth::facebook::{FacebookProfile, FacebookTokenResponse};
