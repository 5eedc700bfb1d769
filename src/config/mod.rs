//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버 관련 설정
//! - [`auth_config`] - 세션, OAuth 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="3000"            # 생략 시 첫 번째 CLI 인자, 그것도 없으면 3000
//!
//! # 세션 설정
//! export SESSION_SECRET="your-session-secret"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="scrapbook_dev"
//!
//! # Facebook OAuth
//! export FACEBOOK_CLIENT_ID="your-app-id"
//! export FACEBOOK_CLIENT_SECRET="your-app-secret"
//! export FACEBOOK_REDIRECT_URI="http://localhost:3000/auth/facebook/callback"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
