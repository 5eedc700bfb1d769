//! # Service Layer Module
//!
//! 비즈니스 로직을 담당하는 모듈입니다.
//!
//! - [`auth`] - 자격 증명 검증 전략 (로컬, Facebook)
//! - [`users`] - 사용자 계정 생성

pub mod auth;
pub mod users;
