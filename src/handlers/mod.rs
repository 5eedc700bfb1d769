//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML form POST / redirect follow)
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 상태 판정과 리다이렉트
//! ├─────────────────────────────────────────────┤
//!   Strategies / Services - 자격 증명 검증, 가입
//! ├─────────────────────────────────────────────┤
//!   UserStore - 영속성 포트 (MongoDB)
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 요청 상태는 세션 매퍼가 사용자를 해석하는지에 따라
//! 익명(Anonymous) / 인증됨(Authenticated)으로 갈립니다.

use actix_session::Session;
use actix_web::cookie::Key;
use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, IncomingFlashMessages};
use handlebars::Handlebars;
use serde_json::json;

use crate::errors::errors::AppError;
use crate::repositories::UserStore;
use crate::{session, views};

pub mod auth;

/// 플래시 메시지 미들웨어를 생성합니다.
///
/// 메시지는 세션 쿠키와 같은 키로 서명된 별도 쿠키에 담겨
/// 다음 렌더링에서 한 번만 소비됩니다.
pub fn flash_framework(key: Key) -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(key).build();
    FlashMessagesFramework::builder(store).build()
}

/// 지정한 위치로 보내는 302 리다이렉트 응답을 생성합니다.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, location.to_string()))
        .finish()
}

/// 플래시 메시지 본문들을 템플릿에 넘길 형태로 수집합니다.
pub(crate) fn flash_contents(messages: &IncomingFlashMessages) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.content().to_string())
        .collect()
}

/// 홈 페이지
///
/// 세션이 사용자로 해석되면 홈을 렌더링하고, 익명이면 로그인 폼으로
/// 보냅니다.
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn index(
    registry: web::Data<Handlebars<'static>>,
    session: Session,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    match session::current_user(&session, store.get_ref()).await? {
        Some(user) => views::render(
            &registry,
            "home",
            &json!({
                "currentUser": user.id_string(),
                "email": user.email,
                "displayName": user.display_name,
            }),
        ),
        None => Ok(redirect("/login")),
    }
}

/// 로그인 폼
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login_form(
    registry: web::Data<Handlebars<'static>>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse, AppError> {
    views::render(
        &registry,
        "login",
        &json!({ "messages": flash_contents(&messages) }),
    )
}

/// 가입 폼
///
/// # Endpoint
/// `GET /register`
#[get("/register")]
pub async fn register_form(
    registry: web::Data<Handlebars<'static>>,
    messages: IncomingFlashMessages,
) -> Result<HttpResponse, AppError> {
    views::render(
        &registry,
        "register",
        &json!({ "messages": flash_contents(&messages) }),
    )
}
