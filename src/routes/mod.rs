//! 라우트 설정 모듈
//!
//! 페이지, 인증, 헬스체크 엔드포인트를 기능별로 그룹화하여 등록합니다.
//!
//! # Route Map
//!
//! | Method | Path | 효과 |
//! |--------|------|------|
//! | GET | `/` | 인증됨: 홈 렌더링 / 익명: `/login` 리다이렉트 |
//! | GET | `/login`, `/register` | 폼 렌더링 |
//! | POST | `/login` | 로컬 전략 실행 후 `/` 또는 `/login` |
//! | POST | `/register` | 계정 생성 후 `/login` |
//! | GET | `/logout` | 세션 파기 후 `/login` |
//! | GET | `/auth/facebook` | 동의 화면으로 리다이렉트 |
//! | GET | `/auth/facebook/callback` | 토큰 교환 후 `/` 또는 `/login` |
//! | GET | `/health` | 서비스 상태 JSON |

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
}

/// 페이지 렌더링 라우트를 설정합니다
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::index)
        .service(handlers::login_form)
        .service(handlers::register_form);
}

/// 인증 관련 라우트를 설정합니다
///
/// 폼 제출과 로그아웃은 최상위 경로에, Facebook OAuth 왕복은
/// `/auth` 스코프 아래에 등록됩니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::local_login)
        .service(handlers::auth::register)
        .service(handlers::auth::logout);

    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::facebook_login)
            .service(handlers::auth::facebook_callback),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "scrapbook_web",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "signed cookie",
            "templates": "Handlebars"
        }
    }))
}
