//! 서버 사이드 템플릿 렌더링
//!
//! Handlebars 레지스트리는 서버 시작 시 한 번 구성되어
//! `web::Data`로 모든 핸들러와 장애 경계에 공유됩니다.

use std::env;
use std::path::PathBuf;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use handlebars::Handlebars;

use crate::errors::errors::{AppError, AppResult};

/// 등록되는 뷰 이름들
const TEMPLATE_NAMES: [&str; 4] = ["home", "login", "register", "error"];

/// 템플릿 디렉토리 경로를 결정합니다.
///
/// `TEMPLATE_DIR` 환경 변수가 있으면 그 경로를, 없으면 크레이트의
/// `templates/` 디렉토리를 사용합니다.
fn template_dir() -> PathBuf {
    env::var("TEMPLATE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// 템플릿 레지스트리를 구성합니다.
///
/// 템플릿 파일이 없거나 문법 오류가 있으면 시작 단계에서 실패합니다.
pub fn build_template_registry() -> AppResult<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    let base = template_dir();

    for name in TEMPLATE_NAMES {
        let path = base.join(format!("{}.hbs", name));
        registry
            .register_template_file(name, &path)
            .map_err(|e| {
                AppError::TemplateError(format!("템플릿 등록 실패 ({}): {}", path.display(), e))
            })?;
    }

    Ok(registry)
}

/// 이름이 지정된 뷰를 렌더링한 HTML 응답을 생성합니다.
pub fn render(
    registry: &Handlebars<'_>,
    name: &str,
    data: &serde_json::Value,
) -> AppResult<HttpResponse> {
    let body = registry
        .render(name, data)
        .map_err(|e| AppError::TemplateError(format!("템플릿 렌더링 실패 ({}): {}", name, e)))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_registers_all_views() {
        let registry = build_template_registry().unwrap();

        for name in TEMPLATE_NAMES {
            assert!(registry.has_template(name), "missing template: {}", name);
        }
    }

    #[test]
    fn test_login_view_renders_flash_messages() {
        let registry = build_template_registry().unwrap();

        let body = registry
            .render("login", &json!({ "messages": ["Invalid email/password"] }))
            .unwrap();

        assert!(body.contains("Invalid email/password"));
    }

    #[test]
    fn test_error_view_renders_diagnostic() {
        let registry = build_template_registry().unwrap();

        let body = registry
            .render(
                "error",
                &json!({ "error": "Database error: connection reset", "status_code": "500" }),
            )
            .unwrap();

        assert!(body.contains("Database error: connection reset"));
        assert!(body.contains("500"));
    }
}
