//! 최외곽 장애 경계
//!
//! 핸들러에서 처리되지 않고 올라온 모든 실패를 한 곳에서 받아
//! 일반 에러 페이지로 변환합니다. 거부(Denial)는 핸들러가 플래시 메시지와
//! 리다이렉트로 처리하므로 여기까지 도달하지 않습니다.
//!
//! 에러 페이지 렌더링 자체가 실패하면 일반 텍스트 응답으로 대체합니다.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, Result, web};
use handlebars::Handlebars;
use serde_json::json;

/// 500 응답을 에러 템플릿으로 다시 렌더링하는 미들웨어를 생성합니다.
pub fn error_pages() -> ErrorHandlers<BoxBody> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, internal_server_error)
}

/// 500 Internal Server Error 핸들러
///
/// 원래 응답에 붙어 있는 에러의 진단 메시지를 꺼내 에러 뷰에 전달합니다.
fn internal_server_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let diagnostic = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Internal server error".to_string());

    log::error!("요청 처리 실패: {}", diagnostic);

    let response = error_page_response(&res, &diagnostic);
    Ok(ErrorHandlerResponse::Response(ServiceResponse::new(
        res.into_parts().0,
        response.map_into_right_body(),
    )))
}

/// 에러 템플릿을 렌더링한 HTTP 응답을 생성합니다.
///
/// 템플릿 레지스트리가 없거나 렌더링이 실패하면 일반 텍스트로 대체합니다.
fn error_page_response<B>(res: &ServiceResponse<B>, diagnostic: &str) -> HttpResponse<BoxBody> {
    let fallback = |message: &str| {
        HttpResponse::build(res.status())
            .content_type(ContentType::plaintext())
            .body(message.to_string())
    };

    let registry = res
        .request()
        .app_data::<web::Data<Handlebars>>()
        .map(|data| data.get_ref());

    match registry {
        Some(registry) => {
            let data = json!({
                "error": diagnostic,
                "status_code": res.status().as_str(),
            });
            match registry.render("error", &data) {
                Ok(body) => HttpResponse::build(res.status())
                    .content_type(ContentType::html())
                    .body(body),
                Err(_) => fallback(diagnostic),
            }
        }
        None => fallback(diagnostic),
    }
}
