//! 스크랩북 웹 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결과 인덱스 생성을 서버가 요청을 받기 전에 마치고,
//! 세션/플래시/템플릿 구성 요소를 명시적으로 조립하여 주입합니다.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use scrapbook_web::config::{ServerConfig, SessionConfig};
use scrapbook_web::db::Database;
use scrapbook_web::repositories::{MongoUserRepository, UserStore};
use scrapbook_web::routes::configure_all_routes;
use scrapbook_web::services::auth::{FacebookStrategy, LocalStrategy};
use scrapbook_web::services::users::UserService;
use scrapbook_web::{errors, handlers, session, views};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 스크랩북 웹 서비스 시작중...");

    // 데이터 스토어 초기화 (요청 수신 전에 완료)
    let user_store = initialize_user_store().await;

    // HTTP 서버 시작
    start_http_server(user_store).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 세션, 플래시 메시지, 장애 경계 미들웨어와 템플릿 레지스트리,
/// 전략/서비스 애플리케이션 데이터를 조립합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_store: Arc<dyn UserStore>) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();
    let signing_key = SessionConfig::signing_key();

    let registry = web::Data::new(
        views::build_template_registry().expect("템플릿 레지스트리 초기화 실패"),
    );
    let store_data = web::Data::from(user_store.clone());
    let local_strategy = web::Data::new(LocalStrategy::new(user_store.clone()));
    let facebook_strategy = web::Data::new(FacebookStrategy::new(user_store.clone()));
    let user_service = web::Data::new(UserService::new(user_store));

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        App::new()
            // 장애 경계 (핸들러 에러를 에러 페이지로)
            .wrap(errors::fault::error_pages())

            // 플래시 메시지 / 세션
            .wrap(handlers::flash_framework(signing_key.clone()))
            .wrap(session::session_middleware(signing_key.clone()))

            // 요청 로깅, 경로 정규화
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 명시적으로 조립된 애플리케이션 데이터
            .app_data(store_data.clone())
            .app_data(local_strategy.clone())
            .app_data(facebook_strategy.clone())
            .app_data(user_service.clone())
            .app_data(registry.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결과 사용자 스토어를 초기화합니다
///
/// 연결 검증과 유니크 인덱스 생성까지 마친 스토어 핸들을 반환합니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
/// * 인덱스 생성 실패 시
async fn initialize_user_store() -> Arc<dyn UserStore> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.expect("데이터베이스 연결 실패");

    let repository = MongoUserRepository::new(&database);
    repository
        .create_indexes()
        .await
        .expect("사용자 인덱스 생성 실패");

    info!("✅ 사용자 스토어 초기화 완료");

    Arc::new(repository)
}
