//! Authentication HTTP Handlers
//!
//! 로그인, 가입, 로그아웃, Facebook OAuth 왕복을 처리하는 핸들러들입니다.
//!
//! 거부는 플래시 메시지와 함께 폼으로 되돌리고, 저장소/외부 서비스 장애는
//! `AppError`로 전파하여 장애 경계가 500 페이지를 렌더링하게 합니다.

use actix_session::Session;
use actix_web::{HttpResponse, get, post, web};
use actix_web_flash_messages::FlashMessage;
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::auth_request::{FacebookCallbackQuery, LoginForm, RegisterForm};
use crate::errors::errors::AppError;
use crate::handlers::redirect;
use crate::services::auth::{
    AuthOutcome, CredentialStrategy, FacebookStrategy, LocalCredentials, LocalStrategy,
};
use crate::services::users::UserService;
use crate::session;

/// 로컬 로그인 핸들러
///
/// 이메일과 비밀번호를 로컬 전략으로 검증합니다. 성공하면 세션에 주체를
/// 기록하고 홈으로, 거부되면 사유를 플래시로 남기고 로그인 폼으로
/// 리다이렉트합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn local_login(
    form: web::Form<LoginForm>,
    session: Session,
    strategy: web::Data<LocalStrategy>,
) -> Result<HttpResponse, AppError> {
    let credentials = LocalCredentials::from(form.into_inner());
    let email = credentials.email.clone();

    match strategy.verify(credentials).await? {
        AuthOutcome::Granted(user) => {
            session::remember(&session, &user)?;
            log::info!("로컬 로그인 성공: {}", email);
            Ok(redirect("/"))
        }
        AuthOutcome::Denied(reason) => {
            FlashMessage::error(reason).send();
            Ok(redirect("/login"))
        }
    }
}

/// 가입 핸들러
///
/// 폼 검증과 이메일 중복은 플래시 메시지와 함께 가입 폼으로 되돌리고,
/// 성공하면 로그인 폼으로 보냅니다. 그 외 저장소 오류는 전파됩니다.
///
/// # Endpoint
/// `POST /register`
#[post("/register")]
pub async fn register(
    form: web::Form<RegisterForm>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    if let Err(validation) = form.validate() {
        FlashMessage::error(validation.to_string()).send();
        return Ok(redirect("/register"));
    }

    match users.register(form).await {
        Ok(_) => Ok(redirect("/login")),
        Err(AppError::ConflictError(message)) => {
            FlashMessage::error(message).send();
            Ok(redirect("/register"))
        }
        Err(error) => Err(error),
    }
}

/// 로그아웃 핸들러
///
/// 세션의 인증 주체를 파기하고 로그인 폼으로 보냅니다.
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(session: Session) -> HttpResponse {
    session::forget(&session);
    redirect("/login")
}

/// Facebook OAuth 시작 핸들러
///
/// state 값을 세션에 보관하고 사용자를 동의 화면으로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /auth/facebook`
#[get("/facebook")]
pub async fn facebook_login(
    session: Session,
    strategy: web::Data<FacebookStrategy>,
) -> Result<HttpResponse, AppError> {
    let state = Uuid::new_v4().simple().to_string();
    session::put_oauth_state(&session, &state)?;

    Ok(redirect(&strategy.authorize_url(&state)))
}

/// Facebook OAuth 콜백 핸들러
///
/// 동의 거부, state 불일치, code 누락은 모두 거부로 보고 로그인 폼으로
/// 되돌립니다. 토큰 교환/프로필 조회 실패는 하드 에러로 전파됩니다.
///
/// # Endpoint
/// `GET /auth/facebook/callback?code={code}&state={state}`
#[get("/facebook/callback")]
pub async fn facebook_callback(
    query: web::Query<FacebookCallbackQuery>,
    session: Session,
    strategy: web::Data<FacebookStrategy>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    // 사용자가 동의를 거부했거나 프로바이더가 에러를 보낸 경우
    if let Some(error) = &query.error {
        log::warn!(
            "Facebook OAuth 에러: {} - {}",
            error,
            query.error_description.as_deref().unwrap_or("")
        );
        return Ok(redirect("/login"));
    }

    let stored_state = session::take_oauth_state(&session);
    if stored_state.is_none() || stored_state != query.state {
        log::warn!("Facebook OAuth state 불일치");
        return Ok(redirect("/login"));
    }

    let Some(code) = query.code.as_deref() else {
        return Ok(redirect("/login"));
    };

    let token = strategy.exchange_code(code).await?;
    let profile = strategy.fetch_profile(&token.access_token).await?;

    match strategy.verify(profile).await? {
        AuthOutcome::Granted(user) => {
            session::remember(&session, &user)?;
            Ok(redirect("/"))
        }
        AuthOutcome::Denied(_) => Ok(redirect("/login")),
    }
}
