//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 게시글 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 가입/로그인/현재 사용자 API
//! - 게시글/좋아요/댓글 API
//! - 보호 라우트는 핸들러 단위로 `AuthMiddleware::required()` 적용
//! - JSON 본문 파싱 오류를 `{"body": <message>}` 400 응답으로 변환
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(routes::json_config())
//!     .configure(routes::configure_all_routes)
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/users/registration` - 회원가입
/// - `POST /api/users/login` - 이메일/비밀번호 로그인
/// - `GET /api/users/current` - 현재 사용자 정보 조회 (인증 필요)
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"alice.w@example.com","password":"secret1"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::current_user),
    );
}

/// 게시글 관련 라우트를 설정합니다
///
/// 목록과 단건 조회는 공개이며 나머지는 인증이 필요합니다.
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(handlers::posts::list_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::add_comment)
            .service(handlers::posts::remove_comment)
            .service(handlers::posts::get_post)
            .service(handlers::posts::delete_post),
    );
}

/// JSON 본문 추출 설정
///
/// 잘못된 JSON 본문은 400 `{"body": <parser message>}`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::validation("body", &err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
