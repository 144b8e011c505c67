//! # User HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/users/registration` | - | 회원가입 |
//! | `POST` | `/api/users/login` | - | 로그인 (Bearer 토큰 발급) |
//! | `GET` | `/api/users/current` | 필수 | 현재 사용자 조회 |
//!
//! ## 에러 응답
//!
//! 모든 에러는 `{필드: 메시지}` 형태의 JSON으로 응답합니다.
//!
//! ```json
//! { "email": "Email already exists" }
//! ```

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::models::Principal;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::users::UserService;

/// 회원가입
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users/registration \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"alice.w@example.com","password":"secret1","password2":"secret1"}'
/// ```
#[post("/registration")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// 로그인
///
/// 성공 시 `{"success": true, "token": "Bearer <jwt>"}`를 반환합니다.
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/current", wrap = "AuthMiddleware::required()")]
pub async fn current_user(
    user_service: web::Data<UserService>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    let user = user_service.current(&principal).await?;
    Ok(HttpResponse::Ok().json(user))
}
