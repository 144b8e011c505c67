//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Authorization 헤더의 Bearer 토큰 추출 및 검증
//! - 검증된 요청 주체([`Principal`](crate::domain::models::Principal))를 request extension에 저장
//! - 실패 시 401 `{"unauthorized": <message>}` 응답, 핸들러는 호출되지 않음
//!
//! # 사용 방법
//!
//! ## 특정 라우트에만 적용
//! ```rust,ignore
//! use actix_web::{post, web, HttpResponse};
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("/", wrap = "AuthMiddleware::required()")]
//! async fn create_post(principal: Principal, body: web::Json<TextRequest>) -> HttpResponse {
//!     // ...
//! }
//! ```
//!
//! ## 의존성
//!
//! 미들웨어는 앱 데이터에 등록된 `web::Data<TokenService>`를 사용합니다.

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
