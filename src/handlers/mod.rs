//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 역직렬화하여 서비스에 위임하고 결과를 JSON으로 응답합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - Bearer 토큰 검증 (보호 라우트)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `main`에서 생성되어 `web::Data`로 등록되며,
//! 핸들러는 추출자로 전달받습니다.
//!
//! ```rust,ignore
//! #[post("/registration")]
//! pub async fn register(
//!     user_service: web::Data<UserService>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = user_service.register(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며 `?`로 전파된 에러는
//! `ResponseError` 구현에 의해 상태 코드와 JSON 본문으로 변환됩니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입, 로그인, 현재 사용자
//! - **`posts`**: 게시글, 좋아요, 댓글

pub mod users;
pub mod posts;
