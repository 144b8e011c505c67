//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 요청/응답 타입입니다.
//! 엔드포인트마다 전용 타입을 두고, 요청 DTO는 핸들러에서
//! [`ValidateInput`](validation::ValidateInput)으로 검증한 뒤 서비스로 전달합니다.
//!
//! - [`validation`] - 공통 검증 결과 타입
//! - [`users`] - 회원가입, 로그인, 사용자 응답
//! - [`posts`] - 게시글/댓글 요청, 게시글 응답

pub mod validation;
pub mod users;
pub mod posts;

pub use validation::{ValidateInput, ValidationResult};
pub use users::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use posts::{CommentResponse, DeleteResponse, LikeResponse, PostResponse, TextRequest};
