//! 도메인 모델 모듈
//!
//! 영속화되지 않는 요청 범위의 모델을 정의합니다.
//!
//! - [`auth`] - 인증된 요청 주체 ([`Principal`](auth::Principal))
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;

pub use auth::Principal;
pub use token::TokenClaims;
