//! 사용자 관련 DTO 모듈
//!
//! 회원가입, 로그인 요청과 사용자 응답을 정의합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
