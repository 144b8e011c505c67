//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인(토큰 발급), 현재 사용자 조회를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (사전 조회 + 유니크 인덱스)
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_store, passwords, tokens);
//! let created = user_service.register(request).await?;
//! let login = user_service.login(credentials).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
