//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 JWT 토큰 발급/검증을 담당하는 서비스들을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (호출마다 새 솔트)
//! - HMAC-SHA256 토큰 서명, 만료 시간 검증
//! - 비밀키는 설정으로만 주입되며 코드에 기본값이 없음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordService, TokenService};
//!
//! let passwords = PasswordService::new(&config.password);
//! let tokens = TokenService::new(config.jwt.clone());
//!
//! let hash = passwords.hash("secret1")?;
//! let jwt = tokens.issue(&principal)?;
//! let principal = tokens.verify(&jwt)?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
