//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 유틸리티
//! - [`gravatar`] - 이메일 기반 프로필 이미지 URL

pub mod string_utils;
pub mod gravatar;
