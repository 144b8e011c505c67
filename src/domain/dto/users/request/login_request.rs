//! # 로그인 요청 DTO
//!
//! 로그인 이메일 검증은 다음 순서로 평가됩니다.
//!
//! 1. `@` 앞부분(로컬 파트)이 6-50자가 아니면 로컬 파트 길이 메시지
//! 2. 그렇지 않고 이메일 형식이 아니거나 TLD가 없으면 "Email is invalid"
//! 3. 비어 있으면 "Email field is required" (1, 2를 덮어씀)
//!
//! 따라서 로컬 파트가 짧은 잘못된 주소는 형식 메시지가 아닌
//! 로컬 파트 길이 메시지를 받습니다.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::dto::validation::{has_top_level_domain, require, ValidateInput, ValidationResult};
use crate::errors::FieldErrors;

const LOCAL_PART_MIN: usize = 6;
const LOCAL_PART_MAX: usize = 50;

/// 로그인 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// 앞뒤 공백을 제거한 (email, password)
    pub fn trimmed(&self) -> (&str, &str) {
        (self.email.trim(), self.password.trim())
    }
}

/// `@` 앞부분. `@`가 없으면 문자열 전체
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

impl ValidateInput for LoginRequest {
    fn validate_input(&self) -> ValidationResult {
        let mut errors = FieldErrors::new();

        let local_len = local_part(&self.email).chars().count();
        if !(LOCAL_PART_MIN..=LOCAL_PART_MAX).contains(&local_len) {
            errors.insert(
                "email".to_string(),
                "Email must contain 6 characters before the @ sign".to_string(),
            );
        } else if !self.email.validate_email() || !has_top_level_domain(&self.email) {
            errors.insert("email".to_string(), "Email is invalid".to_string());
        }

        require(&mut errors, "email", &self.email, "Email field is required");
        require(&mut errors, "password", &self.password, "Password field is required");

        ValidationResult::from_errors(errors)
    }
}
