//! # 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 형식 규칙은 `validator` derive로, 필수 여부는 [`ValidateInput`] 구현에서
//! 별도로 검사하며 필수 메시지가 형식 메시지보다 우선합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `name` | 2-30자 | Name must be between 2 and 30 characters |
//! | `email` | 이메일 형식, TLD 필수 | Email is invalid |
//! | `password` | 6-30자 | Password must be between 6 and 30 characters |
//! | `password2` | `password`와 일치 | Passwords must match |
//!
//! 누락된 필드는 빈 문자열로 역직렬화되어 "... field is required" 에러가 됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::validation::{
    first_messages, require, validate_top_level_domain, ValidateInput, ValidationResult,
};
use crate::errors::FieldErrors;

/// 회원가입 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "secret1",
///   "password2": "secret1"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "Name must be between 2 and 30 characters"))]
    pub name: String,

    #[validate(
        email(message = "Email is invalid"),
        custom(function = "validate_top_level_domain", message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,

    /// 비밀번호 확인
    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub password2: String,
}

impl ValidateInput for RegisterRequest {
    fn validate_input(&self) -> ValidationResult {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => first_messages(&e),
        };

        require(&mut errors, "name", &self.name, "Name field is required");
        require(&mut errors, "email", &self.email, "Email field is required");
        require(&mut errors, "password", &self.password, "Password field is required");
        require(&mut errors, "password2", &self.password2, "Confirm Password field is required");

        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            password2: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        let result = alice().validate_input();

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_fields_report_required() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        let result = request.validate_input();

        assert!(!result.is_valid);
        assert_eq!(result.errors["name"], "Name field is required");
        assert_eq!(result.errors["email"], "Email field is required");
        assert_eq!(result.errors["password"], "Password field is required");
        assert_eq!(result.errors["password2"], "Confirm Password field is required");
    }

    #[test]
    fn test_format_rules() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            password2: "different".to_string(),
        };
        let result = request.validate_input();

        assert_eq!(result.errors["name"], "Name must be between 2 and 30 characters");
        assert_eq!(result.errors["email"], "Email is invalid");
        assert_eq!(result.errors["password"], "Password must be between 6 and 30 characters");
        assert_eq!(result.errors["password2"], "Passwords must match");
    }

    #[test]
    fn test_email_without_tld_is_invalid() {
        let request = RegisterRequest {
            email: "alice@localhost".to_string(),
            ..alice()
        };
        let result = request.validate_input();

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors["email"], "Email is invalid");
    }

    #[test]
    fn test_password_mismatch_only() {
        let request = RegisterRequest {
            password2: "secret2".to_string(),
            ..alice()
        };
        let result = request.validate_input();

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors["password2"], "Passwords must match");
    }
}
