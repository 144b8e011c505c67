//! 요청 DTO 입력 검증 공통 모듈
//!
//! 모든 요청 DTO는 [`ValidateInput`]을 구현하며, 검증 결과는 항상
//! 필드별 메시지 맵과 유효 여부를 함께 담은 [`ValidationResult`]로 반환됩니다.
//! 검증 자체는 실패하거나 패닉하지 않습니다.

use validator::{ValidationError, ValidationErrors};

use crate::errors::{AppError, AppResult, FieldErrors};
use crate::utils::string_utils::is_blank;

/// 입력 검증 결과
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// 필드명 → 사용자에게 보여줄 메시지
    pub errors: FieldErrors,
    /// `errors`가 비어 있으면 true
    pub is_valid: bool,
}

impl ValidationResult {
    pub fn from_errors(errors: FieldErrors) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }

    /// 검증 실패 시 `AppError::ValidationError`로 변환
    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::ValidationError(self.errors))
        }
    }
}

/// 요청 DTO 검증 trait
pub trait ValidateInput {
    fn validate_input(&self) -> ValidationResult;

    /// 핸들러 경계에서 사용하는 단축 메서드
    fn ensure_valid(&self) -> AppResult<()> {
        self.validate_input().into_result()
    }
}

/// `validator` derive 결과를 필드별 첫 번째 메시지 맵으로 변환합니다.
pub fn first_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            field_errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

/// 빈 값(공백만 있는 경우 포함)이면 필수 메시지로 덮어씁니다.
pub fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if is_blank(value) {
        errors.insert(field.to_string(), message.to_string());
    }
}

/// 이메일 도메인이 최상위 도메인(TLD)으로 끝나는지 확인합니다.
///
/// `validate_email`은 `user@localhost` 같은 단일 레이블 도메인도 통과시킵니다.
/// TLD는 2자 이상의 문자이거나 `xn--` 퓨니코드 레이블이어야 합니다.
pub fn has_top_level_domain(email: &str) -> bool {
    let Some((_, domain)) = email.trim().rsplit_once('@') else {
        return false;
    };
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let tld = tld.to_lowercase();
    match tld.strip_prefix("xn--") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
        None => tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic),
    }
}

/// `#[validate(custom(...))]`용 TLD 검사
pub fn validate_top_level_domain(email: &str) -> Result<(), ValidationError> {
    if has_top_level_domain(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email_tld"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_validity_follows_errors() {
        assert!(ValidationResult::from_errors(FieldErrors::new()).is_valid);

        let mut errors = FieldErrors::new();
        require(&mut errors, "text", "   ", "Text field is required");
        let result = ValidationResult::from_errors(errors);

        assert!(!result.is_valid);
        assert_eq!(result.errors["text"], "Text field is required");
        assert!(matches!(result.into_result(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_top_level_domain_required() {
        assert!(has_top_level_domain("alice@example.com"));
        assert!(has_top_level_domain("bob@mail.example.co.uk"));
        assert!(has_top_level_domain("carol@example.xn--p1ai"));

        assert!(!has_top_level_domain("longname@localhost"));
        assert!(!has_top_level_domain("alice@example.c"));
        assert!(!has_top_level_domain("alice@example.123"));
        assert!(!has_top_level_domain("alice@example."));
        assert!(!has_top_level_domain("no-at-sign"));
        assert!(validate_top_level_domain("alice@localhost").is_err());
    }
}
