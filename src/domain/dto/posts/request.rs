//! 게시글/댓글 작성 요청 DTO

use serde::{Deserialize, Serialize};

use crate::domain::dto::validation::{require, ValidateInput, ValidationResult};
use crate::errors::FieldErrors;

/// 게시글 또는 댓글 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRequest {
    pub text: String,
}

impl ValidateInput for TextRequest {
    fn validate_input(&self) -> ValidationResult {
        let mut errors = FieldErrors::new();
        require(&mut errors, "text", &self.text, "Text field is required");
        ValidationResult::from_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        for text in ["", "   \n"] {
            let result = TextRequest { text: text.to_string() }.validate_input();

            assert!(!result.is_valid);
            assert_eq!(result.errors["text"], "Text field is required");
        }
    }

    #[test]
    fn test_text_present() {
        let result = TextRequest { text: "Hello".to_string() }.validate_input();

        assert!(result.is_valid);
    }
}
