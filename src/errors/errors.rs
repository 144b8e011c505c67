//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 클라이언트에게는 항상 `{필드: 메시지}` 형태의 JSON 본문이 전달됩니다.
//! 5xx 계열 에러의 상세 내용은 로그로만 남기고 응답에는 포함하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn delete_post(post: &Post, principal: &Principal) -> Result<(), AppError> {
//!     if !post.is_owned_by(&principal.id) {
//!         return Err(AppError::not_authorized("User not authorized"));
//!     }
//!
//!     post_store.remove(&post.id).await?;
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;

use serde_json::json;
use thiserror::Error;

/// 필드명 → 에러 메시지 매핑
pub type FieldErrors = BTreeMap<String, String>;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0:?}")]
    ValidationError(FieldErrors),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {entity}: {message}")]
    NotFound { entity: String, message: String },

    /// 충돌/중복 에러 (400 Bad Request)
    #[error("Conflict error: {field}: {message}")]
    ConflictError { field: String, message: String },

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 소유권 위반 에러 (401 Unauthorized)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 검증 에러 생성
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.to_string());
        AppError::ValidationError(errors)
    }

    /// 엔티티 키를 가진 404 에러 생성
    pub fn not_found(entity: &str, message: &str) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            message: message.to_string(),
        }
    }

    /// 필드 키를 가진 충돌 에러 생성
    pub fn conflict(field: &str, message: &str) -> Self {
        AppError::ConflictError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// 소유권 위반 에러 생성
    pub fn not_authorized(message: &str) -> Self {
        AppError::AuthorizationError(message.to_string())
    }

    /// 클라이언트에게 전달될 JSON 본문
    fn body(&self) -> serde_json::Value {
        match self {
            AppError::ValidationError(errors) => json!(errors),
            AppError::NotFound { entity, message } => keyed(entity, message),
            AppError::ConflictError { field, message } => keyed(field, message),
            AppError::AuthenticationError(message) => json!({ "unauthorized": message }),
            AppError::AuthorizationError(message) => json!({ "notauthorized": message }),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                json!({ "error": "Internal server error" })
            }
        }
    }
}

fn keyed(key: &str, message: &str) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), json!(message));
    serde_json::Value::Object(body)
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::validation("email", "Email field is required");

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&error), json!({ "email": "Email field is required" }));
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::not_found("post", "No post found");

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(&error), json!({ "post": "No post found" }));
    }

    #[test]
    fn test_conflict_error_is_bad_request() {
        let error = AppError::conflict("alreadyliked", "User already liked this post");

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&error),
            json!({ "alreadyliked": "User already liked this post" })
        );
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(&error), json!({ "unauthorized": "Invalid token" }));
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::not_authorized("User not authorized");

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(&error), json!({ "notauthorized": "User not authorized" }));
    }

    #[test]
    fn test_with_context_is_lazy_and_internal() {
        let ok: Result<u8, String> = Ok(7);
        let value = ok
            .with_context(|| panic!("성공 시 컨텍스트를 만들지 않아야 함"))
            .unwrap();
        assert_eq!(value, 7);

        let failed: Result<u8, String> = Err("bad key".to_string());
        match failed.with_context(|| format!("JWT 토큰 생성 실패 ({})", "abc")) {
            Err(AppError::InternalError(message)) => {
                assert_eq!(message, "JWT 토큰 생성 실패 (abc): bad key");
            }
            other => panic!("Expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error), json!({ "error": "Internal server error" }));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
