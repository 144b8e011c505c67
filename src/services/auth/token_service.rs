//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 요청 주체(`{id, name, avatar}`)를 담은 토큰의 발급과 검증을 담당합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::models::{Principal, TokenClaims};
use crate::errors::{AppError, AppResult, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
/// 비밀키와 만료 시간은 생성 시 [`JwtConfig`]로 전달받습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration: Duration::hours(config.expiration_hours),
        }
    }

    /// 요청 주체를 위한 JWT 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `principal` - 토큰에 담을 사용자 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 서명된 JWT (Bearer 접두사 없음)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let jwt = token_service.issue(&principal)?;
    /// let response = LoginResponse::bearer(jwt);
    /// ```
    pub fn issue(&self, principal: &Principal) -> AppResult<String> {
        self.issue_at(principal, Utc::now())
    }

    /// 지정한 발급 시각으로 토큰 생성
    pub fn issue_at(&self, principal: &Principal, issued_at: DateTime<Utc>) -> AppResult<String> {
        let expires_at = issued_at + self.expiration;
        let claims = TokenClaims::new(principal, issued_at.timestamp(), expires_at.timestamp());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .with_context(|| format!("JWT 토큰 생성 실패 ({})", principal.id))
    }

    /// JWT 토큰 검증 및 요청 주체 추출
    ///
    /// HS256 서명만 허용하며 `exp` 클레임은 필수, 유예 시간은 없습니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify(&self, token: &str) -> AppResult<Principal> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| Principal::from(token_data.claims))
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError("Invalid token".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let principal = token_service.verify(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "Invalid authorization header".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration_hours: 10,
        }
    }

    fn alice() -> Principal {
        Principal {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Alice".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new(config("test-secret"));

        let token = service.issue(&alice()).unwrap();
        let principal = service.verify(&token).unwrap();

        assert_eq!(principal, alice());
    }

    #[test]
    fn test_token_expires_after_ten_hours() {
        let service = TokenService::new(config("test-secret"));

        let still_valid = service
            .issue_at(&alice(), Utc::now() - Duration::hours(9))
            .unwrap();
        let expired = service
            .issue_at(&alice(), Utc::now() - Duration::hours(11))
            .unwrap();

        assert!(service.verify(&still_valid).is_ok());
        match service.verify(&expired) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("Expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::new(config("secret-a"));
        let verifier = TokenService::new(config("secret-b"));

        let token = issuer.issue(&alice()).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let service = TokenService::new(config("test-secret"));
        let token = service.issue(&alice()).unwrap();
        let forged = service
            .issue(&Principal {
                name: "Mallory".to_string(),
                ..alice()
            })
            .unwrap();

        // 원본 서명에 다른 페이로드를 붙임
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = TokenService::new(config("test-secret"));

        match service.verify("not.a.jwt") {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, "Invalid token"),
            other => panic!("Expected invalid token error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new(config("test-secret"));

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
