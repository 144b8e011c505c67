//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 비밀키와 토큰 만료 시간을 관리합니다.

use std::fmt;

use super::data_config::parse_or;
use super::{ConfigError, ConfigSource};

/// JWT 토큰 설정
///
/// [`TokenService`](crate::services::auth::TokenService) 생성 시 전달됩니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 토큰 만료 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 설정 소스에서 JWT 설정을 로드합니다.
    ///
    /// 비밀키는 코드에 기본값이 없습니다. 설정되지 않았거나 비어 있으면
    /// 서버가 시작되지 않습니다.
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// export JWT_SECRET="$(openssl rand -base64 32)"
    ///
    /// # 만료 시간 (기본값 10시간)
    /// export JWT_EXPIRATION_HOURS="10"
    /// ```
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - `JWT_SECRET` 누락 또는 공백
    /// * `ConfigError::Invalid` - 만료 시간이 양의 정수가 아님
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let secret = source
            .get("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiration_hours: i64 = parse_or("JWT_EXPIRATION_HOURS", source, 10)?;
        if expiration_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_HOURS",
                value: expiration_hours.to_string(),
            });
        }

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

// 비밀키가 로그에 찍히지 않도록 수동 구현
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
