//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽어 [`AppConfig`]로 묶고,
//! 각 컴포넌트의 생성자에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, Rate Limiting, 패스워드 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let token_service = TokenService::new(config.jwt.clone());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export WORKERS="4"
//! export DATABASE_BACKEND="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_dev"
//! export JWT_EXPIRATION_HOURS="10"
//! export BCRYPT_COST="10"             # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::collections::HashMap;

use thiserror::Error;

/// 설정 로드 실패
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("필수 설정값이 없습니다: {0}")]
    Missing(&'static str),

    #[error("설정값 형식이 잘못되었습니다: {key}={value}")]
    Invalid { key: &'static str, value: String },
}

/// 키-값 설정 소스
///
/// 운영에서는 프로세스 환경 변수, 테스트에서는 `HashMap`을 사용합니다.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// 프로세스 환경 변수 소스
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 전체 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 값 누락 (`JWT_SECRET`)
    /// * `ConfigError::Invalid` - 숫자 형식 오류 등
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&EnvSource)
    }

    /// 임의의 설정 소스에서 전체 설정을 로드합니다.
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let environment = Environment::detect(source);

        Ok(Self {
            server: ServerConfig::load(source)?,
            database: DatabaseConfig::load(source)?,
            jwt: JwtConfig::load(source)?,
            password: PasswordConfig::load(source, &environment),
            rate_limit: RateLimitConfig::load(source)?,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let source: HashMap<String, String> = [
            ("ENVIRONMENT", "test"),
            ("JWT_SECRET", "s3cr3t"),
            ("DATABASE_BACKEND", "memory"),
            ("PORT", "8081"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = AppConfig::load(&source).unwrap();

        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.password.bcrypt_cost, 4);
        assert_eq!(config.jwt.expiration_hours, 10);
    }

    #[test]
    fn test_missing_secret_fails_whole_config() {
        let source = HashMap::new();

        assert!(matches!(
            AppConfig::load(&source),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
    }
}
