//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, Rate Limiting 및 패스워드 해싱 설정을 관리합니다.
//! 모든 값은 [`ConfigSource`]를 통해 한 번만 읽히며, 이후에는 구조체로 전달됩니다.

use super::{ConfigError, ConfigSource};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 설정 소스에서 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값을 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn detect(source: &impl ConfigSource) -> Self {
        source
            .get("ENVIRONMENT")
            .or_else(|| source.get("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn load(source: &impl ConfigSource, env: &Environment) -> Self {
        let bcrypt_cost = source
            .get("BCRYPT_COST")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging/Production: 10
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 10,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩 포트. 기본값: 5000
    pub port: u16,
    /// 워커 스레드 수. 기본값: 4
    pub workers: usize,
}

impl ServerConfig {
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            host: source.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", source, 5000)?,
            workers: parse_or("WORKERS", source, 4)?,
        })
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 영속성 계층 구현 선택
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션
    MongoDb,
    /// 프로세스 메모리 (로컬 실행 및 테스트용)
    Memory,
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub uri: String,
    /// 데이터베이스 이름. 기본값: "social_dev"
    pub name: String,
}

impl DatabaseConfig {
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let backend = match source
            .get("DATABASE_BACKEND")
            .map(|value| value.to_lowercase())
            .as_deref()
        {
            None | Some("mongodb") | Some("mongo") => StorageBackend::MongoDb,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "DATABASE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            backend,
            uri: source
                .get("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            name: source
                .get("DATABASE_NAME")
                .unwrap_or_else(|| "social_dev".to_string()),
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수. 기본값: 100
    pub per_second: u64,
    /// 버스트 허용량. 기본값: 200
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", source, 100)?,
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", source, 200)?,
        })
    }
}

/// 값이 없으면 기본값, 있는데 파싱되지 않으면 에러
pub(crate) fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    source: &impl ConfigSource,
    default: T,
) -> Result<T, ConfigError> {
    match source.get(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
