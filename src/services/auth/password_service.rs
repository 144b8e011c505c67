//! bcrypt 기반 비밀번호 해싱 서비스

use std::time::Instant;

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱 서비스
///
/// 호출마다 새로운 솔트를 생성하며, cost는 [`PasswordConfig`]에서 결정됩니다.
/// 평문과 해시는 로그에 남기지 않습니다.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// 비밀번호 해싱
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 내부 오류
    pub fn hash(&self, plain: &str) -> AppResult<String> {
        let started = Instant::now();
        let hashed = bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", started.elapsed());
        Ok(hashed)
    }

    /// 비밀번호 검증
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장된 해시 형식이 잘못된 경우
    pub fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        let started = Instant::now();
        let is_valid = bcrypt::verify(plain, hashed).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", started.elapsed());
        Ok(is_valid)
    }
}
