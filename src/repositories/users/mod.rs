//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] trait을 통해 서비스 계층이 저장소 구현과 분리됩니다.
//! [`UserRepository`](user_repo::UserRepository)는 MongoDB 구현입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;

use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회. 잘못된 ID 형식은 `Ok(None)`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장
    ///
    /// 이메일이 이미 존재하면 `ConflictError`(`email`)를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;
}
