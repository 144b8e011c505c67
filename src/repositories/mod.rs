//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 컬렉션마다 저장소 trait과 MongoDB 구현을 제공하며,
//! [`memory`] 모듈은 같은 trait의 인메모리 구현(로컬 실행 및 테스트용)입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{posts::PostRepository, users::UserRepository};
//!
//! let users = Arc::new(UserRepository::new(&database));
//! let posts = Arc::new(PostRepository::new(&database));
//! users.create_indexes().await?;
//! posts.create_indexes().await?;
//! ```

pub mod users;
pub mod posts;
pub mod memory;

pub use users::UserStore;
pub use posts::PostStore;

use mongodb::error::{ErrorKind, WriteFailure};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// 유니크 인덱스 위반 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}
