//! 게시글 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 게시글은 좋아요와 댓글을 포함한 문서 단위로만 읽고 씁니다.
//! 부분 필드 업데이트나 낙관적 잠금은 제공하지 않으며,
//! 같은 게시글에 대한 동시 변경은 마지막 저장이 이깁니다.

pub mod post_repo;

pub use post_repo::PostRepository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::posts::Post;
use crate::errors::AppResult;

/// 게시글 저장소
#[async_trait]
pub trait PostStore: Send + Sync {
    /// 모든 게시글을 작성일 내림차순으로 조회
    async fn find_all(&self) -> AppResult<Vec<Post>>;

    /// ID로 게시글 조회. 잘못된 ID 형식은 `Ok(None)`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>>;

    /// 게시글 문서 전체 저장 (없으면 생성)
    async fn save(&self, post: &Post) -> AppResult<()>;

    /// 게시글 삭제. 삭제된 문서가 있으면 true
    async fn remove(&self, id: &ObjectId) -> AppResult<bool>;
}
