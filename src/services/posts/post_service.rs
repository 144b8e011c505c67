//! # 게시글 서비스 구현
//!
//! 게시글, 좋아요, 댓글의 비즈니스 로직을 구현합니다.
//! 변경 규칙 자체는 [`Post`] 엔티티에 있으며 이 서비스는 조회와 저장,
//! 소유자 확인을 담당합니다.
//!
//! ## 동시성
//!
//! 변경 작업은 잠금이나 트랜잭션 없이 조회 → 변경 → 저장 순서로 수행되므로
//! 같은 게시글에 대한 동시 변경은 마지막 저장이 이깁니다.

use std::sync::Arc;

use log::{info, warn};

use crate::domain::dto::posts::{DeleteResponse, PostResponse, TextRequest};
use crate::domain::dto::ValidateInput;
use crate::domain::entities::posts::Post;
use crate::domain::models::Principal;
use crate::errors::{AppError, AppResult};
use crate::repositories::PostStore;

/// 게시글 비즈니스 로직 서비스
pub struct PostService {
    posts: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// 변경 대상 게시글 조회 (없으면 `{"post": "No post found"}`)
    async fn load(&self, id: &str) -> AppResult<Post> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("post", "No post found"))
    }

    async fn store(&self, post: Post) -> AppResult<PostResponse> {
        self.posts.save(&post).await?;
        Ok(PostResponse::from(post))
    }

    /// 전체 게시글 (최신순)
    pub async fn list(&self) -> AppResult<Vec<PostResponse>> {
        let posts = self.posts.find_all().await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 게시글 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` (`post`) - 존재하지 않거나 잘못된 ID
    pub async fn get(&self, id: &str) -> AppResult<PostResponse> {
        self.posts
            .find_by_id(id)
            .await?
            .map(PostResponse::from)
            .ok_or_else(|| AppError::not_found("post", "That post does not exist"))
    }

    /// 게시글 작성
    ///
    /// 작성자 이름과 아바타는 요청 주체에서 가져옵니다.
    pub async fn create(&self, principal: &Principal, request: TextRequest) -> AppResult<PostResponse> {
        if !request.validate_input().is_valid {
            return Err(AppError::validation("text", "There is no text for this post"));
        }

        let post = Post::new(
            principal.object_id()?,
            request.text,
            principal.name.clone(),
            principal.avatar.clone(),
        );
        let response = self.store(post).await?;

        info!("📝 게시글 작성: {} by {}", response.id, principal.id);
        Ok(response)
    }

    /// 게시글 삭제 (작성자만 가능)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` (`post`) - 게시글 없음
    /// * `AppError::AuthorizationError` - 작성자가 아님 (게시글은 유지됨)
    pub async fn delete(&self, principal: &Principal, id: &str) -> AppResult<DeleteResponse> {
        let post = self.load(id).await?;

        if !post.is_owned_by(&principal.object_id()?) {
            warn!("⚠️ 타인 게시글 삭제 시도: {} by {}", post.id.to_hex(), principal.id);
            return Err(AppError::not_authorized("User not authorized"));
        }

        if !self.posts.remove(&post.id).await? {
            return Err(AppError::not_found("post", "No post found"));
        }

        info!("🗑️ 게시글 삭제: {} by {}", post.id.to_hex(), principal.id);
        Ok(DeleteResponse::ok())
    }

    /// 좋아요
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` (`alreadyliked`) - 이미 좋아요한 게시글
    pub async fn like(&self, principal: &Principal, id: &str) -> AppResult<PostResponse> {
        let mut post = self.load(id).await?;
        post.add_like(principal.object_id()?)?;
        self.store(post).await
    }

    /// 좋아요 취소
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` (`notliked`) - 좋아요하지 않은 게시글
    pub async fn unlike(&self, principal: &Principal, id: &str) -> AppResult<PostResponse> {
        let mut post = self.load(id).await?;
        post.remove_like(&principal.object_id()?)?;
        self.store(post).await
    }

    /// 댓글 작성
    pub async fn add_comment(
        &self,
        principal: &Principal,
        id: &str,
        request: TextRequest,
    ) -> AppResult<PostResponse> {
        request.ensure_valid()?;

        let mut post = self.load(id).await?;
        post.add_comment(
            principal.object_id()?,
            request.text,
            principal.name.clone(),
            principal.avatar.clone(),
        );
        self.store(post).await
    }

    /// 댓글 삭제
    ///
    /// 댓글 ID로 대상을 찾으며 작성자 확인은 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` (`post`) - 게시글 없음
    /// * `AppError::NotFound` (`commentnotexists`) - 댓글 없음
    pub async fn remove_comment(
        &self,
        principal: &Principal,
        id: &str,
        comment_id: &str,
    ) -> AppResult<PostResponse> {
        let mut post = self.load(id).await?;
        let removed = post.remove_comment(comment_id)?;

        log::debug!("댓글 삭제: {} from {} by {}", removed.id.to_hex(), id, principal.id);
        self.store(post).await
    }
}
