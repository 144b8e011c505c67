//! 게시글 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::user_response::rfc3339;
use crate::domain::entities::posts::{Comment, Like, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub user_id: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            user_id: like.user.to_hex(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            user_id: comment.user.to_hex(),
            text: comment.text,
            name: comment.name,
            avatar_url: comment.avatar,
            created_at: rfc3339(&comment.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            user_id: post.user.to_hex(),
            text: post.text,
            name: post.name,
            avatar_url: post.avatar,
            likes: post.likes.into_iter().map(LikeResponse::from).collect(),
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            created_at: rfc3339(&post.date),
        }
    }
}

/// 삭제 성공 응답 `{"success": true}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
