//! Post Aggregate
//!
//! 게시글 문서와 좋아요/댓글 변경 규칙을 구현합니다.
//! 모든 규칙은 메모리 상의 문서에만 적용되며 저장은 서비스 계층이
//! 문서 전체를 다시 쓰는 방식으로 수행합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// 좋아요 항목. 게시글당 사용자별 최대 1개
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user: ObjectId,
}

/// 게시글에 포함된 댓글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 작성자 ID
    pub user: ObjectId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime,
}

/// 게시글 엔티티
///
/// `user`는 작성자이며 생성 이후 변경되지 않습니다.
/// `likes`와 `comments`는 최신 항목이 앞에 위치합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 작성자 ID
    pub user: ObjectId,
    pub text: String,
    /// 작성 시점의 작성자 이름
    pub name: String,
    /// 작성 시점의 작성자 아바타
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime,
}

impl Post {
    /// 새 게시글 생성
    pub fn new(user: ObjectId, text: String, name: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: DateTime::now(),
        }
    }

    /// 작성자 여부 확인
    pub fn is_owned_by(&self, user: &ObjectId) -> bool {
        &self.user == user
    }

    pub fn is_liked_by(&self, user: &ObjectId) -> bool {
        self.likes.iter().any(|like| &like.user == user)
    }

    /// 좋아요 추가
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` (`alreadyliked`) - 이미 좋아요한 사용자
    pub fn add_like(&mut self, user: ObjectId) -> AppResult<()> {
        if self.is_liked_by(&user) {
            return Err(AppError::conflict("alreadyliked", "User already liked this post"));
        }

        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// 좋아요 취소
    ///
    /// 사용자 ID가 일치하는 항목을 제거합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` (`notliked`) - 좋아요하지 않은 사용자
    pub fn remove_like(&mut self, user: &ObjectId) -> AppResult<()> {
        let index = self
            .likes
            .iter()
            .position(|like| &like.user == user)
            .ok_or_else(|| AppError::conflict("notliked", "You have not yet liked this post"))?;

        self.likes.remove(index);
        Ok(())
    }

    /// 댓글 추가 (맨 앞에 삽입)
    pub fn add_comment(&mut self, user: ObjectId, text: String, name: String, avatar: String) -> &Comment {
        self.comments.insert(
            0,
            Comment {
                id: ObjectId::new(),
                user,
                text,
                name,
                avatar,
                date: DateTime::now(),
            },
        );
        &self.comments[0]
    }

    /// 댓글 ID가 일치하는 댓글을 제거합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` (`commentnotexists`) - 해당 ID의 댓글 없음 (잘못된 ID 형식 포함)
    pub fn remove_comment(&mut self, comment_id: &str) -> AppResult<Comment> {
        let not_found = || AppError::not_found("commentnotexists", "Comment does not exist");

        let comment_id = ObjectId::parse_str(comment_id).map_err(|_| not_found())?;
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(not_found)?;

        Ok(self.comments.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_by(owner: ObjectId) -> Post {
        Post::new(owner, "Hello world".to_string(), "Alice".to_string(), "avatar".to_string())
    }

    #[test]
    fn test_ownership() {
        let owner = ObjectId::new();
        let post = post_by(owner);

        assert!(post.is_owned_by(&owner));
        assert!(!post.is_owned_by(&ObjectId::new()));
    }

    #[test]
    fn test_like_twice_is_rejected() {
        let user = ObjectId::new();
        let mut post = post_by(ObjectId::new());

        post.add_like(user).unwrap();
        let second = post.add_like(user);

        assert!(matches!(
            second,
            Err(AppError::ConflictError { ref field, .. }) if field == "alreadyliked"
        ));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn test_likes_are_prepended() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let mut post = post_by(ObjectId::new());

        post.add_like(first).unwrap();
        post.add_like(second).unwrap();

        assert_eq!(post.likes[0].user, second);
        assert_eq!(post.likes[1].user, first);
    }

    #[test]
    fn test_unlike_removes_matching_user_only() {
        let alice = ObjectId::new();
        let bob = ObjectId::new();
        let mut post = post_by(ObjectId::new());
        post.add_like(alice).unwrap();
        post.add_like(bob).unwrap();

        post.remove_like(&alice).unwrap();

        assert_eq!(post.likes, vec![Like { user: bob }]);
    }

    #[test]
    fn test_unlike_without_like() {
        let mut post = post_by(ObjectId::new());

        let result = post.remove_like(&ObjectId::new());

        assert!(matches!(
            result,
            Err(AppError::ConflictError { ref field, .. }) if field == "notliked"
        ));
    }

    #[test]
    fn test_comments_are_prepended_with_fresh_ids() {
        let mut post = post_by(ObjectId::new());
        let user = ObjectId::new();

        let first_id = post
            .add_comment(user, "first".to_string(), "Bob".to_string(), "a".to_string())
            .id;
        let second_id = post
            .add_comment(user, "second".to_string(), "Bob".to_string(), "a".to_string())
            .id;

        assert_ne!(first_id, second_id);
        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn test_remove_comment_by_id() {
        let mut post = post_by(ObjectId::new());
        let user = ObjectId::new();
        let keep = post
            .add_comment(user, "keep".to_string(), "Bob".to_string(), "a".to_string())
            .id;
        let drop = post
            .add_comment(user, "drop".to_string(), "Bob".to_string(), "a".to_string())
            .id;

        let removed = post.remove_comment(&drop.to_hex()).unwrap();

        assert_eq!(removed.text, "drop");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].id, keep);
    }

    #[test]
    fn test_remove_missing_comment() {
        let mut post = post_by(ObjectId::new());

        for comment_id in [ObjectId::new().to_hex(), "not-an-id".to_string()] {
            let result = post.remove_comment(&comment_id);

            assert!(matches!(
                result,
                Err(AppError::NotFound { ref entity, .. }) if entity == "commentnotexists"
            ));
        }
    }
}
