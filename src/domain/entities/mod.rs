//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 영속 엔티티들을 정의합니다.
//!
//! - [`users`] - `users` 컬렉션
//! - [`posts`] - `posts` 컬렉션 (좋아요, 댓글 포함)

pub mod users;
pub mod posts;

pub use users::User;
pub use posts::{Comment, Like, Post};
