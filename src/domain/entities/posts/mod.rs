//! 게시글 엔티티 모듈
//!
//! 게시글과 게시글에 포함된 좋아요, 댓글을 정의합니다.
//! 좋아요와 댓글은 독립적인 생명주기가 없으며 항상 게시글 문서 전체로 저장됩니다.

pub mod post;

pub use post::{Comment, Like, Post};
