//! 게시글 서비스 모듈
//!
//! 게시글 작성/조회/삭제와 좋아요, 댓글 변경을 담당합니다.
//! 모든 변경은 조회 → 메모리 상 변경 → 문서 전체 저장 순서로 수행됩니다.

pub mod post_service;

pub use post_service::PostService;
