//! 게시글 관련 DTO 모듈

pub mod request;
pub mod response;

pub use request::TextRequest;
pub use response::{CommentResponse, DeleteResponse, LikeResponse, PostResponse};
