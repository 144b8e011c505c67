//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 그 변경 규칙,
//! HTTP 경계의 DTO, 요청 범위 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 User, Post (좋아요/댓글 규칙 포함)
//! ├── DTOs          - 엔드포인트별 Request/Response 및 입력 검증
//! └── Models        - Principal, TokenClaims (영속화되지 않음)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 게시글의 좋아요/댓글 규칙은 [`Post`] 메서드로 구현되어 있으며
//! 저장소 없이 단독으로 테스트할 수 있습니다.
//!
//! ```rust,ignore
//! let mut post = post_store.find_by_id(id).await?.ok_or_else(not_found)?;
//! post.add_like(user_id)?;          // 이미 좋아요한 경우 ConflictError
//! post_store.save(&post).await?;    // 문서 전체 저장
//! ```
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 응답 DTO는 ObjectId를 16진수 문자열로, 날짜를 RFC 3339 문자열로 변환하며
//! 비밀번호 해시를 절대 포함하지 않습니다.
//!
//! ### [`models`] - 요청 범위 모델
//!
//! 인증 미들웨어가 생성하는 [`Principal`]과 JWT 클레임입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Comment, Like, Post, User};
pub use dto::{
    CommentResponse, CurrentUserResponse, DeleteResponse, LikeResponse, LoginRequest,
    LoginResponse, PostResponse, RegisterRequest, TextRequest, UserResponse, ValidateInput,
    ValidationResult,
};
pub use models::{Principal, TokenClaims};
