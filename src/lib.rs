//! 소셜 서비스 백엔드
//!
//! 회원가입/로그인(JWT)과 게시글, 좋아요, 댓글을 제공하는 REST API 서버입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 현재 사용자 조회
//! - **JWT 인증**: HS256 Bearer 토큰 기반 상태 없는 인증 (10시간 만료)
//! - **게시글**: 작성, 조회, 작성자 삭제, 좋아요/취소, 댓글 작성/삭제
//! - **명시적 DI**: `AppConfig`와 저장소를 생성자로 전달
//! - **MongoDB**: 사용자/게시글 영구 저장 (로컬 실행용 인메모리 저장소 제공)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Auth Middleware │ ← Bearer 토큰 검증 (보호 라우트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / PostStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB, Memory │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::config::AppConfig;
//! use social_service_backend::services::AppServices;
//!
//! let config = AppConfig::from_env()?;
//! let services = AppServices::new(&config, user_store, post_store);
//!
//! let created = services.users.register(request).await?;
//! let login = services.users.login(credentials).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
