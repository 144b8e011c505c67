//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 `main`에서 설정과 저장소를 전달받아 한 번 생성되며,
//! `web::Data`로 감싸 모든 워커가 공유합니다. 서비스는 가변 상태를 가지지 않습니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 현재 사용자 조회
//! - 게시글 작성/삭제, 좋아요, 댓글
//! - bcrypt 비밀번호 해싱, JWT 토큰 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::AppServices;
//!
//! let services = AppServices::new(&config, user_store, post_store);
//!
//! App::new().configure(|cfg| services.register(cfg))
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::repositories::{PostStore, UserStore};

pub mod users;
pub mod posts;
pub mod auth;

use auth::{PasswordService, TokenService};
use posts::PostService;
use users::UserService;

/// 앱 데이터로 등록되는 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub users: web::Data<UserService>,
    pub posts: web::Data<PostService>,
    pub tokens: web::Data<TokenService>,
}

impl AppServices {
    pub fn new(config: &AppConfig, user_store: Arc<dyn UserStore>, post_store: Arc<dyn PostStore>) -> Self {
        let tokens = Arc::new(TokenService::new(config.jwt.clone()));
        let passwords = PasswordService::new(&config.password);

        Self {
            users: web::Data::new(UserService::new(user_store, passwords, tokens.clone())),
            posts: web::Data::new(PostService::new(post_store)),
            tokens: web::Data::from(tokens),
        }
    }

    /// 서비스들을 앱 데이터로 등록합니다.
    ///
    /// 인증 미들웨어는 여기서 등록된 `web::Data<TokenService>`를 사용합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.posts.clone())
            .app_data(self.tokens.clone());
    }
}
