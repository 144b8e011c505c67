//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 현재 사용자 조회의 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UserService                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌────────────────┐  ┌────────────────┐  ┌───────────────┐  │
//! │  │  Registration  │  │     Login      │  │    Current    │  │
//! │  │ • Input Valid  │  │ • Input Valid  │  │ • By ID       │  │
//! │  │ • Duplicate    │  │ • Password Ver │  │ • Entity→DTO  │  │
//! │  │ • Gravatar     │  │ • Token Issue  │  │               │  │
//! │  │ • Password Hash│  │                │  │               │  │
//! │  └────────────────┘  └────────────────┘  └───────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//!      dyn UserStore      PasswordService / TokenService
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost, 호출마다 새 솔트
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 포함되지 않음
//! - **로그 최소화**: 비밀번호, 해시, 토큰은 로그에 남기지 않음

use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{CurrentUserResponse, LoginResponse, UserResponse};
use crate::domain::dto::ValidateInput;
use crate::domain::entities::users::User;
use crate::domain::models::Principal;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;
use crate::services::auth::{PasswordService, TokenService};
use crate::utils::gravatar;
use crate::utils::string_utils::trim_string;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 인증 서비스는 생성 시 주입받습니다.
///
/// ```rust,ignore
/// let service = UserService::new(user_store, PasswordService::new(&config.password), tokens);
/// let created = service.register(request).await?;
/// ```
pub struct UserService {
    users: Arc<dyn UserStore>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, passwords: PasswordService, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// 새 사용자 등록
    ///
    /// # 처리 과정
    ///
    /// 1. 입력 검증 (실패 시 필드별 메시지)
    /// 2. 이메일 중복 확인
    /// 3. Gravatar 아바타 URL 생성
    /// 4. bcrypt 해싱 후 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` (`email`) - 이미 가입된 이메일
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let started = Instant::now();
        request.ensure_valid()?;

        let email = trim_string(&request.email);
        if self.users.find_by_email(&email).await?.is_some() {
            warn!("⚠️ 중복 이메일로 가입 시도: {}", email);
            return Err(AppError::conflict("email", "Email already exists"));
        }

        let avatar = gravatar::avatar_url(&email);
        let password_hash = self.passwords.hash(&request.password)?;

        let user = User::new(request.name, email, password_hash, avatar);
        let created = self.users.create(user).await?;

        info!(
            "✅ 사용자 등록 완료: {} ({}) in {:?}",
            created.email,
            created.id_string(),
            started.elapsed()
        );
        Ok(UserResponse::from(created))
    }

    /// 로그인 및 토큰 발급
    ///
    /// 이메일과 비밀번호는 앞뒤 공백을 제거한 뒤 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패, 비밀번호 불일치 (`password`)
    /// * `AppError::NotFound` (`email`) - 가입되지 않은 이메일
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.ensure_valid()?;
        let (email, password) = request.trimmed();

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("email", "User not found"))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            warn!("⚠️ 로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::validation("password", "Password incorrect"));
        }

        let principal = Principal {
            id: user.id_string(),
            name: user.name,
            avatar: user.avatar,
        };
        let jwt = self.tokens.issue(&principal)?;

        info!("🔐 로그인 성공: {} ({})", email, principal.id);
        Ok(LoginResponse::bearer(jwt))
    }

    /// 현재 요청 주체의 사용자 정보 조회
    ///
    /// 토큰 발급 이후 사용자가 사라진 경우 인증 실패로 처리합니다.
    pub async fn current(&self, principal: &Principal) -> AppResult<CurrentUserResponse> {
        self.users
            .find_by_id(&principal.id)
            .await?
            .map(CurrentUserResponse::from)
            .ok_or_else(|| AppError::AuthenticationError("User no longer exists".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::repositories::memory::InMemoryUserStore;

    struct Fixture {
        service: UserService,
        store: Arc<InMemoryUserStore>,
        tokens: Arc<TokenService>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryUserStore::new());
        let tokens = Arc::new(TokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 10,
        }));
        let service = UserService::new(
            store.clone(),
            PasswordService::new(&PasswordConfig { bcrypt_cost: 4 }),
            tokens.clone(),
        );

        Fixture {
            service,
            store,
            tokens,
        }
    }

    fn registration(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            password2: "secret1".to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_creates_user_with_gravatar() {
        let f = fixture();

        let created = f.service.register(registration("alice.w@example.com")).await.unwrap();

        assert_eq!(created.name, "Alice");
        assert_eq!(created.email, "alice.w@example.com");
        assert_eq!(created.avatar_url, gravatar::avatar_url("alice.w@example.com"));
        assert_eq!(f.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_stores_hash_not_plaintext() {
        let f = fixture();
        f.service.register(registration("alice.w@example.com")).await.unwrap();

        let stored = f.store.find_by_email("alice.w@example.com").await.unwrap().unwrap();

        assert_ne!(stored.password_hash, "secret1");
        assert!(bcrypt::verify("secret1", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let f = fixture();
        f.service.register(registration("alice.w@example.com")).await.unwrap();

        let result = f.service.register(registration("alice.w@example.com")).await;

        match result {
            Err(AppError::ConflictError { field, message }) => {
                assert_eq!(field, "email");
                assert_eq!(message, "Email already exists");
            }
            other => panic!("Expected conflict, got {:?}", other.map(|u| u.id)),
        }
        assert_eq!(f.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_registration_creates_nothing() {
        let f = fixture();
        let request = RegisterRequest {
            password2: "other".to_string(),
            ..registration("alice.w@example.com")
        };

        let result = f.service.register(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(f.store.is_empty());
    }

    #[actix_web::test]
    async fn test_login_issues_token_for_same_user() {
        let f = fixture();
        let created = f.service.register(registration("alice.w@example.com")).await.unwrap();

        let response = f
            .service
            .login(login("alice.w@example.com", "secret1"))
            .await
            .unwrap();

        assert!(response.success);
        let jwt = response.token.strip_prefix("Bearer ").unwrap();
        let principal = f.tokens.verify(jwt).unwrap();
        assert_eq!(principal.id, created.id);
        assert_eq!(principal.name, "Alice");
        assert_eq!(principal.avatar, created.avatar_url);
    }

    #[actix_web::test]
    async fn test_login_unknown_email() {
        let f = fixture();

        match f.service.login(login("nobody@example.com", "secret1")).await {
            Err(AppError::NotFound { entity, message }) => {
                assert_eq!(entity, "email");
                assert_eq!(message, "User not found");
            }
            other => panic!("Expected not found, got {:?}", other.map(|r| r.success)),
        }
    }

    #[actix_web::test]
    async fn test_login_wrong_password() {
        let f = fixture();
        f.service.register(registration("alice.w@example.com")).await.unwrap();

        match f.service.login(login("alice.w@example.com", "wrong-pass")).await {
            Err(AppError::ValidationError(errors)) => {
                assert_eq!(errors["password"], "Password incorrect");
            }
            other => panic!("Expected validation error, got {:?}", other.map(|r| r.success)),
        }
    }

    #[actix_web::test]
    async fn test_login_rejects_short_local_part() {
        let f = fixture();
        f.service.register(registration("alice@example.com")).await.unwrap();

        match f.service.login(login("alice@example.com", "secret1")).await {
            Err(AppError::ValidationError(errors)) => assert_eq!(
                errors["email"],
                "Email must contain 6 characters before the @ sign"
            ),
            other => panic!("Expected validation error, got {:?}", other.map(|r| r.success)),
        }
    }

    #[actix_web::test]
    async fn test_current_user() {
        let f = fixture();
        let created = f.service.register(registration("alice.w@example.com")).await.unwrap();
        let principal = Principal {
            id: created.id.clone(),
            name: created.name.clone(),
            avatar: created.avatar_url.clone(),
        };

        let current = f.service.current(&principal).await.unwrap();

        assert_eq!(
            current,
            CurrentUserResponse {
                id: created.id,
                name: "Alice".to_string(),
                email: "alice.w@example.com".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn test_current_user_vanished() {
        let f = fixture();
        let principal = Principal {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Ghost".to_string(),
            avatar: String::new(),
        };

        assert!(matches!(
            f.service.current(&principal).await,
            Err(AppError::AuthenticationError(_))
        ));
    }
}
