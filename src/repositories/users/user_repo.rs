//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `email` 유니크 인덱스로 동시 가입 시에도 중복 방지
//! - **명시적 의존성**: 생성 시 [`Database`]를 전달받음

use async_trait::async_trait;
use log::warn;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::is_duplicate_key;
use crate::repositories::users::UserStore;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `email`(unique)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 유니크 인덱스 위반 (이메일 중복)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
///
/// let created = repo.create(User::new(name, email, hash, avatar)).await?;
/// let found = repo.find_by_email("alice@example.com").await?;
/// let by_id = repo.find_by_id(&created.id_string()).await?;
/// ```
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** (`email_unique`)
    ///    - 필드: `email` (오름차순)
    ///    - 목적: 중복 이메일 방지 및 로그인 조회 최적화
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 데이터가 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 사전 조회를 통과한 동시 가입 요청은 유니크 인덱스에서 걸러지며,
    /// 이 경우에도 같은 `ConflictError`를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => {
                warn!("⚠️ 이메일 중복 저장 시도 차단: {}", user.email);
                Err(AppError::conflict("email", "Email already exists"))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }
}
