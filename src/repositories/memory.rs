//! 인메모리 저장소 구현
//!
//! `DATABASE_BACKEND=memory`로 MongoDB 없이 서버를 띄우거나 테스트에서 사용합니다.
//! 락은 단일 조회/저장 동안만 유지되므로 MongoDB 구현과 같은
//! "마지막 저장이 이김" 동시성 특성을 가집니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{Post, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::{PostStore, UserStore};

fn read<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::InternalError("저장소 락이 오염되었습니다".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::InternalError("저장소 락이 오염되었습니다".to_string()))
}

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        read(&self.users).map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(read(&self.users)?
            .iter()
            .find(|user| user.id == object_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = write(&self.users)?;

        // 유니크 인덱스와 동일한 제약
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::conflict("email", "Email already exists"));
        }

        users.push(user.clone());
        Ok(user)
    }
}

/// 인메모리 게시글 저장소
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let mut posts = read(&self.posts)?.clone();
        // 같은 밀리초에 작성된 게시글은 ObjectId 역순
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(read(&self.posts)?
            .iter()
            .find(|post| post.id == object_id)
            .cloned())
    }

    async fn save(&self, post: &Post) -> AppResult<()> {
        let mut posts = write(&self.posts)?;

        match posts.iter_mut().find(|existing| existing.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }

        Ok(())
    }

    async fn remove(&self, id: &ObjectId) -> AppResult<bool> {
        let mut posts = write(&self.posts)?;
        let before = posts.len();
        posts.retain(|post| &post.id != id);

        Ok(posts.len() < before)
    }
}
