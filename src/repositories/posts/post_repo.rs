//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션의 MongoDB 데이터 액세스 계층입니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::posts::Post;
use crate::errors::{AppError, AppResult};
use crate::repositories::posts::PostStore;

/// 게시글 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `posts`
/// - **인덱스**: `date`(내림차순)
///
/// 좋아요/댓글 변경은 `save`로 문서 전체를 교체합니다.
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    pub const COLLECTION: &'static str = "posts";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Post>(Self::COLLECTION),
        }
    }

    /// 목록 정렬용 작성일, ID 복합 인덱스 생성 (`date_desc`)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("date_desc".to_string())
                .build())
            .build();

        self.collection
            .create_index(date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Post>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, post: &Post) -> AppResult<()> {
        self.collection
            .replace_one(doc! { "_id": post.id }, post)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
