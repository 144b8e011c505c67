//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 회원가입 시 생성되며 이후 변경되지 않습니다.
/// `password_hash`는 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// Gravatar 프로필 이미지 URL
    pub avatar: String,
    /// 가입 시간
    pub date: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password_hash,
            avatar,
            date: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
