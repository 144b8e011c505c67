//! JWT 인증 토큰 클레임
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::Principal;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `id`: 사용자 ID
/// - `name`: 사용자 이름
/// - `avatar`: 프로필 이미지 URL
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(principal: &Principal, iat: i64, exp: i64) -> Self {
        Self {
            id: principal.id.clone(),
            name: principal.name.clone(),
            avatar: principal.avatar.clone(),
            iat,
            exp,
        }
    }
}

impl From<TokenClaims> for Principal {
    fn from(claims: TokenClaims) -> Self {
        Principal {
            id: claims.id,
            name: claims.name,
            avatar: claims.avatar,
        }
    }
}
