use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// 검증된 토큰에서 추출한 요청 주체
///
/// 인증 미들웨어가 Request Extensions에 저장하며 요청이 끝나면 사라집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// 사용자 ID (ObjectId 16진수 문자열)
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Principal {
    /// 사용자 ID를 ObjectId로 변환
    pub fn object_id(&self) -> AppResult<ObjectId> {
        ObjectId::parse_str(&self.id)
            .map_err(|_| AppError::AuthenticationError("Invalid token".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(principal.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication required".to_string(),
            ))),
        }
    }
}
