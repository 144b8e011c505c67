use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// RFC 3339 문자열로 변환 (범위를 벗어난 값은 빈 문자열)
pub(crate) fn rfc3339(date: &DateTime) -> String {
    date.try_to_rfc3339_string().unwrap_or_default()
}

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            avatar,
            date,
            ..
        } = user;

        Self {
            id: id.to_hex(),
            name,
            email,
            avatar_url: avatar,
            created_at: rfc3339(&date),
        }
    }
}

/// 로그인 응답 DTO
///
/// `token`은 `"Bearer <jwt>"` 형태로 그대로 Authorization 헤더에 사용할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

impl LoginResponse {
    pub fn bearer(jwt: String) -> Self {
        Self {
            success: true,
            token: format!("Bearer {}", jwt),
        }
    }
}

/// 현재 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "https://www.gravatar.com/avatar/x".to_string(),
        );
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert_eq!(json["id"], user.id.to_hex());
        assert_eq!(json["avatar_url"], "https://www.gravatar.com/avatar/x");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$04$hash"));
    }

    #[test]
    fn test_login_response_prefixes_bearer() {
        let response = LoginResponse::bearer("abc.def.ghi".to_string());

        assert!(response.success);
        assert_eq!(response.token, "Bearer abc.def.ghi");
    }
}
