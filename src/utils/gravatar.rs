//! Gravatar 프로필 이미지 URL 생성

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// 이메일에 대한 Gravatar URL을 생성합니다.
///
/// 이메일은 앞뒤 공백 제거 후 소문자로 정규화하여 SHA-256으로 해시합니다.
/// 크기 200px, 등급 `pg`, 이미지가 없으면 기본 실루엣(`mm`)을 사용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let url = avatar_url("Alice@Example.com ");
/// // https://www.gravatar.com/avatar/<sha256>?s=200&r=pg&d=mm
/// ```
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let hash = hex::encode(Sha256::digest(normalized.as_bytes()));

    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hash)
}
