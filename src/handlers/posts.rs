//! # Post HTTP Handlers
//!
//! 게시글, 좋아요, 댓글 엔드포인트입니다.
//! 조회를 제외한 모든 엔드포인트는 인증이 필요합니다.
//!
//! | 메서드 | 경로 | 인증 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/api/posts` | - | 게시글 목록 (최신순) |
//! | `GET` | `/api/posts/{id}` | - | 게시글 |
//! | `POST` | `/api/posts` | 필수 | 생성된 게시글 |
//! | `DELETE` | `/api/posts/{id}` | 필수 | `{"success": true}` |
//! | `POST` | `/api/posts/like/{id}` | 필수 | 변경된 게시글 |
//! | `POST` | `/api/posts/unlike/{id}` | 필수 | 변경된 게시글 |
//! | `POST` | `/api/posts/comment/{id}` | 필수 | 변경된 게시글 |
//! | `DELETE` | `/api/posts/comment/{id}/{comment_id}` | 필수 | 변경된 게시글 |

use actix_web::{delete, get, post, web, HttpResponse};

use crate::domain::dto::posts::TextRequest;
use crate::domain::models::Principal;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::posts::PostService;

#[get("")]
pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, AppError> {
    let posts = post_service.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{id}")]
pub async fn get_post(
    post_service: web::Data<PostService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.get(&id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create_post(
    post_service: web::Data<PostService>,
    principal: Principal,
    payload: web::Json<TextRequest>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.create(&principal, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// 게시글 삭제 (작성자만 가능)
#[delete("/{id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_post(
    post_service: web::Data<PostService>,
    principal: Principal,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = post_service.delete(&principal, &id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/like/{id}", wrap = "AuthMiddleware::required()")]
pub async fn like_post(
    post_service: web::Data<PostService>,
    principal: Principal,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.like(&principal, &id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/unlike/{id}", wrap = "AuthMiddleware::required()")]
pub async fn unlike_post(
    post_service: web::Data<PostService>,
    principal: Principal,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.unlike(&principal, &id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[post("/comment/{id}", wrap = "AuthMiddleware::required()")]
pub async fn add_comment(
    post_service: web::Data<PostService>,
    principal: Principal,
    id: web::Path<String>,
    payload: web::Json<TextRequest>,
) -> Result<HttpResponse, AppError> {
    let post = post_service
        .add_comment(&principal, &id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// 댓글 삭제
///
/// 댓글 작성자 확인 없이 ID로 제거합니다.
#[delete("/comment/{id}/{comment_id}", wrap = "AuthMiddleware::required()")]
pub async fn remove_comment(
    post_service: web::Data<PostService>,
    principal: Principal,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, comment_id) = path.into_inner();
    let post = post_service.remove_comment(&principal, &id, &comment_id).await?;
    Ok(HttpResponse::Ok().json(post))
}
