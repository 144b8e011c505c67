//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 요청 주체를 추출합니다.
//! 미들웨어 자체는 상태를 가지지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use serde_json::Value;

    use crate::config::JwtConfig;
    use crate::domain::models::Principal;
    use crate::services::auth::TokenService;

    fn token_service() -> TokenService {
        TokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 10,
        })
    }

    async fn whoami(principal: Principal) -> HttpResponse {
        HttpResponse::Ok().json(principal)
    }

    macro_rules! guarded_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(token_service()))
                    .service(
                        web::resource("/me")
                            .wrap(AuthMiddleware::required())
                            .route(web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = guarded_app!();
        let principal = Principal {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Alice".to_string(),
            avatar: "avatar".to_string(),
        };
        let jwt = token_service().issue(&principal).unwrap();

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", jwt)))
            .to_request();
        let body: Principal = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, principal);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = guarded_app!();

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["unauthorized"], "Authorization header is missing");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let app = guarded_app!();

        for header in ["Bearer not.a.jwt", "Basic dXNlcjpwYXNz"] {
            let req = test::TestRequest::get()
                .uri("/me")
                .insert_header(("Authorization", header))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_expired_token_is_unauthorized() {
        let app = guarded_app!();
        let principal = Principal {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Alice".to_string(),
            avatar: "avatar".to_string(),
        };
        // 10시간 만료 토큰을 11시간 전에 발급
        let jwt = token_service()
            .issue_at(&principal, chrono::Utc::now() - chrono::Duration::hours(11))
            .unwrap();

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", jwt)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "unauthorized": "Token has expired" }));
    }
}
