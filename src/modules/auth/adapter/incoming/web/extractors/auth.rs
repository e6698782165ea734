use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identity decoded from a valid bearer access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_admin: bool,
    pub is_verified: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = jwt_service.verify_token(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != "access" {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        user_id: UserId::from(claims.sub),
        is_admin: claims.is_admin,
        is_verified: claims.is_verified,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Authenticated caller whose token carries the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: UserId,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|user| {
            if !user.is_admin {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_REQUIRED",
                    "Administrator privileges required",
                )));
            }
            Ok(AdminUser {
                user_id: user.user_id,
            })
        });

        ready(result)
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use actix_web::{get, test, App, HttpResponse, Responder};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    #[get("/admin-only")]
    async fn admin_only(admin: AdminUser) -> impl Responder {
        HttpResponse::Ok().body(admin.user_id.to_string())
    }

    #[actix_web::test]
    async fn test_missing_header_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_garbage_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_resolves_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", bearer_for(7, false)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "7");
    }

    #[actix_web::test]
    async fn test_non_admin_rejected_from_admin_route() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(admin_only),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", bearer_for(7, false)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .insert_header(("Authorization", bearer_for(1, true)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
