//! Bearer-token authentication middleware for protecting API endpoints.
//!
//! The gate is a pure per-request function of the Authorization header and
//! the token service: it extracts the bearer token, verifies it, and injects
//! the resolved user id into request extensions, or rejects with 401 and a
//! JSON `{"error": ...}` body. No state is retained between requests.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    http::StatusCode,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};
use uuid::Uuid;

use pl_core::services::token::TokenService;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID resolved from the bearer token
    pub user_id: Uuid,
}

/// Bearer-token authentication middleware factory
#[derive(Clone)]
pub struct BearerAuth {
    token_service: Arc<TokenService>,
}

impl BearerAuth {
    /// Creates a new bearer-token middleware over the given token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Bearer-token authentication middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let header = match req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
            {
                Some(value) => value.to_string(),
                None => return Ok(reject(req, "missing authorization header")),
            };

            let token = match header.strip_prefix("Bearer ") {
                Some(token) => token.to_string(),
                None => return Ok(reject(req, "invalid authorization format")),
            };

            let user_id = match token_service.verify(&token) {
                Ok(user_id) => user_id,
                Err(e) => {
                    log::debug!("bearer token rejected: {}", e);
                    return Ok(reject(req, "invalid token"));
                }
            };

            req.extensions_mut().insert(AuthContext { user_id });

            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

/// Short-circuit the request with a 401 JSON body
fn reject<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(serde_json::json!({ "error": message }))
        .map_into_right_body();
    req.into_response(response)
}

/// Error returned when a handler behind the gate finds no identity.
///
/// Unreachable when the gate is composed in front of the route; this is a
/// defensive check only.
#[derive(Debug)]
pub struct MissingAuthContext;

impl fmt::Display for MissingAuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to resolve user from request context")
    }
}

impl ResponseError for MissingAuthContext {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Extractor for the gate-resolved identity
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| MissingAuthContext.into());

        ready(result)
    }
}
