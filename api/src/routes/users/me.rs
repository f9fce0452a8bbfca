//! Handler for GET /users/me

use actix_web::HttpResponse;

use crate::dto::user::CurrentUserResponse;
use crate::middleware::AuthContext;

/// Return the id of the authenticated user.
///
/// The extractor rejects with 401 if no identity is present; that path is
/// unreachable while the bearer gate fronts this route.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(CurrentUserResponse {
        user_id: auth.user_id,
    })
}
