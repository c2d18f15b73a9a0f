pub mod auth;
pub mod health;
pub mod words;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::AppState;
use crate::models::User;

/// Resolve the session cookie to its user, for protected routes.
pub(crate) fn session_user(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<User, HttpResponse> {
    let token = match req.cookie("session") {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Unauthorized"
            })));
        }
    };

    match state.sessions.lookup(&token) {
        Some(user) => Ok(user),
        None => Err(HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Unauthorized"
        }))),
    }
}

/// Fallback service: answer stray OPTIONS with an empty 200 (preflights with
/// CORS headers never reach this far), everything else with a 404.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }

    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Route {} not found", req.path())
    }))
}
