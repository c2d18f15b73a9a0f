use actix_web::cookie::{Cookie, time::Duration as CookieDuration};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;

use crate::AppState;
use crate::auth::authenticate;

/// Max-age hint for the session cookie. Server-side sessions only die on
/// logout or process restart.
const SESSION_COOKIE_MAX_AGE_SECS: i64 = 86400;

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/check", web::get().to(check))
            .route("/logout", web::post().to(logout)),
    );
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build("session", token)
        .path("/")
        .http_only(true)
        .secure(false)
        .max_age(CookieDuration::seconds(SESSION_COOKIE_MAX_AGE_SECS))
        .finish()
}

async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    let user = match authenticate(&body.username, &body.password) {
        Some(user) => user,
        None => {
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid credentials"
            }));
        }
    };

    let token = state.sessions.create(user.clone());
    log::info!("User {} logged in with role {}", user.username, user.role.as_str());

    HttpResponse::Ok().cookie(session_cookie(token)).json(user)
}

async fn check(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = req
        .cookie("session")
        .and_then(|cookie| state.sessions.lookup(cookie.value()));

    match user {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Not authenticated"
        })),
    }
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(cookie) = req.cookie("session") {
        state.sessions.revoke(cookie.value());
    }

    let mut removal = Cookie::new("session", "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Ok().cookie(removal).json(serde_json::json!({
        "success": true
    }))
}
