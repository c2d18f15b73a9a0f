use actix_web::{HttpResponse, Responder, web};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "AutoLearn JP API"
    }))
}
