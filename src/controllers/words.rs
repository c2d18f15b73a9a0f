use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures_util::StreamExt;
use serde::Serialize;

use super::session_user;
use crate::AppState;
use crate::db::Database;
use crate::parser::parse_word;

#[derive(Serialize)]
pub struct UploadResponse {
    processed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/words", web::get().to(list_words));
    cfg.route("/upload", web::post().to(upload));
}

async fn list_words(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = session_user(&state, &req) {
        return resp;
    }

    match state.db.list_words() {
        Ok(words) => HttpResponse::Ok().json(words),
        Err(e) => {
            log::error!("Failed to list words: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            }))
        }
    }
}

/// One file part drained from the upload form.
struct UploadedFile {
    name: String,
    data: Vec<u8>,
}

async fn upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> impl Responder {
    let user = match session_user(&state, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    if !user.is_admin() {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Admin access required"
        }));
    }

    let mut files: Vec<UploadedFile> = Vec::new();
    let mut read_errors: Vec<String> = Vec::new();
    let mut provided = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                log::warn!("Malformed multipart field: {}", e);
                break;
            }
        };
        if field.name() != "files" {
            continue;
        }
        let filename = match field.content_disposition().get_filename() {
            Some(name) => name.to_string(),
            None => continue,
        };
        provided += 1;

        let mut data = Vec::new();
        let mut failed = false;
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => {
                    // Only .md files count toward the error report
                    if filename.ends_with(".md") {
                        read_errors.push(format!("Error processing {}: {}", filename, e));
                    }
                    failed = true;
                    break;
                }
            }
        }
        if !failed {
            files.push(UploadedFile { name: filename, data });
        }
    }

    if provided == 0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No files provided"
        }));
    }

    match replace_catalog(&state.db, &files) {
        Ok((processed, mut errors)) => {
            errors.extend(read_errors);
            HttpResponse::Ok().json(UploadResponse {
                processed,
                errors: if errors.is_empty() { None } else { Some(errors) },
            })
        }
        Err(e) => {
            log::error!("Failed to rebuild word catalog: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            }))
        }
    }
}

/// Full-replace bulk import: drop the whole catalog, then parse and insert
/// each `.md` file, collecting per-file diagnostics instead of aborting.
/// Not transactional across files; a failure mid-loop leaves a partial
/// catalog.
fn replace_catalog(
    db: &Database,
    files: &[UploadedFile],
) -> rusqlite::Result<(usize, Vec<String>)> {
    db.clear_words()?;

    let mut processed = 0;
    let mut errors = Vec::new();

    for file in files {
        if !file.name.ends_with(".md") {
            continue;
        }

        let content = match std::str::from_utf8(&file.data) {
            Ok(content) => content,
            Err(e) => {
                errors.push(format!("Error processing {}: {}", file.name, e));
                continue;
            }
        };

        match parse_word(content, &file.name) {
            Ok(word) => match db.insert_word(&word) {
                Ok(()) => processed += 1,
                Err(e) => errors.push(format!("Error processing {}: {}", file.name, e)),
            },
            Err(failure) => errors.push(failure.to_string()),
        }
    }

    Ok((processed, errors))
}
