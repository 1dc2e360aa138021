use crate::app_state::AppState;
use crate::chat::ChatMessage;
use crate::inquiry::PipelineError;
use crate::sitemap;
use actix_web::{HttpRequest, HttpResponse, HttpServer, get, post, web};
use serde_json::json;
use std::io::Write;

#[get("/health")]
pub async fn health(_req: HttpRequest, _: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

#[post("/api/inquiries")]
pub async fn submit_inquiry(
    _req: HttpRequest,
    payload: web::Json<serde_json::Value>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    match app_state.pipeline.process(&payload).await {
        Ok(outcome) => {
            log::info!("Inquiry pipeline done; sinks delivered: {:?}", outcome.notified);
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Inquiry saved successfully.",
            }))
        }
        Err(PipelineError::Validation(violations)) => {
            HttpResponse::BadRequest().json(json!({ "error": violations }))
        }
        Err(PipelineError::Storage(e)) => {
            log::error!("Inquiry pipeline storage failure: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error during inquiry processing.",
            }))
        }
    }
}

#[post("/api/chat")]
pub async fn chat(
    _req: HttpRequest,
    payload: web::Json<serde_json::Value>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let Some(messages) = payload.get("messages").and_then(|m| m.as_array()) else {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid messages array." }));
    };
    let transcript = ChatMessage::from_values(messages);
    let reply = app_state.assistant.reply(&transcript).await;
    HttpResponse::Ok().json(json!({ "reply": reply }))
}

#[get("/api/debug")]
pub async fn debug(_req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    let gemini = &app_state.config.gemini;
    HttpResponse::Ok().json(json!({
        "hasGeminiKey": gemini.api_key.is_some(),
        "keyLength": gemini.key_length(),
        "environment": app_state.config.environment,
    }))
}

#[get("/sitemap.xml")]
pub async fn sitemap_xml(_req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/xml")
        .body(sitemap::render(&app_state.config.public_url))
}

/// Register the full handler graph. Shared between `startup` and the
/// integration tests so both exercise the same routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(submit_inquiry)
        .service(chat)
        .service(debug)
        .service(sitemap_xml);
}

pub async fn startup(app_state: AppState) -> std::io::Result<()> {
    let host = app_state.config.host.clone();
    let port = app_state.config.port;
    let app_state = web::Data::new(app_state);

    println!("Starting server at {}:{}", host, port);

    // default level is info
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .init();

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await?;

    std::io::Result::Ok(())
}
