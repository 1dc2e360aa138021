use std::sync::Arc;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// How the mock Gemini endpoint answers.
#[derive(Clone, Debug)]
pub enum GeminiMode {
    Reply(String),
    RateLimited,
    AuthError,
}

/// Configuration for mock upstream behavior
#[derive(Clone, Debug)]
pub struct MockUpstreamConfig {
    pub gemini_mode: GeminiMode,
    pub sheets_fail: bool,
    pub email_fail: bool,
}

impl Default for MockUpstreamConfig {
    fn default() -> Self {
        Self {
            gemini_mode: GeminiMode::Reply("Mock completion".to_string()),
            sheets_fail: false,
            email_fail: false,
        }
    }
}

/// One request the mock saw, with the credential header it carried.
#[derive(Clone, Debug)]
pub struct LoggedRequest {
    pub route: &'static str,
    pub body: Value,
    pub auth: Option<String>,
}

pub struct MockUpstreamState {
    config: MockUpstreamConfig,
    requests: Mutex<Vec<LoggedRequest>>,
}

impl MockUpstreamState {
    fn log(&self, route: &'static str, body: Value, auth: Option<String>) {
        self.requests.lock().push(LoggedRequest { route, body, auth });
    }
}

/// In-process stand-in for the external services: Gemini generateContent,
/// the OAuth token endpoint, the Sheets values:append call, and the Resend
/// email API. Binds an ephemeral port; stop it explicitly at test end.
pub struct MockUpstream {
    pub base_url: String,
    state: Arc<MockUpstreamState>,
    handle: actix_web::dev::ServerHandle,
}

impl MockUpstream {
    pub async fn start(config: MockUpstreamConfig) -> std::io::Result<Self> {
        let state = Arc::new(MockUpstreamState {
            config,
            requests: Mutex::new(Vec::new()),
        });
        let data = web::Data::from(state.clone());

        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/v1beta/models/{model_call}", web::post().to(generate_content))
                .route("/token", web::post().to(oauth_token))
                .route(
                    "/v4/spreadsheets/{sheet_id}/values/{range_call}",
                    web::post().to(sheets_append),
                )
                .route("/emails", web::post().to(send_email))
        })
        .listen(listener)?
        .workers(1)
        .disable_signals()
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
            handle,
        })
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }

    pub fn requests(&self) -> Vec<LoggedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn hits(&self, route: &str) -> usize {
        self.state
            .requests
            .lock()
            .iter()
            .filter(|r| r.route == route)
            .count()
    }
}

async fn generate_content(
    req: HttpRequest,
    body: web::Json<Value>,
    state: web::Data<MockUpstreamState>,
) -> HttpResponse {
    let auth = header_value(&req, "x-goog-api-key");
    state.log("generate", body.into_inner(), auth);

    match &state.config.gemini_mode {
        GeminiMode::Reply(text) => HttpResponse::Ok().json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP",
            }]
        })),
        GeminiMode::RateLimited => HttpResponse::TooManyRequests().json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED",
            }
        })),
        GeminiMode::AuthError => HttpResponse::BadRequest().json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
            }
        })),
    }
}

async fn oauth_token(state: web::Data<MockUpstreamState>) -> HttpResponse {
    state.log("token", Value::Null, None);
    HttpResponse::Ok().json(json!({
        "access_token": "mock-access-token",
        "token_type": "Bearer",
        "expires_in": 3599,
    }))
}

async fn sheets_append(
    req: HttpRequest,
    body: web::Json<Value>,
    state: web::Data<MockUpstreamState>,
) -> HttpResponse {
    let auth = header_value(&req, "authorization");
    state.log("append", body.into_inner(), auth);

    if state.config.sheets_fail {
        return HttpResponse::InternalServerError().json(json!({
            "error": { "code": 500, "message": "Backend error", "status": "INTERNAL" }
        }));
    }
    HttpResponse::Ok().json(json!({ "updates": { "updatedRows": 1 } }))
}

async fn send_email(
    req: HttpRequest,
    body: web::Json<Value>,
    state: web::Data<MockUpstreamState>,
) -> HttpResponse {
    let auth = header_value(&req, "authorization");
    state.log("email", body.into_inner(), auth);

    if state.config.email_fail {
        return HttpResponse::InternalServerError().json(json!({
            "name": "internal_server_error",
            "message": "Something went wrong",
        }));
    }
    HttpResponse::Ok().json(json!({ "id": "mock-email-id" }))
}

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
