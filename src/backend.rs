use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, 65_535);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ServeRuntimeConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServeRuntimeConfig {
    fn from_env() -> Self {
        let port = parse_env_u16_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: ServeRuntimeConfig,
    started_at: Instant,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    uptime_seconds: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServeRuntimeConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        config: config.clone(),
        started_at: Instant::now(),
    };

    let index_path = config.static_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": config.port,
            "static_dir": config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let payload = HealthPayload {
        ok: true,
        uptime_seconds: state.started_at.elapsed().as_secs(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control("no-store"));
    (StatusCode::OK, headers, Json(payload))
}

async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    log_event(
        &state.config,
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;

    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": response.status().as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u16_with_bounds(name: &str, default: u16, bounds: (u16, u16)) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServeRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn resolve_request_id_prefers_header_value() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-upstream-7"));

        assert_eq!(resolve_request_id(&headers), "req-upstream-7");
    }

    #[test]
    fn resolve_request_id_ignores_blank_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let resolved = resolve_request_id(&headers);
        assert!(resolved.starts_with("req-"));
        assert_ne!(resolved.trim(), "");
    }

    #[test]
    fn generated_request_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[test]
    fn cache_control_falls_back_on_invalid_value() {
        assert_eq!(
            cache_control("bad\nvalue"),
            HeaderValue::from_static("no-store")
        );
        assert_eq!(cache_control("no-store"), HeaderValue::from_static("no-store"));
    }

    #[test]
    fn out_of_bounds_port_falls_back_to_default() {
        std::env::set_var("YA_PORTFOLIO_TEST_PORT_ZERO", "0");
        assert_eq!(
            parse_env_u16_with_bounds("YA_PORTFOLIO_TEST_PORT_ZERO", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        std::env::remove_var("YA_PORTFOLIO_TEST_PORT_ZERO");
    }

    #[test]
    fn in_bounds_port_is_accepted() {
        std::env::set_var("YA_PORTFOLIO_TEST_PORT_OK", " 3000 ");
        assert_eq!(
            parse_env_u16_with_bounds("YA_PORTFOLIO_TEST_PORT_OK", DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
        std::env::remove_var("YA_PORTFOLIO_TEST_PORT_OK");
    }

    #[test]
    fn unknown_log_level_falls_back_to_default() {
        std::env::set_var("YA_PORTFOLIO_TEST_LOG_LEVEL", "verbose");
        assert_eq!(
            parse_log_level("YA_PORTFOLIO_TEST_LOG_LEVEL", DEFAULT_LOG_LEVEL),
            DEFAULT_LOG_LEVEL
        );
        std::env::remove_var("YA_PORTFOLIO_TEST_LOG_LEVEL");
    }

    #[test]
    fn health_payload_serializes_camel_case() {
        let value = serde_json::to_value(HealthPayload {
            ok: true,
            uptime_seconds: 7,
        })
        .expect("serializable payload");

        assert_eq!(value["ok"], true);
        assert_eq!(value["uptimeSeconds"], 7);
    }
}
