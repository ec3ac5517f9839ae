//! Aasha Web Server
//!
//! Axum-based REST API for the Aasha wellness companion. State lives in
//! memory behind a RwLock; the insight, suggestion, and context endpoints
//! recompute from the current histories on every request.
//!
//! Hardening kept deliberately small for a single-user local app:
//! - Restrictive CORS policy
//! - Security headers (CSP, nosniff, frame denial)
//! - Sanitized error responses with full internals logged server-side

use std::sync::{Arc, RwLock};

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use aasha_core::ai::{CompanionBackend, CompanionClient};
use aasha_core::HistoryStore;

mod handlers;

#[cfg(test)]
mod tests;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// All user history; RwLock because reads vastly outnumber writes
    pub store: RwLock<HistoryStore>,
    /// Optional companion backend for /api/chat
    pub companion: Option<CompanionClient>,
}

/// Create the application router
pub fn create_router(store: HistoryStore, config: ServerConfig) -> Router {
    let companion = CompanionClient::from_env();
    match companion {
        Some(ref client) => {
            info!(
                "Companion backend configured: {} (model: {})",
                client.host(),
                client.model()
            );
        }
        None => {
            info!("ℹ️  Companion backend not configured (set GEMINI_API_KEY to enable chat)");
        }
    }

    create_router_with_companion(store, config, companion)
}

/// Create the router with an explicit companion backend (for testing)
pub fn create_router_with_companion(
    store: HistoryStore,
    config: ServerConfig,
    companion: Option<CompanionClient>,
) -> Router {
    let state = Arc::new(AppState {
        store: RwLock::new(store),
        companion,
    });

    let api_routes = Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Moods
        .route(
            "/moods",
            get(handlers::list_moods).post(handlers::log_mood),
        )
        // Journal
        .route(
            "/journal",
            get(handlers::list_journal).post(handlers::add_journal_entry),
        )
        // Derived views
        .route("/insights", get(handlers::get_insights))
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/stats", get(handlers::get_stats))
        .route("/context", get(handlers::get_context_summary))
        // Profile
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        // Reminders
        .route(
            "/reminders",
            get(handlers::list_reminders).post(handlers::add_reminder),
        )
        .route("/reminders/:id/toggle", post(handlers::toggle_reminder))
        // Content
        .route(
            "/stories",
            get(handlers::list_stories).post(handlers::add_story),
        )
        .route("/pathways", get(handlers::list_pathways))
        .route("/activities", get(handlers::list_activities))
        // Chat
        .route("/chat", post(handlers::chat));

    // CORS configuration
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: same-origin everything; this API serves JSON only
    let csp_value = HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'");

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

/// Start the server
pub async fn serve(store: HistoryStore, host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(store, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    store: HistoryStore,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    check_companion_connection().await;

    let app = create_router(store, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Check and log companion backend connection status
async fn check_companion_connection() {
    match CompanionClient::from_env() {
        Some(client) => {
            if client.health_check().await {
                info!(
                    "✅ Companion backend connected: {} (model: {})",
                    client.host(),
                    client.model()
                );
            } else {
                tracing::warn!(
                    "⚠️  Companion backend configured but not responding: {} (model: {})",
                    client.host(),
                    client.model()
                );
            }
        }
        None => {
            info!("ℹ️  Companion backend not configured (set GEMINI_API_KEY to enable chat)");
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn unavailable(msg: &str) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
