//! HTTP surface for the chat widget.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::backend::{QueryBackend, QueryClient};
use crate::config::AppConfig;
use crate::ui::{assets::WIDGET_JS, render_page, render_widget};
use crate::widget::{Message, WidgetHandle, WidgetStore};

/// Upper bound on how often the idle sweeper runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Live widget instances.
    pub widgets: WidgetStore,
    /// Where queries are sent.
    pub backend: Arc<dyn QueryBackend>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>, backend: Arc<dyn QueryBackend>) -> Self {
        Self {
            widgets: WidgetStore::new(config.widget.sample_prompts.clone()),
            backend,
            config,
        }
    }

    fn widget(&self, id: &str) -> Result<WidgetHandle, StatusCode> {
        self.widgets.get(id).ok_or(StatusCode::NOT_FOUND)
    }

    fn fragment(&self, widget: &WidgetHandle) -> Html<String> {
        Html(render_widget(widget, &self.config.widget))
    }
}

/// Build the router with all widget routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        // Static assets
        .route("/static/widget.js", get(widget_js_handler))
        // Widget instances
        .route("/widget", post(create_widget))
        .route("/widget/{id}", get(get_widget).delete(delete_widget))
        .route("/widget/{id}/submit", post(submit_query))
        .route("/widget/{id}/settled", get(wait_settled))
        .route("/widget/{id}/samples/{index}", post(select_sample))
        .route("/widget/{id}/messages", get(get_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically drop widgets idle longer than the configured timeout.
pub fn spawn_idle_sweeper(widgets: WidgetStore, timeout: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let period = timeout.clamp(Duration::from_secs(1), SWEEP_INTERVAL);
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = widgets.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                info!(
                    name: "widget.sweep.removed",
                    removed,
                    remaining = widgets.len(),
                    "Expired idle widgets"
                );
            }
        }
    })
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> crate::error::Result<()> {
    let backend = QueryClient::new(&config.backend)?;
    info!(
        name: "backend.config.loaded",
        url = %backend.url(),
        "Query backend configured"
    );

    let state = AppState::new(Arc::clone(&config), Arc::new(backend));
    let _sweeper = spawn_idle_sweeper(state.widgets.clone(), config.widget.idle_timeout());
    let app = router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Index page handler. Every page load mounts a fresh widget.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let widget = state.widgets.create();
    debug!(name: "widget.created", widget_id = %widget.id(), "Widget mounted by page load");
    Html(render_page(&widget, &state.config.widget))
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn widget_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        WIDGET_JS,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /widget - Create a widget and return its fragment.
async fn create_widget(State(state): State<AppState>) -> Html<String> {
    let widget = state.widgets.create();
    debug!(name: "widget.created", widget_id = %widget.id(), "Widget created");
    state.fragment(&widget)
}

/// GET /widget/:id - Render the widget fragment.
async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let widget = state.widget(&id)?;
    Ok(state.fragment(&widget))
}

/// DELETE /widget/:id - Tear the widget down.
async fn delete_widget(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    match state.widgets.remove(&id) {
        Some(widget) => {
            info!(
                name: "widget.removed",
                widget_id = %id,
                age_secs = widget.age().as_secs(),
                in_flight = widget.is_in_flight(),
                "Widget torn down"
            );
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// Form body of the input area.
#[derive(Debug, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    query: String,
}

/// POST /widget/:id/submit - Start a query.
///
/// The user message and busy indicator render immediately; the backend
/// call runs in the background and the indicator polls `/settled`.
async fn submit_query(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SubmitForm>,
) -> Result<Response, StatusCode> {
    let widget = state.widget(&id)?;

    let Some(pending) = widget.begin_submit(&form.query) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let backend = Arc::clone(&state.backend);
    tokio::spawn(async move {
        pending.run(backend.as_ref()).await;
    });

    Ok(state.fragment(&widget).into_response())
}

/// GET /widget/:id/settled - Wait for the in-flight query, then render.
async fn wait_settled(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let widget = state.widget(&id)?;
    widget.wait_idle().await;
    Ok(state.fragment(&widget))
}

/// POST /widget/:id/samples/:index - Copy a sample prompt into the input.
async fn select_sample(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Html<String>, StatusCode> {
    let widget = state.widget(&id)?;
    if !widget.select_sample(index) {
        debug!(
            name: "widget.sample.ignored",
            widget_id = %id,
            index,
            "Sample selection ignored"
        );
    }
    Ok(state.fragment(&widget))
}

/// GET /widget/:id/messages - The conversation as JSON.
async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    let widget = state.widget(&id)?;
    Ok(Json(widget.messages()))
}
