use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Json, Router,
};
use hanoi::ApiError;
use server_api::{
    form_view, list_moves, page_view, puzzle_state, render_view, DiskForm, MovesResponse,
    PuzzleView, RenderConfig, StepQuery, ViewerContext,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for ignored in &settings.ignored {
        warn!(%ignored, "ignoring configuration value");
    }

    let state = AppState {
        viewer: ViewerContext {
            default_disks: settings.default_disks,
            render: RenderConfig::default(),
        },
        max_body_bytes: settings.max_body_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr = settings.bind_addr()?;
    info!(%addr, default_disks = settings.default_disks.get(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = RequestBodyLimitLayer::new(state.max_body_bytes);
    Router::new()
        .route("/", get(index_page).post(solve_form))
        .route("/api/moves", get(api_moves))
        .route("/api/state", get(api_state))
        .route("/healthz", get(healthz))
        .layer(body_limit)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let view = page_view(&state.viewer, &StepQuery::from_pairs(pairs));
    log_view("page", &view);
    Html(render_view(&state.viewer, &view))
}

async fn solve_form(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let view = form_view(&state.viewer, &DiskForm::from_pairs(pairs));
    log_view("solve", &view);
    Html(render_view(&state.viewer, &view))
}

async fn api_moves(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MovesResponse>, (StatusCode, Json<ApiError>)> {
    let moves = list_moves(&state.viewer, &StepQuery::from_pairs(pairs)).map_err(bad_request)?;
    debug!(disks = moves.disks.get(), total_moves = moves.total_moves, "listed moves");
    Ok(Json(moves))
}

async fn api_state(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PuzzleView>, (StatusCode, Json<ApiError>)> {
    let view = puzzle_state(&state.viewer, &StepQuery::from_pairs(pairs)).map_err(bad_request)?;
    log_view("state", &view);
    Ok(Json(view))
}

fn bad_request(error: ApiError) -> (StatusCode, Json<ApiError>) {
    warn!(message = %error.message, "rejected api request");
    (StatusCode::BAD_REQUEST, Json(error))
}

fn log_view(route: &'static str, view: &PuzzleView) {
    debug!(
        route,
        disks = view.disks.get(),
        step = view.step,
        total_moves = view.total_moves,
        "rendered step"
    );
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
