use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioFetcher, LlmClient, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, process_audio_handler, process_audio_url_handler, root_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, E, L>(state: AppState<F, E, L>, max_upload_size_bytes: usize) -> Router
where
    F: AudioFetcher + ?Sized + 'static,
    E: TranscriptionEngine + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/process-audio/", post(process_audio_handler::<F, E, L>))
        .route("/process-audio-url/", post(process_audio_url_handler::<F, E, L>))
        .layer(DefaultBodyLimit::max(max_upload_size_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
