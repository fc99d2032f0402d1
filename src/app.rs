use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        create_comment, delete_comment, get_comment, healthcheck, list_comments, patch_comment,
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(healthcheck))
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/:id",
            get(get_comment).patch(patch_comment).delete(delete_comment),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
