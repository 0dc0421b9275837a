pub mod users;

use axum::routing::post;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

/// Build the API router over the given pool.
pub fn router(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/user/signup", post(users::signup))
        .layer(cors)
        .with_state(pool)
}
