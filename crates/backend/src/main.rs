pub mod error;
pub mod handlers;
pub mod shared;
pub mod users;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("HOTELS_DB").unwrap_or_else(|_| "target/db/hotels.db".into());
    let pool = shared::data::db::connect(&db_path).await?;
    tracing::info!("Database ready at {}", db_path);

    // Serve the built frontend alongside the API.
    let app = handlers::router(pool).fallback_service(ServeDir::new("static"));

    let addr = std::env::var("HOTELS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
