use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;

use record_search::api;
use record_search::config::Config;
use record_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Corpus file: {}", config.data_file.display());
    tracing::info!("Documents directory: {}", config.docs_dir.display());

    let state = AppState::new(config.clone())?;

    // No CORS layer: the search page is served from the same origin so
    // cross-origin access is unnecessary.
    let app = Router::new()
        // Serve frontend
        .route("/", get(serve_index))
        // API routes
        .route("/api/search", get(api::search::search))
        .route("/api/search-document", get(api::search::search_document))
        .route(
            "/static/documents/{filename}",
            get(api::documents::serve_document),
        )
        .with_state(state)
        .fallback(get(serve_index));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
