//! HTTP server for the home and post detail routes

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::RenderError;
use crate::helpers;
use crate::pages::PageRenderer;
use crate::Editorial;

/// Server state
struct ServerState {
    renderer: PageRenderer,
    static_dir: PathBuf,
}

/// Build the application router
pub fn router(renderer: PageRenderer, static_dir: PathBuf) -> Router {
    let state = Arc::new(ServerState {
        renderer,
        static_dir,
    });

    // Page routes live under `root`, matching the links the renderer emits
    let config = state.renderer.config();
    let home = helpers::url_for(config, "/");
    let post = helpers::post_url(config, ":slug");

    let mut router = Router::new()
        .route(&home, get(home_handler))
        .route(&post, get(post_handler))
        .route(&format!("{}/", post), get(post_handler));
    if home != "/" {
        router = router.route(home.trim_end_matches('/'), get(home_handler));
    }

    router
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(app: &Editorial, ip: &str, port: u16, open: bool) -> Result<()> {
    let store = app.open_store()?;
    let renderer = PageRenderer::new(app.config.clone(), store)?;
    let router = router(renderer, app.static_dir.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn home_handler(State(state): State<Arc<ServerState>>) -> Response {
    page_response(&state, state.renderer.render_home())
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    page_response(&state, state.renderer.render_post(&slug))
}

/// Serve static files, or the not-found page
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    let mut service = ServeDir::new(&state.static_dir);
    match service.try_call(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => {
            tracing::debug!("No route or file for {}", path);
            not_found(&state)
        }
        Err(e) => {
            tracing::error!("Failed to serve {}: {}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

fn page_response(state: &ServerState, rendered: Result<String, RenderError>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(RenderError::NotFound(slug)) => {
            tracing::debug!("Post not found: {}", slug);
            not_found(state)
        }
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

fn not_found(state: &ServerState) -> Response {
    match state.renderer.render_not_found() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render not-found page: {}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
