use std::{error::Error, net::SocketAddr, path::PathBuf};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker::{AppState, build_router, graceful_shutdown, logging_middleware};

/// The HTTP server for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database. Created if it does not exist.
    #[arg(long, default_value = "tracker.db")]
    db_path: PathBuf,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Directory of static files served for any path that is not an API route.
    #[arg(long, default_value = "public")]
    assets_dir: PathBuf,

    /// Log the (truncated) body of every request and response.
    #[arg(long)]
    log_bodies: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let conn = Connection::open(&args.db_path)?;
    let state = AppState::new(conn)?;

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let mut router = build_router(state, &args.assets_dir);
    if args.log_bodies {
        router = router.layer(middleware::from_fn(logging_middleware));
    }
    let router = add_tracing_layer(router);

    println!("Server starting on http://localhost:{}", args.port);
    tracing::info!(
        "HTTP server listening on {addr}, serving files from {:?}",
        args.assets_dir
    );
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are converted into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
