use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use crossfill::solver::solve_puzzle;
use crossfill::types::PuzzleError;
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct SolveRequest {
    grid: String,
    words: Vec<String>,
}

#[derive(Serialize)]
struct SolveResponse {
    solution: String,
    rows: Vec<String>,
    word_count: usize,
}

async fn solve(
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /solve"
    );

    match solve_puzzle(&req.grid, &req.words) {
        Ok(solution) => {
            let rows = solution.lines().map(str::to_owned).collect();
            Ok(Json(SolveResponse {
                rows,
                word_count: req.words.len(),
                solution,
            }))
        }
        // Well-formed input with no solution is the one case that is not
        // the client's request shape being wrong.
        Err(e @ PuzzleError::Unsolvable) => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        Err(e) => Err((StatusCode::BAD_REQUEST, e.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/solve", post(solve))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
