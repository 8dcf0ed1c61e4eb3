use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use super::{auth, posts, remarks, AppState};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::home))
        .route("/add_remark", post(remarks::add_remark))
        .route("/create", get(posts::compose_page).post(posts::compose_post))
        .route(
            "/register",
            get(auth::register_page).post(auth::register_post),
        )
        .route("/login", get(auth::login_page).post(auth::login_post))
        .route("/logout", get(auth::logout))
        .route("/delete_post/:post_id", post(posts::delete_post))
        .route("/healthz", get(health))
        .route("/favicon.ico", get(favicon))
}

async fn health() -> &'static str {
    "OK"
}

async fn favicon() -> Response {
    // Return a simple SVG favicon (memo emoji)
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">📝</text></svg>"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
        .into_response()
}
