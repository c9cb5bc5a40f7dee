//! All API endpoint setup

use axum::Router;
use axum::routing::delete;
use axum::routing::patch;
use axum::routing::post;

pub use request::Form;
pub use response::Error;
pub use response::Success;

mod notes;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    Router::new()
        .route("/add_note", post(notes::add))
        .route("/remove_note", delete(notes::remove))
        .route("/edit_note", patch(notes::edit))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Any route that does not exist
async fn fallback() -> Error {
    Error::not_found("Not found")
}

/// Known route, unsupported method
async fn method_not_allowed() -> Error {
    Error::method_not_allowed("Method not allowed")
}
