//! HTTP request handlers.
//!
//! - `preview`: head-to-head preview images
//! - `meta`: Open Graph tags for event pages
//! - `events`: admin event listing with the ISO-week filter
//! - `officials`: officials bulk-edit payloads and write-back
//! - `metrics`: health check and Prometheus metrics

pub mod events;
pub mod meta;
pub mod metrics;
pub mod officials;
pub mod preview;

pub use events::{events_handler, EventRow, EventsParams, EventsResponse};
pub use meta::event_meta_handler;
pub use metrics::{health_handler, metrics_handler};
pub use officials::{
    get_officials_handler, officials_directory_handler, put_officials_handler, ADMIN_TOKEN_HEADER,
};
pub use preview::{head_to_head_handler, PreviewParams};

use axum::{http::StatusCode, response::IntoResponse, response::Response};

/// Empty response for requests this service declines to act on.
pub(crate) fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
