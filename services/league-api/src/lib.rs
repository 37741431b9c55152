//! League media API service library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod og;
pub mod preview;
pub mod state;

pub use app::router;
pub use config::{Args, SiteConfig};
pub use preview::{PreviewOutcome, PreviewService};
pub use state::AppState;
