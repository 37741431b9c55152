//! Image rendering for head-to-head event previews.
//!
//! - `composite`: two-color slanted split with centered team logos
//! - `layout`: canvas geometry and logo fitting
//! - `png`: indexed/RGBA PNG encoding

pub mod composite;
pub mod error;
pub mod layout;
pub mod png;

pub use composite::{generate, render_canvas};
pub use error::{RenderError, RenderResult};
pub use layout::{LogoFit, Side, CANVAS_HEIGHT, CANVAS_WIDTH};
