//! Head-to-head preview compositing.
//!
//! The canvas is split along a slanted boundary into two team-colored
//! regions, and each team's logo is scaled into and centered on its half.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use tracing::{debug, warn};

use league_common::TeamColor;

use crate::error::{RenderError, RenderResult};
use crate::layout::{left_region, LogoFit, Side, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::png::encode_png_auto;

/// Resampling filter used when a logo has to shrink.
const LOGO_FILTER: FilterType = FilterType::CatmullRom;

/// Render a preview and encode it as PNG.
///
/// Missing logo paths leave only the color fill on that side. A logo that
/// cannot be decoded is skipped the same way.
pub fn generate(
    color_a: TeamColor,
    color_b: TeamColor,
    logo_a: Option<&Path>,
    logo_b: Option<&Path>,
) -> RenderResult<Vec<u8>> {
    let canvas = render_canvas(color_a, color_b, logo_a, logo_b)?;
    encode_png_auto(&canvas)
}

/// Render a preview to an RGBA canvas.
pub fn render_canvas(
    color_a: TeamColor,
    color_b: TeamColor,
    logo_a: Option<&Path>,
    logo_b: Option<&Path>,
) -> RenderResult<RgbaImage> {
    let mut canvas = fill_split(color_a, color_b)?;

    for (side, path) in [(Side::Left, logo_a), (Side::Right, logo_b)] {
        if let Some(logo) = path.and_then(load_logo) {
            place_logo(&mut canvas, &logo, side);
        }
    }

    Ok(canvas)
}

/// Paint the two color regions.
///
/// The right color covers the canvas first and the left quadrilateral is
/// painted over it, so every pixel belongs to exactly one region. Edges are
/// not anti-aliased.
fn fill_split(color_a: TeamColor, color_b: TeamColor) -> RenderResult<RgbaImage> {
    let invalid = || RenderError::Canvas {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    let mut pixmap = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT).ok_or_else(invalid)?;
    pixmap.fill(tiny_skia::Color::from_rgba8(color_b.r, color_b.g, color_b.b, 255));

    let [first, rest @ ..] = left_region();
    let mut pb = PathBuilder::new();
    pb.move_to(first.0, first.1);
    for (x, y) in rest {
        pb.line_to(x, y);
    }
    pb.close();
    let path = pb.finish().ok_or(RenderError::Path)?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(color_a.r, color_a.g, color_a.b, 255);
    paint.anti_alias = false;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    // Both fills are opaque, so premultiplied data equals straight RGBA.
    RgbaImage::from_raw(CANVAS_WIDTH, CANVAS_HEIGHT, pixmap.take()).ok_or_else(invalid)
}

fn load_logo(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unreadable logo");
            None
        }
    }
}

fn place_logo(canvas: &mut RgbaImage, logo: &RgbaImage, side: Side) {
    let (native_w, native_h) = logo.dimensions();
    let fit = LogoFit::compute(native_w, native_h, side);
    debug!(?side, native_w, native_h, width = fit.width, height = fit.height, "Placing logo");

    if fit.is_scaled(native_w, native_h) {
        let scaled = imageops::resize(logo, fit.width, fit.height, LOGO_FILTER);
        imageops::overlay(canvas, &scaled, fit.x, fit.y);
    } else {
        imageops::overlay(canvas, logo, fit.x, fit.y);
    }
}
