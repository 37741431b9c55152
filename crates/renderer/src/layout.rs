//! Canvas geometry for head-to-head previews.

/// Canvas width, matching the common 1.91:1 social preview size.
pub const CANVAS_WIDTH: u32 = 1200;
/// Canvas height.
pub const CANVAS_HEIGHT: u32 = 628;

/// Fraction of the width where the split meets the top edge.
const SPLIT_TOP: f32 = 0.60;
/// Fraction of the width where the split meets the bottom edge.
const SPLIT_BOTTOM: f32 = 0.40;

/// Which half of the canvas a logo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Point the logo is centered on.
    pub fn center(&self) -> (f64, f64) {
        let w = CANVAS_WIDTH as f64;
        let h = CANVAS_HEIGHT as f64;
        match self {
            Side::Left => (w / 4.0, h / 2.0),
            Side::Right => (3.0 * w / 4.0, h / 2.0),
        }
    }
}

/// Vertices of the left region: top-left, bottom-left, bottom split, top split.
pub fn left_region() -> [(f32, f32); 4] {
    let w = CANVAS_WIDTH as f32;
    let h = CANVAS_HEIGHT as f32;
    [(0.0, 0.0), (0.0, h), (w * SPLIT_BOTTOM, h), (w * SPLIT_TOP, 0.0)]
}

/// X coordinate of the slanted boundary at height `y`.
pub fn split_x_at(y: f32) -> f32 {
    let w = CANVAS_WIDTH as f32;
    let t = (y / CANVAS_HEIGHT as f32).clamp(0.0, 1.0);
    w * (SPLIT_TOP + (SPLIT_BOTTOM - SPLIT_TOP) * t)
}

/// Largest box a logo may occupy within its half.
///
/// Margins are 10% of the half width horizontally and 10% of the height
/// vertically, on both sides.
pub fn max_logo_box() -> (f64, f64) {
    let half = CANVAS_WIDTH as f64 / 2.0;
    let x_margin = 0.1 * half;
    let y_margin = 0.1 * CANVAS_HEIGHT as f64;
    (half - 2.0 * x_margin, CANVAS_HEIGHT as f64 - 2.0 * y_margin)
}

/// Placement of a logo on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoFit {
    pub width: u32,
    pub height: u32,
    pub x: i64,
    pub y: i64,
}

impl LogoFit {
    /// Fit a logo of the given native size into its half.
    ///
    /// Logos already inside the box keep their size. Larger ones are scaled
    /// by the dominant overflow ratio so both dimensions fit.
    pub fn compute(native_width: u32, native_height: u32, side: Side) -> Self {
        let (max_w, max_h) = max_logo_box();
        let w = native_width.max(1) as f64;
        let h = native_height.max(1) as f64;

        let (fit_w, fit_h) = if w > max_w || h > max_h {
            let aspect = w / h;
            if w / max_w > h / max_h {
                (max_w, max_w / aspect)
            } else {
                (max_h * aspect, max_h)
            }
        } else {
            (w, h)
        };

        let width = (fit_w.round() as u32).clamp(1, max_w.floor() as u32);
        let height = (fit_h.round() as u32).clamp(1, max_h.floor() as u32);

        let (cx, cy) = side.center();
        Self {
            width,
            height,
            x: (cx - width as f64 / 2.0).round() as i64,
            y: (cy - height as f64 / 2.0).round() as i64,
        }
    }

    pub fn is_scaled(&self, native_width: u32, native_height: u32) -> bool {
        self.width != native_width || self.height != native_height
    }
}
