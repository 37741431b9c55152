//! Tests for head-to-head preview compositing.

use image::{Rgba, RgbaImage};
use league_common::TeamColor;
use renderer::{generate, render_canvas, CANVAS_HEIGHT, CANVAS_WIDTH};
use std::collections::HashSet;
use test_utils::{assert_approx_eq, LogoDir};

const RED: TeamColor = TeamColor { r: 255, g: 0, b: 0 };
const BLUE: TeamColor = TeamColor { r: 0, g: 0, b: 255 };
const RED_PX: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE_PX: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// PNG color type byte from the IHDR chunk.
fn color_type(png: &[u8]) -> u8 {
    png[25]
}

fn decode(png: &[u8]) -> RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

/// Inclusive bounding box of pixels matching `pred`.
fn bounding_box(img: &RgbaImage, pred: impl Fn(u32, u32, &Rgba<u8>) -> bool) -> (u32, u32, u32, u32) {
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0, 0);
    for (x, y, px) in img.enumerate_pixels() {
        if pred(x, y, px) {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
    }
    (min.0, min.1, max.0, max.1)
}

#[test]
fn test_canvas_dimensions() {
    let img = decode(&generate(RED, BLUE, None, None).unwrap());
    assert_eq!(img.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn test_split_colors() {
    let img = render_canvas(RED, BLUE, None, None).unwrap();

    assert_eq!(*img.get_pixel(10, 10), RED_PX);
    assert_eq!(*img.get_pixel(10, 620), RED_PX);
    assert_eq!(*img.get_pixel(1190, 10), BLUE_PX);
    assert_eq!(*img.get_pixel(1190, 620), BLUE_PX);

    // The boundary leans: left color reaches further along the top edge.
    assert_eq!(*img.get_pixel(700, 2), RED_PX);
    assert_eq!(*img.get_pixel(500, 625), BLUE_PX);
    assert_eq!(*img.get_pixel(590, 314), RED_PX);
    assert_eq!(*img.get_pixel(610, 314), BLUE_PX);
}

#[test]
fn test_plain_split_has_two_colors_and_is_indexed() {
    let png = generate(RED, BLUE, None, None).unwrap();
    assert_eq!(color_type(&png), 3);

    let colors: HashSet<[u8; 4]> = decode(&png).pixels().map(|p| p.0).collect();
    assert_eq!(colors.len(), 2);
    assert!(colors.contains(&RED_PX.0));
    assert!(colors.contains(&BLUE_PX.0));
}

#[test]
fn test_default_colors_fill_white() {
    let img = render_canvas(TeamColor::DEFAULT, TeamColor::DEFAULT, None, None).unwrap();
    assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn test_small_logo_keeps_native_size() {
    let logos = LogoDir::new();
    let logo = logos.solid("small.png", 100, 50, [0, 255, 0]);

    let img = render_canvas(RED, BLUE, Some(&logo), None).unwrap();
    let green = |_: u32, _: u32, p: &Rgba<u8>| *p == Rgba([0, 255, 0, 255]);

    assert_eq!(bounding_box(&img, green), (250, 289, 349, 338));
    assert_eq!(img.pixels().filter(|p| **p == Rgba([0, 255, 0, 255])).count(), 5000);
}

#[test]
fn test_wide_logo_scaled_into_left_half() {
    let logos = LogoDir::new();
    let logo = logos.solid("wide.png", 1000, 500, [0, 255, 0]);

    let img = render_canvas(RED, BLUE, Some(&logo), None).unwrap();
    let (x0, y0, x1, y1) = bounding_box(&img, |x, _, p| x < 600 && *p != RED_PX && *p != BLUE_PX);

    assert_eq!((x1 - x0 + 1, y1 - y0 + 1), (480, 240));
    assert_eq!((x0, y0), (60, 194));
}

#[test]
fn test_tall_logo_scaled_into_right_half() {
    let logos = LogoDir::new();
    let logo = logos.solid("tall.png", 400, 1000, [0, 255, 0]);

    let img = render_canvas(RED, BLUE, None, Some(&logo)).unwrap();
    let (x0, y0, x1, y1) = bounding_box(&img, |x, _, p| x >= 760 && *p != BLUE_PX);

    assert_eq!((x1 - x0 + 1, y1 - y0 + 1), (201, 502));
    assert_eq!(y0, 63);
    assert_eq!(x0, 800);
}

#[test]
fn test_scaled_logos_keep_aspect_ratio() {
    let logos = LogoDir::new();
    let wide = logos.solid("wide.png", 1000, 500, [0, 255, 0]);
    let tall = logos.solid("tall.png", 400, 1000, [0, 255, 0]);

    let img = render_canvas(RED, BLUE, Some(&wide), Some(&tall)).unwrap();
    let (x0, y0, x1, y1) = bounding_box(&img, |x, _, p| x < 600 && *p != RED_PX && *p != BLUE_PX);
    assert_approx_eq!((x1 - x0 + 1) as f64 / (y1 - y0 + 1) as f64, 2.0, 0.01);

    let (x0, y0, x1, y1) = bounding_box(&img, |x, _, p| x >= 760 && *p != BLUE_PX);
    assert_approx_eq!((x1 - x0 + 1) as f64 / (y1 - y0 + 1) as f64, 0.4, 0.01);
}

#[test]
fn test_corrupt_logo_is_skipped() {
    let logos = LogoDir::new();
    let corrupt = logos.corrupt("broken.png");

    let with_corrupt = generate(RED, BLUE, Some(&corrupt), None).unwrap();
    let without = generate(RED, BLUE, None, None).unwrap();
    assert_eq!(with_corrupt, without);
}

#[test]
fn test_missing_logo_file_is_skipped() {
    let logos = LogoDir::new();
    let missing = logos.path().join("nope.png");

    let png = generate(RED, BLUE, None, Some(&missing)).unwrap();
    assert_eq!(png, generate(RED, BLUE, None, None).unwrap());
}

#[test]
fn test_many_colors_fall_back_to_rgba() {
    let logos = LogoDir::new();
    let gradient = RgbaImage::from_fn(300, 300, |x, y| Rgba([x as u8, y as u8, 128, 255]));
    let logo = test_utils::write_logo(logos.path(), "gradient.png", &gradient);

    let png = generate(RED, BLUE, Some(&logo), None).unwrap();
    assert_eq!(color_type(&png), 6);
    assert_eq!(decode(&png).dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn test_output_is_deterministic() {
    let logos = LogoDir::new();
    let a = logos.solid("a.png", 640, 480, [10, 200, 30]);
    let b = logos.solid("b.png", 64, 64, [250, 250, 0]);

    let first = generate(RED, BLUE, Some(&a), Some(&b)).unwrap();
    let second = generate(RED, BLUE, Some(&a), Some(&b)).unwrap();
    assert_eq!(first, second);
}
