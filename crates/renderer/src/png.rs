//! PNG encoding for composited previews.
//!
//! Two encoding modes:
//! - **Indexed PNG (color type 3)**: used when the canvas has ≤256 unique
//!   colors, which is the case for a plain two-color split.
//! - **RGBA PNG (color type 6)**: fallback once resampled logos introduce
//!   more colors.

use image::RgbaImage;
use std::collections::HashMap;
use std::io::Write;

use crate::error::{RenderError, RenderResult};

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode an image, choosing indexed output when the palette allows it.
pub fn encode_png_auto(image: &RgbaImage) -> RenderResult<Vec<u8>> {
    match extract_palette(image) {
        Some((palette, indices)) => {
            encode_png_indexed(image.width(), image.height(), &palette, &indices)
        }
        None => encode_png_rgba(image),
    }
}

/// Collect a palette and per-pixel indices, or `None` past 256 colors.
fn extract_palette(image: &RgbaImage) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut lookup: HashMap<[u8; 4], u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity((image.width() * image.height()) as usize);

    for pixel in image.pixels() {
        let index = match lookup.get(&pixel.0) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(pixel.0);
                lookup.insert(pixel.0, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode palette indices as an indexed PNG.
pub fn encode_png_indexed(
    width: u32,
    height: u32,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> RenderResult<Vec<u8>> {
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(RenderError::Encode(format!(
            "palette size {} out of range",
            palette.len()
        )));
    }
    check_len(indices.len(), width, height, 1)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width as usize)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode an image as 8-bit RGBA.
pub fn encode_png_rgba(image: &RgbaImage) -> RenderResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let raw = image.as_raw();
    check_len(raw.len(), width, height, 4)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(raw, width as usize * 4)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn check_len(len: usize, width: u32, height: u32, bytes_per_pixel: usize) -> RenderResult<()> {
    let expected = width as usize * height as usize * bytes_per_pixel;
    if len != expected || width == 0 || height == 0 {
        return Err(RenderError::Encode(format!(
            "pixel buffer is {} bytes, expected {} for {}x{}",
            len, expected, width, height
        )));
    }
    Ok(())
}

fn ihdr(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each row with filter type 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], stride: usize) -> RenderResult<Vec<u8>> {
    let rows = data.len() / stride;
    let mut uncompressed = Vec::with_capacity(rows * (stride + 1));
    for row in data.chunks_exact(stride) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(&uncompressed)
        .and_then(|_| encoder.finish())
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
