//! Minimal PNG encoding for RGBA frames.
//!
//! Frames are anti-aliased strokes over a flat fill, so palette encoding
//! rarely pays off; only the RGBA path (color type 6) is implemented.

use crate::{RenderError, RenderResult};
use std::io::Write;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode an RGBA pixel buffer as a PNG image.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: image width in pixels
/// - `height`: image height in pixels
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    if pixels.len() != width * height * 4 {
        return Err(RenderError::BufferMismatch {
            len: pixels.len(),
            width,
            height,
        });
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR: dimensions, 8-bit RGBA, no interlace.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type: RGBA
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    let idat = deflate_scanlines(pixels, width, height)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Prefix every scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let stride = width * 4;
    let mut raw = Vec::with_capacity(height * (1 + stride));
    for row in pixels.chunks_exact(stride.max(1)) {
        raw.push(0); // filter type: none
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    encoder.finish()
}

/// Write one PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
