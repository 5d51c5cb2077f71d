//! Synthetic placeholder media for mock capture.
//!
//! Produces a fixed-size, byte-for-byte deterministic 24-bit BMP image that
//! stands in for real video when no capture device is available.

/// MIME type of the placeholder payload.
pub const PLACEHOLDER_MIME_TYPE: &str = "image/bmp";

pub const PLACEHOLDER_WIDTH: u32 = 64;
pub const PLACEHOLDER_HEIGHT: u32 = 36;

/// Size of the BMP file header plus BITMAPINFOHEADER in bytes.
pub const BMP_HEADER_SIZE: usize = 54;

const BYTES_PER_PIXEL: u32 = 3;

/// Bytes per pixel row, padded to a 4-byte boundary.
pub fn row_stride(width: u32) -> u32 {
    (width * BYTES_PER_PIXEL + 3) & !3
}

/// Generate a 54-byte BMP header for an uncompressed 24-bit image.
///
/// Layout (little-endian):
/// ```text
/// [0-1]    "BM"
/// [2-5]    file size
/// [6-9]    reserved (0)
/// [10-13]  pixel data offset (54)
/// [14-17]  40 (BITMAPINFOHEADER size)
/// [18-21]  width
/// [22-25]  height (positive = bottom-up rows)
/// [26-27]  1 (planes)
/// [28-29]  24 (bits per pixel)
/// [30-33]  0 (BI_RGB, uncompressed)
/// [34-37]  pixel data size
/// [38-45]  2835 px/m horizontal and vertical (72 DPI)
/// [46-53]  0 (palette colours, important colours)
/// ```
pub fn generate_bmp_header(width: u32, height: u32) -> [u8; BMP_HEADER_SIZE] {
    let pixel_data_size = row_stride(width) * height;
    let file_size = BMP_HEADER_SIZE as u32 + pixel_data_size;

    let mut header = [0u8; BMP_HEADER_SIZE];

    header[0..2].copy_from_slice(b"BM");
    header[2..6].copy_from_slice(&file_size.to_le_bytes());
    header[10..14].copy_from_slice(&(BMP_HEADER_SIZE as u32).to_le_bytes());

    header[14..18].copy_from_slice(&40u32.to_le_bytes());
    header[18..22].copy_from_slice(&width.to_le_bytes());
    header[22..26].copy_from_slice(&height.to_le_bytes());
    header[26..28].copy_from_slice(&1u16.to_le_bytes());
    header[28..30].copy_from_slice(&24u16.to_le_bytes());
    header[34..38].copy_from_slice(&pixel_data_size.to_le_bytes());
    header[38..42].copy_from_slice(&2835u32.to_le_bytes());
    header[42..46].copy_from_slice(&2835u32.to_le_bytes());

    header
}

/// The mock-mode placeholder: a warm vertical gradient, 64x36.
pub fn generate_placeholder() -> Vec<u8> {
    let stride = row_stride(PLACEHOLDER_WIDTH) as usize;
    let mut bytes = Vec::with_capacity(BMP_HEADER_SIZE + stride * PLACEHOLDER_HEIGHT as usize);
    bytes.extend_from_slice(&generate_bmp_header(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT));

    for row in 0..PLACEHOLDER_HEIGHT {
        let shade = (row * 4) as u8;
        let start = bytes.len();
        for _ in 0..PLACEHOLDER_WIDTH {
            // BGR
            bytes.extend_from_slice(&[0x40 + shade / 2, 0x70 + shade, 0xD8]);
        }
        bytes.resize(start + stride, 0);
    }

    bytes
}
