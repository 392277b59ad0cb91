//! Raster encoding for rendered charts

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use gearscope_core::{Error, Result};
use image::{ImageFormat, RgbImage};

/// Encode a packed RGB8 pixel buffer as PNG
pub fn encode_png(width: u32, height: u32, pixels: Vec<u8>) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 3;
    let actual = pixels.len();
    let image = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
        Error::Render(format!(
            "pixel buffer holds {actual} bytes, {width}x{height} RGB needs {expected}"
        ))
    })?;

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(Error::render)?;
    Ok(out.into_inner())
}

/// Build a base64 `data:` URI
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(2, 2, vec![255; 12]).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_rejects_short_buffer() {
        let err = encode_png(4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(err.to_string().contains("4x4"));
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(data_uri("image/png", b""), "data:image/png;base64,");
    }
}
