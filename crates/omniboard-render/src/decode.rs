//! Template image decoding.

use crate::RenderError;
use kurbo::Point;
use omniboard_core::TemplateImage;

/// Decode an encoded image (PNG/JPEG/WebP) into a template bitmap
/// anchored at `position`.
///
/// Failure is surfaced as an error for the caller to log and drop; the
/// history is never touched by a failed decode.
pub fn decode_template(bytes: &[u8], position: Point) -> Result<TemplateImage, RenderError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(TemplateImage::new(
        position,
        width,
        height,
        decoded.into_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::Pixmap;
    use omniboard_core::Rgba;

    #[test]
    fn test_decode_png_roundtrip() {
        let source = Pixmap::filled(2, 3, Rgba::new(10, 20, 30, 255));
        let bytes = source.encode_png().unwrap();

        let template = decode_template(&bytes, Point::new(5.0, 6.0)).unwrap();
        assert_eq!(template.width, 2);
        assert_eq!(template.height, 3);
        assert_eq!(template.position, Point::new(5.0, 6.0));
        assert_eq!(&template.rgba[0..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_template(b"not an image", Point::ZERO).is_err());
    }
}
