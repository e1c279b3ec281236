//! Validation of uploaded ingredient photos.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::ImageError;

/// Allowed image formats for ingredient photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum file size for photos (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// An accepted photo and its sniffed MIME type.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    /// The detected content type (e.g., "image/jpeg").
    pub content_type: String,
}

/// Validate image data: check size and format, and detect content type.
///
/// Returns the content type on success (e.g., "image/jpeg").
pub fn validate_image(data: &[u8]) -> Result<String, ImageError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(ImageError::TooLarge {
            size: data.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ImageError::Unreadable(e.to_string()))?;

    let format = reader.format().ok_or(ImageError::UnknownFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(ImageError::UnsupportedFormat(format!("{:?}", format)));
    }

    Ok(format.to_mime_type().to_string())
}

impl UploadedImage {
    /// Validate `data` and wrap it with its content type.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ImageError> {
        let content_type = validate_image(&data)?;
        Ok(Self { data, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::from_pixel(4, 4, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_validate_png() {
        assert_eq!(validate_image(&png_bytes()).unwrap(), "image/png");
        let uploaded = UploadedImage::from_bytes(png_bytes()).unwrap();
        assert_eq!(uploaded.content_type, "image/png");
    }

    #[test]
    fn test_validate_invalid_format() {
        let result = validate_image(b"not an image");
        assert!(matches!(result, Err(ImageError::UnknownFormat)));
    }

    #[test]
    fn test_validate_disallowed_format() {
        // BMP magic bytes
        let result = validate_image(b"BM\x00\x00\x00\x00");
        assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate_too_large() {
        let data = vec![0u8; MAX_FILE_SIZE + 1];
        assert!(matches!(
            validate_image(&data),
            Err(ImageError::TooLarge { .. })
        ));
    }
}
