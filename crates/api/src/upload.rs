//! Client-side logo validation
//!
//! The upload service accepts a single image file; size and content are
//! checked here before any network call is made, so an oversized or
//! non-image file never leaves the client.

use image::ImageFormat;
use log::debug;

use crate::error::{ApiError, ApiResult};

/// Maximum accepted logo size: 1 MiB
pub const MAX_LOGO_BYTES: usize = 1024 * 1024;

/// Validate logo bytes before upload
///
/// Returns the sniffed image format on success.
pub fn validate_logo(bytes: &[u8]) -> ApiResult<ImageFormat> {
    if bytes.len() > MAX_LOGO_BYTES {
        return Err(ApiError::FileTooLarge {
            size: bytes.len(),
            max: MAX_LOGO_BYTES,
        });
    }

    let format = image::guess_format(bytes).map_err(|_| ApiError::NotAnImage)?;
    debug!("Logo validated: {} bytes, {:?}", bytes.len(), format);
    Ok(format)
}

/// MIME type for a sniffed image format
pub fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid PNG header bytes; enough for format sniffing
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_small_png_is_accepted() {
        let format = validate_logo(PNG_MAGIC).unwrap();
        assert_eq!(format, ImageFormat::Png);
        assert_eq!(mime_type(format), "image/png");
    }

    #[test]
    fn test_oversized_file_rejected_before_sniffing() {
        // A 2 MiB payload is rejected on size alone, image or not
        let mut bytes = vec![0_u8; 2 * 1024 * 1024];
        bytes[..PNG_MAGIC.len()].copy_from_slice(PNG_MAGIC);

        match validate_logo(&bytes) {
            Err(ApiError::FileTooLarge { size, max }) => {
                assert_eq!(size, 2 * 1024 * 1024);
                assert_eq!(max, MAX_LOGO_BYTES);
            }
            other => panic!("expected FileTooLarge, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_non_image_rejected() {
        let bytes = b"MZ\x90\x00definitely not an image";
        assert!(matches!(validate_logo(bytes), Err(ApiError::NotAnImage)));
    }

    #[test]
    fn test_exactly_at_limit_is_accepted() {
        let mut bytes = vec![0_u8; MAX_LOGO_BYTES];
        bytes[..PNG_MAGIC.len()].copy_from_slice(PNG_MAGIC);
        assert!(validate_logo(&bytes).is_ok());
    }
}
