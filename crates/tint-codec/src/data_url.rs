//! Base64 `data:` URLs.

use base64::Engine;
use tint_core::Bitmap;

use crate::error::{CodecError, Result};
use crate::image_io::{decode, encode_png};

/// Prefix of every URL produced by [`to_data_url`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode a bitmap as PNG and wrap it in a `data:image/png;base64,` URL.
pub fn to_data_url(bitmap: &Bitmap) -> Result<String> {
    let png = encode_png(bitmap)?;
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(&png, &mut url);
    Ok(url)
}

/// Decode a base64 image data URL back into a bitmap.
///
/// Any image media type the decoder understands is accepted.
pub fn decode_data_url(url: &str) -> Result<Bitmap> {
    // Format: data:[<mediatype>][;base64],<data>
    let Some((header, data)) = url.split_once(',') else {
        return Err(CodecError::InvalidDataUrl("missing ',' separator".into()));
    };
    if !header.starts_with("data:") {
        return Err(CodecError::InvalidDataUrl("missing 'data:' scheme".into()));
    }
    if !header.ends_with(";base64") {
        return Err(CodecError::InvalidDataUrl("only base64 payloads are supported".into()));
    }

    let bytes = base64::engine::general_purpose::STANDARD.decode(data.trim())?;
    decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_prefix_and_payload() {
        let bitmap = Bitmap::filled(4, 4, [255, 0, 0, 255]).unwrap();
        let url = to_data_url(&bitmap).unwrap();

        assert!(url.starts_with(PNG_DATA_URL_PREFIX));
        assert!(url.len() > PNG_DATA_URL_PREFIX.len());
        assert_eq!(decode_data_url(&url).unwrap(), bitmap);
    }

    #[test]
    fn test_decode_data_url_errors() {
        assert!(matches!(
            decode_data_url("image/png;base64,AAAA"),
            Err(CodecError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            decode_data_url("data:image/png;base64"),
            Err(CodecError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            decode_data_url("data:text/plain,hello"),
            Err(CodecError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            decode_data_url("data:image/png;base64,!!!"),
            Err(CodecError::Base64(_))
        ));
    }
}
