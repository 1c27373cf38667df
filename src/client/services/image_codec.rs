use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::common::error::{PadError, Result};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes into a `data:` URI, the form the predictor expects.
pub fn png_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png))
}

/// Inverse of [`png_data_uri`]; accepts any base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| PadError::Encode("data URI has no ',' separator".to_string()))?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(PadError::Encode(format!("not a base64 data URI: {header}")));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| PadError::Encode(e.to_string()))
}
