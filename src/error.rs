//! Error types shared by the extractor, renderer and retrieval layers.
//!
//! Per-row problems (short rows, non-integer coordinates, unknown header
//! labels) are never errors: the renderer recovers from them locally.
//! An absent table is not an error either, see [`crate::grid::Render::NoData`].

use thiserror::Error;

/// Errors surfaced by `glyphgrid`.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("document is not valid UTF-8: {0}")]
    Parse(#[from] std::str::Utf8Error),

    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("grid extent ({max_x}, {max_y}) exceeds the {limit} cell limit")]
    ExtentTooLarge {
        max_x: i64,
        max_y: i64,
        limit: u64,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_error_converts_to_parse() {
        let bytes: &[u8] = &[0x61, 0xff];
        let err: GridError = std::str::from_utf8(bytes).unwrap_err().into();
        assert!(matches!(err, GridError::Parse(_)));
        assert!(err.to_string().starts_with("document is not valid UTF-8"));
    }

    #[test]
    fn extent_error_message_names_limit() {
        let err = GridError::ExtentTooLarge {
            max_x: 10,
            max_y: 20,
            limit: 100,
        };
        assert_eq!(
            err.to_string(),
            "grid extent (10, 20) exceeds the 100 cell limit"
        );
    }
}
