//! `glyphgrid` - render a published coordinate table as a text grid
//!
//! A document carries a table whose header names an `x-coordinate`, a
//! `y-coordinate` and a `Character` column. Each data row places one
//! character on a Cartesian grid; `glyphgrid` draws that grid top to bottom
//! with blanks for unoccupied cells.
//!
//! # Pipeline
//!
//! - **[`table`]**: first `<table>` of an HTML document → rows of trimmed cells
//! - **[`grid`]**: rows → sparse coordinate map → text lines
//! - **[`fetch`]**: optional HTTP(S) retrieval of the document
//!
//! # Example
//!
//! ```rust
//! let html = "<table>\
//!     <tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>\
//!     <tr><td>0</td><td>#</td><td>1</td></tr>\
//!     <tr><td>1</td><td>#</td><td>0</td></tr>\
//!     </table>";
//!
//! let render = glyphgrid::render_html(html);
//! assert_eq!(render.lines(), &["# ", " #"]);
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod table;

pub use config::Config;
pub use error::{GridError, Result};
pub use fetch::DocumentFetcher;
pub use grid::{
    render, render_with_limits, BoundingExtent, CoordinateGrid, FieldMapping, GridStats, Render,
    RenderLimits,
};
pub use table::{extract_first_table, extract_first_table_bytes, Row, Table};

/// Version of glyphgrid
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract the first table from `html` and render it.
///
/// Unbounded: a huge coordinate allocates a huge grid. Use
/// [`render_document`] or [`render_with_limits`] for untrusted input.
pub fn render_html(html: &str) -> Render {
    render(&extract_first_table(html))
}

/// Decode `bytes` as UTF-8, extract the first table, and render it within `limits`.
pub fn render_document(bytes: &[u8], limits: RenderLimits) -> Result<Render> {
    let table = extract_first_table_bytes(bytes)?;
    render_with_limits(&table, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_html_without_table_is_no_data() {
        assert!(render_html("<p>no table</p>").is_no_data());
    }

    #[test]
    fn render_document_rejects_invalid_utf8() {
        let err = render_document(b"\xc3\x28", RenderLimits::default()).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn render_document_bounds_what_render_html_does_not() {
        let html = "<table><tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>\
            <tr><td>1000000000000</td><td>X</td><td>0</td></tr></table>";
        let err = render_document(html.as_bytes(), RenderLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            GridError::ExtentTooLarge {
                max_x: 1_000_000_000_000,
                max_y: 0,
                ..
            }
        ));
    }

    #[test]
    fn render_document_end_to_end() {
        let html = "<html><body><h1>Message</h1><table>\
            <tr><td><p>x-coordinate</p></td><td><p>Character</p></td><td><p>y-coordinate</p></td></tr>\
            <tr><td><p>0</p></td><td><p>\u{2588}</p></td><td><p>0</p></td></tr>\
            <tr><td><p>0</p></td><td><p>\u{2580}</p></td><td><p>1</p></td></tr>\
            <tr><td><p>2</p></td><td><p>\u{2591}</p></td><td><p>1</p></td></tr>\
            </table></body></html>";
        let render = render_document(html.as_bytes(), RenderLimits::default()).unwrap();
        assert_eq!(render.lines(), &["\u{2580} \u{2591}", "\u{2588}  "]);
    }
}
