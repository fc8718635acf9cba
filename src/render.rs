use std::path::Path;

use crate::error::RenderError;

/// Narrow seam around the HTML-to-PDF rendering collaborator.
///
/// Implementations own HTML parsing, CSS layout, and PDF generation, and must
/// preserve hyperlinks in the source as clickable annotations in the output.
/// The orchestration layer writes the returned bytes to disk itself.
pub trait Renderer {
    fn render(&self, input: &Path) -> Result<Vec<u8>, RenderError>;
}
