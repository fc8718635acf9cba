mod chrome;
mod config;
mod error;
mod paths;
mod render;

pub use chrome::ChromeRenderer;
pub use config::{Config, MarginConfig, PageConfig, PaperFormat};
pub use error::{ConversionError, RenderError};
pub use paths::{CONFIG_FILENAME, INPUT_FILENAME, OUTPUT_FILENAME};
pub use render::Renderer;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Convert `README.html` next to the executable into `README.pdf` in the same
/// directory, printing the three status lines. Returns the resolved output
/// path.
pub fn convert() -> Result<PathBuf, ConversionError> {
    let dir = paths::exe_dir().map_err(ConversionError::ExeDir)?;
    debug!(dir = %dir.display(), "resolved executable directory");
    let (input, output) = paths::conversion_paths(&dir);
    let config = Config::load(&dir.join(paths::CONFIG_FILENAME));
    let renderer = ChromeRenderer::new(config);
    convert_file(&input, &output, &renderer)?;
    Ok(output)
}

/// Convert one HTML file to PDF through the given renderer.
///
/// Checks that the input exists, renders it, and writes the bytes to `output`,
/// overwriting any previous file there. Prints the start notice before
/// rendering and the completion notices after the write succeeds.
pub fn convert_file(
    input: &Path,
    output: &Path,
    renderer: &dyn Renderer,
) -> Result<(), ConversionError> {
    if !input.is_file() {
        return Err(ConversionError::FileNotFound(input.to_path_buf()));
    }

    println!("🔄 Converting {} to PDF...", display_name(input));
    let bytes = renderer.render(input)?;
    fs::write(output, &bytes).map_err(|source| ConversionError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), len = bytes.len(), "wrote output file");

    println!("✅ PDF created successfully: {}", output.display());
    println!("📄 The PDF includes clickable links!");
    Ok(())
}

fn display_name(path: &Path) -> std::borrow::Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}
