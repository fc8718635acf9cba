use std::path::Path;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::Browser;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::RenderError;
use crate::render::Renderer;

/// Chromium expresses margins and paper sizes in inches; margins are
/// configured in CSS pixels.
const PIXELS_PER_INCH: f64 = 96.0;

fn px_to_inches(px: f64) -> f64 {
    px / PIXELS_PER_INCH
}

/// Renders HTML by printing it from a headless Chromium instance.
pub struct ChromeRenderer {
    config: Config,
}

impl ChromeRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn pdf_options(&self) -> PrintToPdfOptions {
        let (width, height) = self.config.page.format.dimensions();
        let margin = &self.config.margin;
        PrintToPdfOptions {
            print_background: Some(self.config.page.background),
            paper_width: Some(width),
            paper_height: Some(height),
            margin_top: Some(px_to_inches(margin.top)),
            margin_bottom: Some(px_to_inches(margin.bottom)),
            margin_left: Some(px_to_inches(margin.left)),
            margin_right: Some(px_to_inches(margin.right)),
            ..Default::default()
        }
    }
}

impl Renderer for ChromeRenderer {
    fn render(&self, input: &Path) -> Result<Vec<u8>, RenderError> {
        let file_url = Url::from_file_path(input).map_err(|_| RenderError::Navigate {
            path: input.to_path_buf(),
            message: "path cannot be expressed as a file:// URL".to_string(),
        })?;
        debug!(url = %file_url, "loading input document");

        let browser = Browser::default().map_err(|e| RenderError::Launch(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        tab.navigate_to(file_url.as_str())
            .map_err(|e| RenderError::Navigate {
                path: input.to_path_buf(),
                message: e.to_string(),
            })?;
        tab.wait_until_navigated().map_err(|e| RenderError::Navigate {
            path: input.to_path_buf(),
            message: e.to_string(),
        })?;

        let bytes = tab
            .print_to_pdf(Some(self.pdf_options()))
            .map_err(|e| RenderError::Print(e.to_string()))?;
        debug!(len = bytes.len(), "rendered PDF");
        Ok(bytes)
    }
}
