//! Page Renderer — drives the external rendering engine over CDP.
//!
//! The engine is held in `AppState` as `Arc<dyn PageEngine>` so handlers and
//! tests never depend on a real browser. Each render call gets its own
//! isolated browser session; layout state is not reentrant-safe, so sessions
//! are never shared between concurrent requests. Failures are terminal for
//! the request — no retries happen here.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures::StreamExt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::pdf::styles::Margins;

const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to configure rendering engine: {0}")]
    Launch(String),

    #[error("Rendering engine error: {0}")]
    Cdp(#[from] CdpError),
}

/// Capture options for one page. Paper size is fixed at A4; only margins
/// vary by style.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub margins: Margins,
    /// Background graphics stay in the artifact (the sidebar fill depends
    /// on it).
    pub print_background: bool,
}

impl PageOptions {
    pub fn a4(margins: Margins) -> Self {
        Self {
            margins,
            print_background: true,
        }
    }

    /// CDP takes paper dimensions and margins in inches.
    fn print_params(&self) -> PrintToPdfParams {
        PrintToPdfParams {
            print_background: Some(self.print_background),
            paper_width: Some(A4_WIDTH_IN),
            paper_height: Some(A4_HEIGHT_IN),
            margin_top: Some(self.margins.top_mm / MM_PER_INCH),
            margin_bottom: Some(self.margins.bottom_mm / MM_PER_INCH),
            margin_left: Some(self.margins.left_mm / MM_PER_INCH),
            margin_right: Some(self.margins.right_mm / MM_PER_INCH),
            ..Default::default()
        }
    }
}

/// The rendering engine seam. Implementations turn a composed HTML document
/// into a fixed-size binary page artifact.
#[async_trait]
pub trait PageEngine: Send + Sync {
    async fn render(&self, html: &str, options: &PageOptions) -> Result<Vec<u8>, EngineError>;
}

/// Production engine backed by headless Chromium over CDP.
///
/// Launches a fresh browser per render call and releases it on every exit
/// path, including capture failure, so sustained failures cannot leak
/// browser processes.
pub struct ChromiumEngine {
    chrome_executable: Option<String>,
}

impl ChromiumEngine {
    pub fn new(chrome_executable: Option<String>) -> Self {
        Self { chrome_executable }
    }

    fn browser_config(&self) -> Result<BrowserConfig, EngineError> {
        let mut builder = BrowserConfig::builder().no_sandbox();
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(EngineError::Launch)
    }

    /// Opens a page in the session, settles the layout, and captures it.
    /// The page is closed whether or not the capture succeeded.
    async fn capture_page(
        browser: &Browser,
        html: &str,
        options: &PageOptions,
    ) -> Result<Vec<u8>, EngineError> {
        let page = browser.new_page("about:blank").await?;
        let captured = Self::print(&page, html, options).await;
        if let Err(e) = page.close().await {
            warn!("Failed to close engine page: {e}");
        }
        captured
    }

    async fn print(
        page: &Page,
        html: &str,
        options: &PageOptions,
    ) -> Result<Vec<u8>, EngineError> {
        // set_content resolves once the document has loaded and laid out.
        page.set_content(html).await?;
        let bytes = page.pdf(options.print_params()).await?;
        Ok(bytes)
    }
}

#[async_trait]
impl PageEngine for ChromiumEngine {
    async fn render(&self, html: &str, options: &PageOptions) -> Result<Vec<u8>, EngineError> {
        let config = self.browser_config()?;
        let (mut browser, mut handler) = Browser::launch(config).await?;

        // The handler task pumps CDP events until the connection drops.
        let driver = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = Self::capture_page(&browser, html, options).await;

        // Release the session on every path, error paths included.
        if let Err(e) = browser.close().await {
            warn!("Failed to close rendering engine session: {e}");
        }
        let _ = browser.wait().await;
        driver.abort();

        match &result {
            Ok(bytes) => debug!("Captured page artifact ({} bytes)", bytes.len()),
            Err(e) => warn!("Page capture failed: {e}"),
        }
        result
    }
}
