use crate::{browser::{BrowserDriver, BrowserLauncher, DriverLauncher, Engine, config::LaunchOptions},
            error::{BrowserError, Result}};
use std::sync::Arc;
use tokio::sync::Mutex;

const BROWSER_STARTED: &str = "Browser started successfully.";
const NAVIGATION_OK: &str = "Navigation successful.";
const BROWSER_CLOSED: &str = "Browser closed successfully.";

struct ActiveBrowser {
    engine: Engine,
    driver: Box<dyn BrowserDriver>,
}

/// The process-wide browser session.
///
/// Holds at most one live browser. All four operations take the same lock, so
/// concurrent tool calls queue up instead of racing on the session slot, and
/// every driver failure comes back as a [`BrowserError`] rather than a panic.
pub struct BrowserSession {
    launcher: Arc<dyn BrowserLauncher>,
    options: LaunchOptions,
    active: Mutex<Option<ActiveBrowser>>,
}

impl BrowserSession {
    /// Session backed by the real Chrome/Firefox drivers
    pub fn new(options: LaunchOptions) -> Self {
        Self::with_launcher(options, Arc::new(DriverLauncher))
    }

    pub fn with_launcher(options: LaunchOptions, launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self { launcher, options, active: Mutex::new(None) }
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    /// Engine of the running browser, `None` when no session is open
    pub async fn engine(&self) -> Option<Engine> {
        self.active.lock().await.as_ref().map(|active| active.engine)
    }

    /// Start a browser. `browser_name` is matched case-insensitively against "chrome" and "firefox".
    pub async fn start(&self, browser_name: &str) -> Result<String> {
        let mut active = self.active.lock().await;
        if let Some(current) = active.as_ref() {
            log::debug!("Rejecting start of {}: {} already running", browser_name, current.engine);
            return Err(BrowserError::AlreadyRunning);
        }

        let engine: Engine = browser_name.parse()?;
        let driver = self.launcher.launch(engine, &self.options).await.map_err(|e| {
            log::warn!("Failed to start {}: {:#}", engine, e);
            BrowserError::LaunchFailed(format!("{:#}", e))
        })?;

        *active = Some(ActiveBrowser { engine, driver });
        log::info!("Started {} session", engine);
        Ok(BROWSER_STARTED.to_string())
    }

    /// Load `url` in the running browser
    pub async fn navigate(&self, url: &str) -> Result<String> {
        let mut active = self.active.lock().await;
        let browser = active.as_mut().ok_or(BrowserError::NotStarted)?;

        browser.driver.navigate(url).await.map_err(|e| {
            log::warn!("Navigation to {} failed: {:#}", url, e);
            BrowserError::NavigationFailed(format!("{:#}", e))
        })?;

        log::debug!("Navigated to {}", url);
        Ok(NAVIGATION_OK.to_string())
    }

    /// Visible text of the current page body
    pub async fn read_text(&self) -> Result<String> {
        let mut active = self.active.lock().await;
        let browser = active.as_mut().ok_or(BrowserError::NotStarted)?;

        browser.driver.body_text().await.map_err(|e| {
            log::warn!("Reading page text failed: {:#}", e);
            BrowserError::ReadFailed(format!("{:#}", e))
        })
    }

    /// Close the running browser.
    ///
    /// The slot is cleared before the driver is asked to quit, so a failed
    /// release still leaves the session closed and a later `start` works.
    pub async fn close(&self) -> Result<String> {
        let mut active = self.active.lock().await;
        let Some(mut browser) = active.take() else {
            return Err(BrowserError::NotStarted);
        };

        let released = browser.driver.quit().await;
        drop(browser);

        match released {
            Ok(()) => {
                log::info!("Closed browser session");
                Ok(BROWSER_CLOSED.to_string())
            }
            Err(e) => {
                log::warn!("Browser did not shut down cleanly: {:#}", e);
                Err(BrowserError::CloseFailed(format!("{:#}", e)))
            }
        }
    }

    /// Close the browser if one is running. Used on the process shutdown path.
    pub async fn shutdown(&self) {
        match self.close().await {
            Ok(_) | Err(BrowserError::NotStarted) => {}
            Err(e) => log::warn!("{}", e),
        }
    }
}
