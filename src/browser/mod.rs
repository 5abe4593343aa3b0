//! Browser session management
//!
//! - [`Engine`]: the browsers a session can be started with
//! - [`BrowserDriver`] / [`BrowserLauncher`]: the seam to the automation backends
//! - [`BrowserSession`]: the single, lock-guarded session owned by the server

pub mod chrome;
pub mod config;
pub mod firefox;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;

use crate::error::BrowserError;
use async_trait::async_trait;
use std::{fmt, str::FromStr};

/// Browser engine a session runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    Chrome,
    Firefox,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Chrome => "chrome",
            Engine::Firefox => "firefox",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = BrowserError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("chrome") {
            Ok(Engine::Chrome)
        } else if trimmed.eq_ignore_ascii_case("firefox") {
            Ok(Engine::Firefox)
        } else {
            Err(BrowserError::UnsupportedBrowser(name.to_string()))
        }
    }
}

/// A live browser session handle
#[async_trait]
pub trait BrowserDriver: Send {
    /// Load `url` and wait for the page to finish loading
    async fn navigate(&mut self, url: &str) -> anyhow::Result<()>;

    /// Rendered text of the page body
    async fn body_text(&mut self) -> anyhow::Result<String>;

    /// Release the session. The handle is not used again afterwards.
    async fn quit(&mut self) -> anyhow::Result<()>;
}

/// Acquires new browser sessions
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self, engine: Engine, options: &LaunchOptions) -> anyhow::Result<Box<dyn BrowserDriver>>;
}

/// Launcher backed by the real automation drivers: CDP for Chrome, WebDriver for Firefox
#[derive(Debug, Default, Clone, Copy)]
pub struct DriverLauncher;

#[async_trait]
impl BrowserLauncher for DriverLauncher {
    async fn launch(&self, engine: Engine, options: &LaunchOptions) -> anyhow::Result<Box<dyn BrowserDriver>> {
        match engine {
            Engine::Chrome => Ok(Box::new(chrome::ChromeBrowser::launch(options.clone()).await?)),
            Engine::Firefox => Ok(Box::new(firefox::FirefoxBrowser::connect(options).await?)),
        }
    }
}
