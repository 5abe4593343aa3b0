use crate::browser::{BrowserDriver, config::LaunchOptions};
use anyhow::{Context, anyhow};
use async_trait::async_trait;
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Chrome/Chromium instance driven over the DevTools protocol.
///
/// `headless_chrome` is blocking, so every call is moved onto tokio's blocking pool.
pub struct ChromeBrowser {
    /// Dropping the `Browser` terminates the Chrome process
    browser: Option<Browser>,

    /// Tab opened at launch; all navigation happens here
    tab: Arc<Tab>,
}

impl ChromeBrowser {
    /// Launch a new browser instance with the given options
    pub async fn launch(options: LaunchOptions) -> anyhow::Result<Self> {
        blocking(move || Self::launch_blocking(options)).await
    }

    fn launch_blocking(options: LaunchOptions) -> anyhow::Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // The default idle timeout of 30 seconds would kill a session the agent is still thinking about
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.path = options.chrome_path;
        launch_opts.user_data_dir = options.user_data_dir;
        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).context("failed to launch Chrome")?;
        let tab = browser.new_tab().context("failed to create tab")?;

        Ok(Self { browser: Some(browser), tab })
    }
}

#[async_trait]
impl BrowserDriver for ChromeBrowser {
    async fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        let tab = self.tab.clone();
        let url = url.to_string();
        blocking(move || {
            tab.navigate_to(&url)?.wait_until_navigated()?;
            Ok(())
        })
        .await
    }

    async fn body_text(&mut self) -> anyhow::Result<String> {
        let tab = self.tab.clone();
        blocking(move || tab.find_element("body")?.get_inner_text()).await
    }

    async fn quit(&mut self) -> anyhow::Result<()> {
        let Some(browser) = self.browser.take() else {
            return Ok(());
        };
        let tab = self.tab.clone();
        // The browser moves into the closure so the process is reaped even if closing the tab fails
        blocking(move || {
            let closed = tab.close(false).map(|_| ()).context("failed to close tab");
            drop(browser);
            closed
        })
        .await
    }
}

/// Run a blocking driver call off the async runtime, turning a panic into an error
async fn blocking<T, F>(f: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow!("browser driver task failed: {}", e))?
}
