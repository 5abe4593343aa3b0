use crate::browser::{BrowserDriver, config::LaunchOptions};
use anyhow::Context;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};

/// Firefox session driven through a WebDriver endpoint (geckodriver)
pub struct FirefoxBrowser {
    client: Option<Client>,
}

impl FirefoxBrowser {
    /// Open a new session on the WebDriver server at `options.webdriver_url`
    pub async fn connect(options: &LaunchOptions) -> anyhow::Result<Self> {
        let mut builder = ClientBuilder::rustls().context("Failed to initialize rustls connector")?;
        builder.capabilities(capabilities(options));

        let webdriver_url = options.webdriver_url.trim_end_matches('/');
        let client = builder.connect(webdriver_url).await.with_context(|| {
            format!("Failed to connect to WebDriver at {webdriver_url}. Start geckodriver first")
        })?;

        Ok(Self { client: Some(client) })
    }

    fn client(&self) -> anyhow::Result<&Client> {
        self.client.as_ref().ok_or_else(|| anyhow::anyhow!("WebDriver session already closed"))
    }
}

fn capabilities(options: &LaunchOptions) -> Map<String, Value> {
    let mut args = vec![
        format!("--width={}", options.window_width),
        format!("--height={}", options.window_height),
    ];
    if options.headless {
        args.push("-headless".to_string());
    }

    let caps = json!({
        "browserName": "firefox",
        "moz:firefoxOptions": { "args": args }
    });
    caps.as_object().cloned().unwrap_or_default()
}

#[async_trait]
impl BrowserDriver for FirefoxBrowser {
    async fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.client()?.goto(url).await?;
        Ok(())
    }

    async fn body_text(&mut self) -> anyhow::Result<String> {
        let body = self.client()?.find(Locator::Css("body")).await?;
        Ok(body.text().await?)
    }

    async fn quit(&mut self) -> anyhow::Result<()> {
        match self.client.take() {
            Some(client) => Ok(client.close().await?),
            None => Ok(()),
        }
    }
}
