use std::path::PathBuf;

/// Default WebDriver endpoint (geckodriver listens here out of the box)
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Options applied whenever a browser session is started
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible window (default: true)
    pub headless: bool,

    /// Browser window width in pixels
    pub window_width: u32,

    /// Browser window height in pixels
    pub window_height: u32,

    /// Custom Chrome/Chromium executable
    pub chrome_path: Option<PathBuf>,

    /// Persistent Chrome profile directory
    pub user_data_dir: Option<PathBuf>,

    /// Chrome sandboxing (disable when running as root in containers)
    pub sandbox: bool,

    /// WebDriver endpoint used for Firefox sessions
    pub webdriver_url: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            chrome_path: None,
            user_data_dir: None,
            sandbox: true,
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }
}
