use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Address the page is served on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Origin hosting the news API; `/api/news` is appended
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds for the news fetch
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_api_base() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api_base: default_api_base(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()
    }

    /// Load `path` if it exists, otherwise start from defaults, then apply
    /// `FOUR_WEEKS_*` environment overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(bind_addr) = lookup("FOUR_WEEKS_BIND_ADDR") {
            self.bind_addr = bind_addr;
        }
        if let Some(api_base) = lookup("FOUR_WEEKS_API_BASE") {
            self.api_base = api_base;
        }
        if let Some(timeout) = lookup("FOUR_WEEKS_REQUEST_TIMEOUT") {
            self.request_timeout = timeout.trim().parse().map_err(|e| {
                anyhow::anyhow!("FOUR_WEEKS_REQUEST_TIMEOUT must be a number of seconds: {}", e)
            })?;
        }
        self.validate()
    }

    fn validate(self) -> anyhow::Result<Self> {
        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be at least 1 second");
        }
        Ok(self)
    }
}
