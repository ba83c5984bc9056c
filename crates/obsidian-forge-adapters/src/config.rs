/// Environment variable holding the backend origin.
pub const BACKEND_URL_ENV: &str = "OBSIDIAN_FORGE_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeClientConfig {
    pub backend_url: String,
    pub api_prefix: String,
}

impl Default for ForgeClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
        }
    }
}

impl ForgeClientConfig {
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Defaults, with the backend origin overridden by
    /// `OBSIDIAN_FORGE_BACKEND_URL` when set and non-empty. The browser build
    /// has no process environment, so there the value is read at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let override_url = std::env::var(BACKEND_URL_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let override_url = option_env!("OBSIDIAN_FORGE_BACKEND_URL").map(str::to_owned);

        match override_url {
            Some(url) if !url.trim().is_empty() => Self::with_backend_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// `backend_url` + `api_prefix` + `path`, with exactly one slash at each
    /// joint.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{prefix}/{path}")
        }
    }
}
