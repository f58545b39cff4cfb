pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const ENROLL_PATH: &str = "/upload";
const SEARCH_PATH: &str = "/search";
const HEALTH_PATH: &str = "/health";

/// Where the recognition backend lives.
///
/// The base address is baked in at build time from `FACEREC_API_BASE`
/// (the wasm bundle has no process environment at runtime).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };

        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("FACEREC_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn enroll_url(&self) -> String {
        format!("{}{}", self.base_url, ENROLL_PATH)
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
