/// Origin of the analysis backend when no override was given at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// REST and SSE routes exposed by the analysis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Upload,
    Preprocessing,
    Stats,
    Clustering,
    Regression,
    Trends,
    TrainStream,
    Predict,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Upload => "/api/upload/",
            Endpoint::Preprocessing => "/api/preprocessing",
            Endpoint::Stats => "/api/stats",
            Endpoint::Clustering => "/api/clustering",
            Endpoint::Regression => "/api/regression",
            Endpoint::Trends => "/api/trends",
            Endpoint::TrainStream => "/api/clustering/train/stream",
            Endpoint::Predict => "/api/clustering/predict",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Reads `LORA_API_BASE_URL` at compile time; the wasm bundle has no
    /// process environment to consult once it runs in the browser.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("LORA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.url(Endpoint::Upload), "http://localhost:8000/api/upload/");
        assert_eq!(
            config.url(Endpoint::TrainStream),
            "http://localhost:8000/api/clustering/train/stream"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://lora.example.org/");
        assert_eq!(config.url(Endpoint::Trends), "https://lora.example.org/api/trends");
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_BASE_URL);
    }
}
