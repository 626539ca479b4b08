use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Susi";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Defaults for the generation service.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.28;
pub const DEFAULT_MAX_TOKENS: u32 = 450;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the external text-generation service, injected into the
/// client at construction. There is no process-wide client state.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GenerationConfig {
    /// Read the API key (and optional base-URL override) from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ..Self::default()
        }
    }
}

/// Get the application data directory
/// ~/Susi/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Path of the care-directory database.
pub fn db_path() -> PathBuf {
    app_data_dir().join("health.db")
}

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "susi=info"
}
