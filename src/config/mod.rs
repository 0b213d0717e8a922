use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nz-tours")]
#[command(about = "Conversation core for the NZ Tours travel assistant")]
pub struct CliConfig {
    #[arg(
        long,
        env = "SHEETS_ENDPOINT",
        default_value = "https://sheets.googleapis.com"
    )]
    pub sheets_endpoint: String,

    #[arg(long, env = "GOOGLE_SHEETS_ID", default_value = "")]
    pub sheet_id: String,

    #[arg(
        long,
        env = "GOOGLE_SHEETS_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub sheets_api_key: String,

    #[arg(
        long,
        env = "GEMINI_ENDPOINT",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_endpoint: String,

    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, default_value = "300")]
    pub cache_ttl_seconds: u64,

    #[arg(long, default_value = "10")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn sheets_endpoint(&self) -> &str {
        &self.sheets_endpoint
    }

    fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    fn sheets_api_key(&self) -> &str {
        &self.sheets_api_key
    }

    fn gemini_endpoint(&self) -> &str {
        &self.gemini_endpoint
    }

    fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    fn cache_ttl_seconds(&self) -> u64 {
        self.cache_ttl_seconds
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("sheets_endpoint", &self.sheets_endpoint)?;
        validate_url("gemini_endpoint", &self.gemini_endpoint)?;
        validate_positive_number("cache_ttl_seconds", self.cache_ttl_seconds, 1)?;
        validate_positive_number("request_timeout_seconds", self.request_timeout_seconds, 1)?;
        Ok(())
    }
}
