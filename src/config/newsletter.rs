//! Newsletter configuration (ConvertKit)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Mailing-list provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterConfig {
    /// ConvertKit API key
    pub convertkit_api_key: SecretString,

    /// ConvertKit form id subscribers are added to
    pub convertkit_form_id: String,

    /// Base URL for the ConvertKit API (overridable for testing)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl NewsletterConfig {
    /// Validate newsletter configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.convertkit_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "NEWSLETTER__CONVERTKIT_API_KEY",
            ));
        }
        if self.convertkit_form_id.is_empty() {
            return Err(ValidationError::MissingRequired(
                "NEWSLETTER__CONVERTKIT_FORM_ID",
            ));
        }
        if !self.convertkit_form_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidConvertKitFormId);
        }
        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.convertkit.com".to_string()
}
