//! Configuration handling for the landing page

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured form endpoint
pub const ENDPOINT_ENV: &str = "CURSO_FORM_ENDPOINT";

/// Placeholder action meaning "no endpoint wired yet"
const PLACEHOLDER_ACTION: &str = "#";

/// User configuration for the page edition
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CourseConfig {
    /// URL of the hosted form-intake service
    pub form_endpoint: Option<String>,
    /// Contact phone in international format, used for the `tel:` link
    pub contact_phone: Option<String>,
    /// Contact phone as printed on the page
    pub contact_phone_display: Option<String>,
    /// WhatsApp destination number, digits only
    pub whatsapp_number: Option<String>,
    /// Pre-composed WhatsApp message
    pub whatsapp_message: Option<String>,
    /// Show the participant age field
    pub show_participant_age: Option<bool>,
    /// Show the poster splash on start-up
    pub show_splash: Option<bool>,
}

impl CourseConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("es", "parquesol", "curso-landing")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: CourseConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Endpoint to post registrations to, after the environment override.
    /// `None` when unset or left as the `#` placeholder.
    pub fn endpoint(&self) -> Option<String> {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        resolve_endpoint(from_env, self.form_endpoint.clone())
    }

    pub fn show_participant_age(&self) -> bool {
        self.show_participant_age.unwrap_or(false)
    }

    pub fn show_splash(&self) -> bool {
        self.show_splash.unwrap_or(true)
    }
}

fn resolve_endpoint(from_env: Option<String>, configured: Option<String>) -> Option<String> {
    from_env
        .or(configured)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty() && url != PLACEHOLDER_ACTION)
}
