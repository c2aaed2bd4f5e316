use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{AsRefStr, Display, EnumString};

const PRODUCTION_URL: &str = "https://connect.squareup.com";
const SANDBOX_URL: &str = "https://connect.squareupsandbox.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// The API environment requests are sent to.
///
/// Names are matched case-insensitively, both by `FromStr` and when deserializing settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
    /// Uses [`ClientConfig::custom_url`].
    Custom,
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_str(&name).map_err(|_| {
            serde::de::Error::unknown_variant(&name, &["production", "sandbox", "custom"])
        })
    }
}

/// Settings the transport needs to reach the API.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Base URL used when `environment` is `custom`.
    pub custom_url: String,
    /// Value of the `Square-Version` header. Absent means the account default.
    pub square_version: Option<String>,
    pub timeout_seconds: u64,
    /// Appended to the user agent of every request.
    pub user_agent_detail: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            custom_url: PRODUCTION_URL.to_owned(),
            square_version: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent_detail: None,
        }
    }
}

impl ClientConfig {
    /// Base URL of the selected environment.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self.environment {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
            Environment::Custom => self.custom_url.trim_end_matches('/'),
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
