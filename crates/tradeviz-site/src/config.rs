//! Build environment and output configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the build environment
pub const ENV_VAR: &str = "TRADEVIZ_ENV";

/// Base path the deployed site is served under
pub const PRODUCTION_BASE_PATH: &str = "/tradeviz";

/// Errors from reading the build configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// `TRADEVIZ_ENV` was set to something other than
    /// `development`/`production`
    #[error("unknown build environment: {value:?} (expected \"development\" or \"production\")")]
    UnknownEnvironment { value: String },
}

/// Build environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Base path the site is served under in this environment
    pub fn base_path(&self) -> &'static str {
        match self {
            Environment::Development => "",
            Environment::Production => PRODUCTION_BASE_PATH,
        }
    }
}

impl FromStr for Environment {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(SiteError::UnknownEnvironment {
                value: other.to_string(),
            }),
        }
    }
}

/// Static site build configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub environment: Environment,

    /// Output directory for prerendered pages
    pub pages_dir: String,

    /// Output directory for static assets
    pub assets_dir: String,

    /// Fallback page for client-side routes
    pub fallback: String,

    /// Whether to precompress build output
    pub precompress: bool,

    /// Path prefix the site is served under (empty in development)
    pub base_path: String,
}

impl SiteConfig {
    /// Configuration for the given environment with the standard output
    /// layout
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            pages_dir: "build".to_string(),
            assets_dir: "build".to_string(),
            fallback: "index.html".to_string(),
            precompress: false,
            base_path: environment.base_path().to_string(),
        }
    }

    /// Read the environment from `TRADEVIZ_ENV`
    ///
    /// An unset variable means development; a set but unrecognized value
    /// is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, SiteError> {
        let environment = match std::env::var(ENV_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };
        Ok(Self::new(environment))
    }

    /// Override the base path
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Override the fallback page
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Enable or disable precompression
    pub fn with_precompress(mut self, precompress: bool) -> Self {
        self.precompress = precompress;
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(Environment::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(SiteError::UnknownEnvironment { .. })
        ));
    }

    #[test]
    fn test_base_path_per_environment() {
        assert_eq!(SiteConfig::new(Environment::Development).base_path, "");
        assert_eq!(
            SiteConfig::new(Environment::Production).base_path,
            PRODUCTION_BASE_PATH
        );
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.pages_dir, "build");
        assert_eq!(config.assets_dir, "build");
        assert_eq!(config.fallback, "index.html");
        assert!(!config.precompress);
    }

    #[test]
    fn test_builders() {
        let config = SiteConfig::default()
            .with_base_path("/preview")
            .with_fallback("200.html")
            .with_precompress(true);
        assert_eq!(config.base_path, "/preview");
        assert_eq!(config.fallback, "200.html");
        assert!(config.precompress);
    }

    #[test]
    fn test_from_env() {
        // Unset: development. Set: parsed, with bad values rejected.
        std::env::remove_var(ENV_VAR);
        assert_eq!(SiteConfig::from_env().unwrap().environment, Environment::Development);

        std::env::set_var(ENV_VAR, "production");
        assert_eq!(SiteConfig::from_env().unwrap().environment, Environment::Production);

        std::env::set_var(ENV_VAR, "staging");
        assert!(SiteConfig::from_env().is_err());

        std::env::remove_var(ENV_VAR);
    }
}
