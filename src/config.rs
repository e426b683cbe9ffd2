//! OCI profile configuration.
//!
//! An experiment may pass a full configuration record explicitly; when it
//! does not, the profile is read from the local OCI config file
//! (`~/.oci/config`, overridable via `OCI_CONFIG_FILE`). The file is the
//! usual INI layout with one section per profile.

use crate::error::{ActivityError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Profile used when the caller does not name one.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// An OCI configuration record.
///
/// `compartment` and `load_balancer` are extension defaults consulted when
/// an action or probe is invoked without an explicit scope.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OciConfig {
    #[serde(default)]
    pub tenancy: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub key_file: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Default compartment for compartment-scoped activities.
    #[serde(default)]
    pub compartment: Option<String>,
    /// Default load balancer for backend-set activities.
    #[serde(default)]
    pub load_balancer: Option<String>,
    /// Session token used to authenticate API calls.
    #[serde(default)]
    pub security_token_file: Option<String>,
}

impl OciConfig {
    /// Get the config file path (env override first, then `~/.oci/config`)
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("OCI_CONFIG_FILE") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|p| p.join(".oci").join("config"))
    }

    /// Load the named profile from the local OCI config file.
    pub fn from_file(profile: &str) -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Err(ActivityError::Config(
                "could not determine a home directory for the OCI config file".into(),
            ));
        };
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ActivityError::Config(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::parse_profile(&content, profile).ok_or_else(|| {
            ActivityError::Config(format!("profile [{}] not found in {}", profile, path.display()))
        })
    }

    /// Parse one `[profile]` section out of INI-style config content.
    fn parse_profile(content: &str, profile: &str) -> Option<Self> {
        let header = format!("[{}]", profile);
        let mut in_section = false;
        let mut found = false;
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') {
                in_section = line == header;
                found |= in_section;
                continue;
            }
            if !in_section {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                "tenancy" => config.tenancy = Some(value),
                "user" => config.user = Some(value),
                "fingerprint" => config.fingerprint = Some(value),
                "key_file" => config.key_file = Some(value),
                "region" => config.region = Some(value),
                "compartment" => config.compartment = Some(value),
                "load_balancer" => config.load_balancer = Some(value),
                "security_token_file" => config.security_token_file = Some(value),
                _ => {}
            }
        }

        found.then_some(config)
    }

    /// Check that the record can be used to reach the control plane.
    pub fn validate(&self) -> Result<()> {
        if self.tenancy.is_none() {
            return Err(ActivityError::Config("tenancy is not set".into()));
        }
        if self.region.is_none() {
            return Err(ActivityError::Config("region is not set".into()));
        }
        Ok(())
    }

    /// Resolve the configuration an activity should run with: an explicit
    /// record carrying a tenancy wins, anything else falls back to the
    /// profile file.
    pub fn resolve(explicit: Option<OciConfig>) -> Result<Self> {
        let config = match explicit {
            Some(config) if config.tenancy.is_some() => config,
            _ => Self::from_file(DEFAULT_PROFILE)?,
        };
        config.validate()?;
        Ok(config)
    }
}
