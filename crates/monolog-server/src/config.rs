use std::env;
use std::path::PathBuf;

use monolog_core::models::profile::Profile;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ASSETS_DIR: &str = "build";

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built single-page app.
    pub assets_dir: PathBuf,
    /// Optional JSON file seeding the profile record.
    pub profile_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            profile_path: None,
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `MONOLOG_ASSETS_DIR` and `MONOLOG_PROFILE`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| eyre::eyre!("invalid PORT {raw:?}: {e}"))?,
            None => defaults.port,
        };

        Ok(Self {
            port,
            assets_dir: get("MONOLOG_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            profile_path: get("MONOLOG_PROFILE").map(PathBuf::from),
        })
    }

    /// The seed profile, or the built-in sample when none is configured.
    pub fn load_profile(&self) -> eyre::Result<Profile> {
        let Some(path) = &self.profile_path else {
            return Ok(Profile::sample());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read profile at {}: {e}", path.display()))?;
        let profile: Profile = serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("invalid profile at {}: {e}", path.display()))?;

        tracing::info!(path = %path.display(), "profile seed loaded");
        Ok(profile)
    }
}
