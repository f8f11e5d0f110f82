use crate::domain::constants::CONFIG_FILE_NAME;
use crate::domain::models::{DocsError, Settings, Workspace};
use std::path::{Path, PathBuf};

/// Loads `docgate.toml` from `root`, or `explicit` when given. A missing
/// default file means all defaults; a missing explicit file is an error.
pub fn load_settings(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let path: PathBuf = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(DocsError::ConfigMissing(p.display().to_string()).into());
            }
            p.to_path_buf()
        }
        None => {
            let p = root.join(CONFIG_FILE_NAME);
            if !p.exists() {
                return Ok(Settings::default());
            }
            p
        }
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| DocsError::ConfigInvalid {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let settings: Settings = toml::from_str(&raw).map_err(|e| DocsError::ConfigInvalid {
        path: path.display().to_string(),
        reason: e.message().to_string(),
    })?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

pub fn open_workspace(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Workspace> {
    Ok(Workspace {
        root: root.to_path_buf(),
        settings: load_settings(root, explicit)?,
    })
}
