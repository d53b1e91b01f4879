use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "CRYOBANK_CONFIG";

const DEFAULT_CLINICIAN: &str = "Unassigned";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryobankConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Name written as the author of composed notes and audit events.
    pub clinician: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Tera template replacing the built-in note layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_template: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl Default for CryobankConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            clinician: DEFAULT_CLINICIAN.to_string(),
            log_format: LogFormat::default(),
            note_template: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.cryobank.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(config_dir()?.join("config.json")),
    }
}

/// Load the config, falling back to defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<CryobankConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CryobankConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<CryobankConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CryobankConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update cryobank."
        ));
    }

    // v0 → v1: `author` renamed to `clinician`, `created_at` became required
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let clinician = obj
            .remove("author")
            .unwrap_or_else(|| serde_json::Value::String(DEFAULT_CLINICIAN.to_string()));
        obj.entry("clinician").or_insert(clinician);
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (author → clinician)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CryobankConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_v0_renames_author() {
        let json = serde_json::json!({ "author": "Dr. Mensah" });
        let migrated = migrate(json, 0).unwrap();
        assert_eq!(migrated["clinician"], "Dr. Mensah");
        assert_eq!(migrated["config_version"], 1);
        assert!(migrated.get("author").is_none());
        assert!(migrated["created_at"].is_string());
    }

    #[test]
    fn migrate_rejects_future_versions() {
        let err = migrate(serde_json::json!({}), CURRENT_VERSION + 1).unwrap_err();
        assert!(err.to_string().contains("newer than this build supports"));
    }

    #[test]
    fn migrate_is_a_no_op_at_current_version() {
        let json = serde_json::json!({ "config_version": 1, "clinician": "x" });
        assert_eq!(migrate(json.clone(), CURRENT_VERSION).unwrap(), json);
    }
}
