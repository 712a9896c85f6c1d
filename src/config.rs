//! Settings file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::script::ScriptType;

/// qalpaq settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QalpaqConfig {
    /// Conversion target when auto mode sees mixed-script input
    #[serde(default = "default_mixed_target")]
    pub mixed_target: ScriptType,
    /// Char cap for the rawResponse echo in degraded parse results
    #[serde(default = "default_raw_response_limit")]
    pub raw_response_limit: usize,
}

fn default_mixed_target() -> ScriptType {
    ScriptType::Latin
}

fn default_raw_response_limit() -> usize {
    500
}

impl Default for QalpaqConfig {
    fn default() -> Self {
        Self {
            mixed_target: default_mixed_target(),
            raw_response_limit: default_raw_response_limit(),
        }
    }
}

/// Settings file path: $XDG_CONFIG_HOME/qalpaq/config.json
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_absolute() && p.is_dir())
                .map(|home| home.join(".config"))
        })
        .unwrap_or_else(|| {
            // no usable HOME: /var/tmp fallback (writable, safer than /tmp)
            PathBuf::from("/var/tmp")
        });
    base.join("qalpaq").join("config.json")
}

/// Loads settings (defaults when the file is missing or corrupt)
pub fn load_config() -> QalpaqConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt config at {}: {}", path.display(), e);
            QalpaqConfig::default()
        }),
        Err(_) => QalpaqConfig::default(),
    }
}

/// Saves settings
pub fn save_config(config: &QalpaqConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config dir: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("failed to serialize config: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("failed to write config: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QalpaqConfig::default();
        assert_eq!(config.mixed_target, ScriptType::Latin);
        assert_eq!(config.raw_response_limit, 500);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = QalpaqConfig {
            mixed_target: ScriptType::Cyrillic,
            raw_response_limit: 200,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: QalpaqConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.mixed_target, ScriptType::Cyrillic);
        assert_eq!(parsed.raw_response_limit, 200);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // older files without raw_response_limit fall back to the default
        let json = r#"{"mixed_target": "cyrillic"}"#;
        let config: QalpaqConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mixed_target, ScriptType::Cyrillic);
        assert_eq!(config.raw_response_limit, 500);
    }

    #[test]
    fn test_save_load_round_trip() {
        // the only test touching XDG_CONFIG_HOME in this process
        let dir = std::env::temp_dir().join(format!("qalpaq-config-{}", std::process::id()));
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        let config = QalpaqConfig {
            mixed_target: ScriptType::Cyrillic,
            raw_response_limit: 120,
        };
        save_config(&config).unwrap();

        let loaded = load_config();
        assert_eq!(loaded.mixed_target, ScriptType::Cyrillic);
        assert_eq!(loaded.raw_response_limit, 120);

        fs::remove_dir_all(&dir).ok();
    }
}
