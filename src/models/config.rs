use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from fieldlens.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Root folder searched (recursively) for field_* tuning sample
    /// directories
    #[serde(default = "default_tuning_dir")]
    pub tuning_dir: PathBuf,

    /// When true, persist each tuning cell crop and cell-center crop as a
    /// PNG under the sample directory (cells/ and cell_centers/). Purely
    /// diagnostic; never affects the computed centroids.
    #[serde(default)]
    pub save_tuning_field_image_cells: bool,
}

fn default_tuning_dir() -> PathBuf {
    PathBuf::from("resources/tuning_fields")
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file is missing or unparsable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        tuning_dir = %config.tuning_dir.display(),
                        save_cells = config.save_tuning_field_image_cells,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(%e, path = %path.display(), "No config file, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tuning_dir: default_tuning_dir(),
            save_tuning_field_image_cells: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tuning_dir, PathBuf::from("resources/tuning_fields"));
        assert!(!config.save_tuning_field_image_cells);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "tuning_dir: samples/tuning\nsave_tuning_field_image_cells: true\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tuning_dir, PathBuf::from("samples/tuning"));
        assert!(config.save_tuning_field_image_cells);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let yaml = "save_tuning_field_image_cells: true\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tuning_dir, PathBuf::from("resources/tuning_fields"));
        assert!(config.save_tuning_field_image_cells);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/fieldlens.yaml"));
        assert!(!config.save_tuning_field_image_cells);
    }
}
