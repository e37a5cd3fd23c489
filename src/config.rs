use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    composition::Resolution,
    error::{ConfigError, Result},
};

/// Main configuration for the boot animation builder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Theme selection
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Input and output roots
    #[serde(default)]
    pub paths: PathsConfig,

    /// Android boot animation settings
    #[serde(default)]
    pub android: AndroidConfig,

    /// Plymouth splash theme settings
    #[serde(default)]
    pub plymouth: PlymouthConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.theme.name.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "theme.name".to_string(),
                value: String::new(),
            }.into());
        }
        self.android.validate()?;
        self.plymouth.validate()?;
        Ok(())
    }

    /// Directory holding the selected theme's images
    pub fn theme_dir(&self) -> PathBuf {
        self.paths.assets.join("themes").join(&self.theme.name)
    }

    /// Directory holding the `.plymouth` and `.script` templates
    pub fn scripts_dir(&self) -> PathBuf {
        self.paths.assets.join("scripts")
    }

    pub fn android_dir(&self) -> PathBuf {
        self.paths.distribute.join(&self.android.folder)
    }

    pub fn plymouth_dir(&self) -> PathBuf {
        self.paths.distribute.join(&self.plymouth.folder)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Name of the folder under `assets/themes/`
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { name: "main".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the asset tree (`themes/` and `scripts/`)
    pub assets: PathBuf,

    /// Root every build output is written under
    pub distribute: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            distribute: PathBuf::from("dist"),
        }
    }
}

/// Android boot animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    /// Subfolder of the distribute root
    pub folder: String,

    /// Playback rate written to the descriptor
    pub refresh_rate: u32,

    /// Folder inside the archive holding the frames
    pub frame_folder: String,

    /// Name of the descriptor entry inside the archive
    pub description_file: String,

    /// Archive file name
    pub output_name: String,

    /// Target screens, name -> [width, height]
    pub resolutions: BTreeMap<String, [u32; 2]>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        let mut resolutions = BTreeMap::new();
        resolutions.insert("alioth".to_string(), [1080, 2400]);
        resolutions.insert("beryllium".to_string(), [1080, 2246]);
        resolutions.insert("skipjack".to_string(), [360, 360]);

        Self {
            folder: "android".to_string(),
            refresh_rate: 60,
            frame_folder: "part0".to_string(),
            description_file: "desc.txt".to_string(),
            output_name: "bootanimation.zip".to_string(),
            resolutions,
        }
    }
}

impl AndroidConfig {
    /// Resolution table in name order
    pub fn resolutions(&self) -> Vec<Resolution> {
        self.resolutions
            .iter()
            .map(|(name, [width, height])| Resolution::new(name.clone(), *width, *height))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.refresh_rate == 0 {
            return Err(ConfigError::InvalidValue {
                key: "android.refresh_rate".to_string(),
                value: self.refresh_rate.to_string()
            }.into());
        }

        if self.resolutions.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "android.resolutions".to_string(),
                value: "{}".to_string()
            }.into());
        }

        for (name, [width, height]) in &self.resolutions {
            if *width == 0 || *height == 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("android.resolutions.{}", name),
                    value: format!("{}x{}", width, height)
                }.into());
            }
        }

        for (key, value) in [
            ("android.folder", &self.folder),
            ("android.frame_folder", &self.frame_folder),
            ("android.description_file", &self.description_file),
            ("android.output_name", &self.output_name),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: String::new()
                }.into());
            }
        }

        Ok(())
    }
}

/// Plymouth theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlymouthConfig {
    /// Subfolder of the distribute root
    pub folder: String,

    /// Base name of the `.plymouth` and `.script` templates
    pub theme: String,

    /// Token delimiter in the script template
    pub find_char: char,

    /// Token -> value table for the script template
    pub script_replacements: BTreeMap<String, String>,
}

impl Default for PlymouthConfig {
    fn default() -> Self {
        let theme = "main_custom".to_string();
        let script_replacements = [
            ("LOGO_MESSAGE", ""),
            ("PASS_MSG", "Authenticate"),
            ("QUESTION_PROMPT", "Answer"),
            ("PASSWORD_TYPING", "..."),
            ("PASSWORD_TYPING_ALT", "---"),
            ("BULLET_CHAR", "•"),
            ("PLYMOUTH_THEME", theme.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            folder: "plymouth".to_string(),
            theme,
            find_char: '%',
            script_replacements,
        }
    }
}

impl PlymouthConfig {
    fn validate(&self) -> Result<()> {
        if self.theme.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "plymouth.theme".to_string(),
                value: String::new()
            }.into());
        }

        if self.folder.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "plymouth.folder".to_string(),
                value: String::new()
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_resolutions_are_name_ordered() {
        let names: Vec<String> = Config::default()
            .android
            .resolutions()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["alioth", "beryllium", "skipjack"]);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original_config = Config::default();

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config.android.resolutions, loaded_config.android.resolutions);
        assert_eq!(original_config.plymouth.find_char, loaded_config.plymouth.find_char);
        assert_eq!(
            original_config.plymouth.script_replacements,
            loaded_config.plymouth.script_replacements
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[theme]\nname = \"dark\"\n").unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.theme.name, "dark");
        assert_eq!(config.android.refresh_rate, 60);
        assert_eq!(config.theme_dir(), PathBuf::from("assets/themes/dark"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, crate::BuildError::Config(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_zero_sized_resolution_rejected() {
        let mut config = Config::default();
        config.android.resolutions.insert("broken".to_string(), [0, 720]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_refresh_rate_rejected() {
        let mut config = Config::default();
        config.android.refresh_rate = 0;
        assert!(config.validate().is_err());
    }
}
