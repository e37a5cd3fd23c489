use thiserror::Error;

/// Main error type for the boot animation builder
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Packaging error: {0}")]
    Packaging(#[from] PackagingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{stage} build failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// Theme asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {what} in {path}")]
    NotFound { what: String, path: String },

    #[error("Failed to decode image {path}: {reason}")]
    DecodeFailed { path: String, reason: String },
}

/// Script and descriptor template errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template: {path}")]
    ReadFailed { path: String },
}

/// Output writing errors
#[derive(Error, Debug)]
pub enum PackagingError {
    #[error("Failed to prepare output directory {path}: {reason}")]
    OutputDirFailed { path: String, reason: String },

    #[error("Failed to write archive {path}: {reason}")]
    ArchiveFailed { path: String, reason: String },

    #[error("Failed to encode frame {index}: {reason}")]
    EncodeFailed { index: usize, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using BuildError
pub type Result<T> = std::result::Result<T, BuildError>;

impl BuildError {
    /// Tag an error with the build stage it came from
    pub fn in_stage<S: Into<String>>(self, stage: S) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(self),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Asset(AssetError::NotFound { what, path }) => {
                format!("Could not find {} under '{}'. Check the theme folder layout.", what, path)
            }
            Self::Asset(AssetError::DecodeFailed { path, .. }) => {
                format!("Could not decode image '{}'. Please check it is a supported format.", path)
            }
            Self::Template(TemplateError::ReadFailed { path }) => {
                format!("Template '{}' is missing or unreadable.", path)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Stage { stage, source } => {
                format!("{} build failed: {}", stage, source.user_message())
            }
            _ => self.to_string(),
        }
    }
}
