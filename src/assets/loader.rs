use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::assets::types::{FrameImage, ThemeAssets, ThemeManifest};
use crate::error::{AssetError, Result};

const LOGO_STEM: &str = "top";
const FRAME_MARKER: &str = "bottom";

/// Reads theme folders from disk
pub struct AssetLoader;

impl AssetLoader {
    /// Find the logo and frame files under `theme_root` without decoding them
    pub fn discover<P: AsRef<Path>>(theme_root: P) -> Result<ThemeManifest> {
        let root = theme_root.as_ref();

        if !root.is_dir() {
            return Err(AssetError::NotFound {
                what: "theme directory".to_string(),
                path: root.display().to_string(),
            }.into());
        }

        let mut logos = Vec::new();
        let mut frames = Vec::new();

        for entry in std::fs::read_dir(root)? {
            // Follows symlinks: themes are often link farms into a store.
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            if Self::is_logo(&path) {
                logos.push(path);
            } else if Self::is_frame(&path) {
                frames.push(path);
            }
        }

        logos.sort();
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if logos.len() > 1 {
            warn!("Found {} logo candidates in {:?}, using {:?}", logos.len(), root, logos[0]);
        }

        let logo = logos.into_iter().next().ok_or_else(|| AssetError::NotFound {
            what: "logo image (top.<ext>)".to_string(),
            path: root.display().to_string(),
        })?;

        if frames.is_empty() {
            return Err(AssetError::NotFound {
                what: "frame images (*bottom*)".to_string(),
                path: root.display().to_string(),
            }.into());
        }

        debug!("Theme {:?}: logo {:?}, {} frames", root, logo, frames.len());

        Ok(ThemeManifest {
            root: root.to_path_buf(),
            logo,
            frames,
        })
    }

    /// Discover and decode every image of a theme
    pub fn load<P: AsRef<Path>>(theme_root: P) -> Result<ThemeAssets> {
        let manifest = Self::discover(theme_root)?;
        Self::load_manifest(&manifest)
    }

    /// Decode the images a manifest points at
    pub fn load_manifest(manifest: &ThemeManifest) -> Result<ThemeAssets> {
        info!("Loading logo from {:?}", manifest.logo);
        let logo = Self::decode(&manifest.logo)?;

        info!("Loading {} bottom frames", manifest.frame_count());
        let frames = manifest
            .frames
            .iter()
            .map(|path| {
                let image = Self::decode(path)?;
                Ok(FrameImage::new(Self::file_name(path), image))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ThemeAssets { logo, frames })
    }

    fn decode(path: &Path) -> Result<RgbaImage> {
        let image = image::open(path).map_err(|e| AssetError::DecodeFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(image.to_rgba8())
    }

    fn is_logo(path: &Path) -> bool {
        path.file_stem().and_then(|s| s.to_str()) == Some(LOGO_STEM)
            && path.extension().is_some()
    }

    fn is_frame(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(FRAME_MARKER))
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
