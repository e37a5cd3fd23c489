use std::path::PathBuf;

use image::RgbaImage;

/// File layout of a theme folder, nothing decoded yet
#[derive(Debug, Clone)]
pub struct ThemeManifest {
    /// Theme folder the paths below live in
    pub root: PathBuf,

    /// The `top.<ext>` logo
    pub logo: PathBuf,

    /// Frame files, sorted by file name
    pub frames: Vec<PathBuf>,
}

impl ThemeManifest {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// One decoded bottom frame
#[derive(Debug, Clone)]
pub struct FrameImage {
    /// Source file name, e.g. `bottom_007.png`
    pub name: String,
    pub image: RgbaImage,
}

impl FrameImage {
    pub fn new<S: Into<String>>(name: S, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// A fully decoded theme
#[derive(Debug, Clone)]
pub struct ThemeAssets {
    pub logo: RgbaImage,

    /// Frames in file name order
    pub frames: Vec<FrameImage>,
}

impl ThemeAssets {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
