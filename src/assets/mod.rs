//! # Theme Assets
//!
//! Discovers and decodes a theme folder: one `top.<ext>` logo and any number of
//! frames whose file name contains `bottom`. Frames are ordered by file name,
//! which fixes their index in every build output.

pub mod loader;
pub mod types;

pub use loader::AssetLoader;
pub use types::{FrameImage, ThemeAssets, ThemeManifest};
