use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::{
    assets::{AssetLoader, ThemeAssets},
    composition::{CompositeFrame, Compositor, Resolution},
    config::Config,
    error::{AssetError, PackagingError, Result},
    packaging::{
        description::BootDescriptor,
        output::OutputDir,
        traits::{BuildReport, Packager},
    },
};

/// Builds one `bootanimation.zip` per configured resolution
pub struct AndroidPackager {
    config: Config,
}

impl AndroidPackager {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compose, describe and archive the theme for a single resolution.
    ///
    /// Returns the path of the written archive.
    pub fn package_resolution(
        &self,
        assets: &ThemeAssets,
        resolution: &Resolution,
    ) -> Result<PathBuf> {
        let android = &self.config.android;

        info!("Assembling {} frames for {} ({}x{})",
              assets.frame_count(), resolution.name, resolution.width, resolution.height);
        let frames = Compositor::compose_all(&assets.logo, &assets.frames, resolution);

        let first = frames.first().ok_or_else(|| AssetError::NotFound {
            what: "frame images (*bottom*)".to_string(),
            path: self.config.theme_dir().display().to_string(),
        })?;
        let descriptor = BootDescriptor::for_frame(first, android.refresh_rate, &android.frame_folder);
        debug!("{} descriptor: {:?}", resolution.name, descriptor.to_string());

        let out = OutputDir::reset(self.config.android_dir().join(&resolution.name))?;
        let archive_path = out.join(&android.output_name);

        info!("Zipping {:?}", archive_path);
        Self::write_archive_file(
            &archive_path,
            &android.description_file,
            &descriptor,
            &android.frame_folder,
            &frames,
        )?;

        out.commit();
        Ok(archive_path)
    }

    fn write_archive_file(
        path: &Path,
        description_file: &str,
        descriptor: &BootDescriptor,
        frame_folder: &str,
        frames: &[CompositeFrame],
    ) -> Result<()> {
        let file = File::create(path).map_err(|e| PackagingError::ArchiveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut writer = write_archive(
            BufWriter::new(file),
            &path.display().to_string(),
            description_file,
            descriptor,
            frame_folder,
            frames,
        )?;

        writer.flush().map_err(|e| PackagingError::ArchiveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Packager for AndroidPackager {
    fn name(&self) -> &str {
        "android"
    }

    fn package(&self) -> Result<BuildReport> {
        info!("Loading resolutions");
        let resolutions = self.config.android.resolutions();

        let assets = AssetLoader::load(self.config.theme_dir())?;

        // First failure aborts the remaining resolutions.
        let outputs = resolutions
            .iter()
            .map(|resolution| self.package_resolution(&assets, resolution))
            .collect::<Result<Vec<_>>>()?;

        Ok(BuildReport {
            target: self.name().to_string(),
            outputs,
            frame_count: assets.frame_count(),
        })
    }
}

/// Write a boot animation archive into `writer`.
///
/// Entries are stored uncompressed with a fixed timestamp, descriptor first,
/// then `<frame_folder>/partNNNNN.png` in frame order, so identical inputs
/// always give identical bytes.
pub fn write_archive<W: Write + Seek>(
    writer: W,
    label: &str,
    description_file: &str,
    descriptor: &BootDescriptor,
    frame_folder: &str,
    frames: &[CompositeFrame],
) -> Result<W> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default());

    let archive_err = |reason: String| PackagingError::ArchiveFailed {
        path: label.to_string(),
        reason,
    };

    let mut zip = ZipWriter::new(writer);

    zip.start_file(description_file, options)
        .map_err(|e| archive_err(e.to_string()))?;
    zip.write_all(descriptor.to_string().as_bytes())
        .map_err(|e| archive_err(e.to_string()))?;

    for (index, frame) in frames.iter().enumerate() {
        let bytes = frame.to_png_bytes().map_err(|e| PackagingError::EncodeFailed {
            index,
            reason: e.to_string(),
        })?;

        let name = frame_entry_name(frame_folder, index);
        debug!("Adding {} ({} bytes)", name, bytes.len());

        zip.start_file(name, options)
            .map_err(|e| archive_err(e.to_string()))?;
        zip.write_all(&bytes)
            .map_err(|e| archive_err(e.to_string()))?;
    }

    let writer = zip.finish().map_err(|e| archive_err(e.to_string()))?;
    Ok(writer)
}

/// Archive path of frame `index`, e.g. `part0/part00042.png`
pub fn frame_entry_name(frame_folder: &str, index: usize) -> String {
    format!("{}/part{:05}.png", frame_folder, index)
}
