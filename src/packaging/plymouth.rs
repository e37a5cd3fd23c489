use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    assets::AssetLoader,
    config::Config,
    error::{Result, TemplateError},
    packaging::{
        output::OutputDir,
        template::{substitute, unpad_numbers},
        traits::{BuildReport, Packager},
    },
};

/// Token that always carries the number of frames in the theme
pub const NUM_IMAGES_TOKEN: &str = "NUM_IMAGES";

/// Builds the Plymouth splash theme folder
pub struct PlymouthPackager {
    config: Config,
}

impl PlymouthPackager {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn template_path(&self, extension: &str) -> PathBuf {
        self.config
            .scripts_dir()
            .join(format!("{}.{}", self.config.plymouth.theme, extension))
    }

    fn read_template(path: &Path) -> Result<Vec<u8>> {
        let bytes = fs::read(path)
            .map_err(|_| TemplateError::ReadFailed { path: path.display().to_string() })?;
        Ok(bytes)
    }

    /// Token values for the `.script` template.
    ///
    /// Configured replacements plus `NUM_IMAGES`; the computed frame count
    /// overrides any configured value.
    pub fn script_values(&self, frame_count: usize) -> BTreeMap<String, String> {
        let mut values = self.config.plymouth.script_replacements.clone();
        values.insert(NUM_IMAGES_TOKEN.to_string(), frame_count.to_string());
        values
    }

    /// Copy every regular file of `source` into `dest` with unpadded names
    fn copy_theme_files(source: &Path, dest: &Path) -> Result<usize> {
        let mut files = Vec::new();
        for entry in fs::read_dir(source)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        for path in &files {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            let target = dest.join(unpad_numbers(&name));

            if target.exists() {
                warn!("{:?} overwrites an earlier file with the same unpadded name", path);
            }
            debug!("Copying {:?} -> {:?}", path, target);
            fs::copy(path, &target)?;
        }

        Ok(files.len())
    }
}

impl Packager for PlymouthPackager {
    fn name(&self) -> &str {
        "plymouth"
    }

    fn package(&self) -> Result<BuildReport> {
        let manifest = AssetLoader::discover(self.config.theme_dir())?;

        let descriptor_path = self.template_path("plymouth");
        let script_path = self.template_path("script");

        // Templates are read up front so a missing one leaves no output behind.
        let descriptor = Self::read_template(&descriptor_path)?;
        let script = String::from_utf8(Self::read_template(&script_path)?).map_err(|_| {
            TemplateError::ReadFailed { path: script_path.display().to_string() }
        })?;

        let out = OutputDir::reset(self.config.plymouth_dir())?;

        info!("Copying theme assets from {:?}", manifest.root);
        let copied = Self::copy_theme_files(&manifest.root, out.path())?;
        debug!("Copied {} files", copied);

        if let Some(name) = descriptor_path.file_name() {
            fs::write(out.join(name), &descriptor)?;
        }

        info!("Substituting {:?} ({} frames)", script_path, manifest.frame_count());
        let values = self.script_values(manifest.frame_count());
        let rendered = substitute(&script, self.config.plymouth.find_char, &values);
        if let Some(name) = script_path.file_name() {
            fs::write(out.join(name), rendered)?;
        }

        Ok(BuildReport {
            target: self.name().to_string(),
            outputs: vec![out.commit()],
            frame_count: manifest.frame_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn test_config(root: &Path) -> Config {
        let mut config = Config::default();
        config.paths.assets = root.join("assets");
        config.paths.distribute = root.join("dist");
        config
    }

    fn setup(root: &Path, script: &str) {
        let theme = root.join("assets/themes/main");
        let scripts = root.join("assets/scripts");
        fs::create_dir_all(&theme).unwrap();
        fs::create_dir_all(&scripts).unwrap();

        for name in ["top.png", "bottom_000.png", "bottom_001.png", "bottom_010.png"] {
            RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]))
                .save(theme.join(name))
                .unwrap();
        }
        fs::write(theme.join("lock.png"), b"not decoded").unwrap();

        fs::write(
            scripts.join("main_custom.plymouth"),
            "[Plymouth Theme]\nName=%PLYMOUTH_THEME%\n",
        )
        .unwrap();
        fs::write(scripts.join("main_custom.script"), script).unwrap();
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_package_layout() {
        let dir = tempdir().unwrap();
        setup(dir.path(), "message = \"%PASS_MSG% (%NUM_IMAGES%)\";\n");

        let report = PlymouthPackager::new(test_config(dir.path())).package().unwrap();
        let out = dir.path().join("dist/plymouth");
        assert_eq!(report.outputs, vec![out.clone()]);
        assert_eq!(report.frame_count, 3);

        assert_eq!(
            listing(&out),
            vec![
                "bottom_000.png",
                "bottom_1.png",
                "bottom_10.png",
                "lock.png",
                "main_custom.plymouth",
                "main_custom.script",
                "top.png",
            ]
        );

        let script = fs::read_to_string(out.join("main_custom.script")).unwrap();
        assert_eq!(script, "message = \"Authenticate (3)\";\n");

        // the descriptor is copied verbatim
        let descriptor = fs::read_to_string(out.join("main_custom.plymouth")).unwrap();
        assert_eq!(descriptor, "[Plymouth Theme]\nName=%PLYMOUTH_THEME%\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_frames_are_copied_as_files() {
        let dir = tempdir().unwrap();
        setup(dir.path(), "%NUM_IMAGES%");
        let theme = dir.path().join("assets/themes/main");
        let store = dir.path().join("store");
        fs::create_dir_all(&store).unwrap();
        RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]))
            .save(store.join("frame.png"))
            .unwrap();
        std::os::unix::fs::symlink(store.join("frame.png"), theme.join("bottom_020.png")).unwrap();

        let report = PlymouthPackager::new(test_config(dir.path())).package().unwrap();
        assert_eq!(report.frame_count, 4);

        let out = dir.path().join("dist/plymouth");
        let copied = out.join("bottom_20.png");
        assert!(!fs::symlink_metadata(&copied).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&copied).unwrap(), fs::read(store.join("frame.png")).unwrap());
        assert_eq!(fs::read_to_string(out.join("main_custom.script")).unwrap(), "4");
    }

    #[test]
    fn test_frame_count_overrides_configured_value() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path());
        config
            .plymouth
            .script_replacements
            .insert(NUM_IMAGES_TOKEN.to_string(), "99".to_string());

        let values = PlymouthPackager::new(config).script_values(7);
        assert_eq!(values.get(NUM_IMAGES_TOKEN).map(String::as_str), Some("7"));
        assert_eq!(values.get("BULLET_CHAR").map(String::as_str), Some("•"));
    }

    #[test]
    fn test_missing_script_template() {
        let dir = tempdir().unwrap();
        setup(dir.path(), "");
        fs::remove_file(dir.path().join("assets/scripts/main_custom.script")).unwrap();

        let err = PlymouthPackager::new(test_config(dir.path())).package().unwrap_err();
        assert!(matches!(err, crate::BuildError::Template(TemplateError::ReadFailed { .. })));
        assert!(!dir.path().join("dist/plymouth").exists());
    }

    #[test]
    fn test_missing_descriptor_template() {
        let dir = tempdir().unwrap();
        setup(dir.path(), "");
        fs::remove_file(dir.path().join("assets/scripts/main_custom.plymouth")).unwrap();

        let err = PlymouthPackager::new(test_config(dir.path())).package().unwrap_err();
        assert!(matches!(err, crate::BuildError::Template(TemplateError::ReadFailed { .. })));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let dir = tempdir().unwrap();
        setup(dir.path(), "%BULLET_CHAR% %NUM_IMAGES% %UNKNOWN%\n");
        let packager = PlymouthPackager::new(test_config(dir.path()));
        let out = dir.path().join("dist/plymouth");

        packager.package().unwrap();
        let first: Vec<(String, Vec<u8>)> = listing(&out)
            .into_iter()
            .map(|n| { let bytes = fs::read(out.join(&n)).unwrap(); (n, bytes) })
            .collect();

        fs::remove_dir_all(&out).unwrap();
        packager.package().unwrap();
        let second: Vec<(String, Vec<u8>)> = listing(&out)
            .into_iter()
            .map(|n| { let bytes = fs::read(out.join(&n)).unwrap(); (n, bytes) })
            .collect();

        assert_eq!(first, second);
        let script = fs::read_to_string(out.join("main_custom.script")).unwrap();
        assert_eq!(script, "• 3 %UNKNOWN%\n");
    }
}
