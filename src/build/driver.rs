use std::fmt;

use clap::ValueEnum;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::Result,
    packaging::{AndroidPackager, BuildReport, Packager, PlymouthPackager},
};

/// Which outputs to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildTarget {
    /// Android boot animation, then Plymouth theme
    #[default]
    All,
    /// Android `bootanimation.zip` files only
    Android,
    /// Plymouth theme folder only
    Plymouth,
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildTarget::All => "all",
            BuildTarget::Android => "android",
            BuildTarget::Plymouth => "plymouth",
        };
        f.write_str(name)
    }
}

/// Runs the packagers selected by a [`BuildTarget`]
pub struct BuildDriver {
    config: Config,
}

impl BuildDriver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Packagers for `target`, in run order
    pub fn packagers(&self, target: BuildTarget) -> Vec<Box<dyn Packager>> {
        let android = || Box::new(AndroidPackager::new(self.config.clone())) as Box<dyn Packager>;
        let plymouth = || Box::new(PlymouthPackager::new(self.config.clone())) as Box<dyn Packager>;

        match target {
            BuildTarget::All => vec![android(), plymouth()],
            BuildTarget::Android => vec![android()],
            BuildTarget::Plymouth => vec![plymouth()],
        }
    }

    /// Build `target`. The first failing stage aborts the run and the error
    /// names that stage.
    pub fn run(&self, target: BuildTarget) -> Result<Vec<BuildReport>> {
        info!("Building target '{}' for theme '{}'", target, self.config.theme.name);

        let mut reports = Vec::new();
        for packager in self.packagers(target) {
            info!("Starting {} build", packager.name());

            let report = packager.package().map_err(|e| {
                debug!("{} build failed: {}", packager.name(), e);
                e.in_stage(packager.name())
            })?;

            info!("✓ {} build done: {} outputs, {} frames",
                  report.target, report.outputs.len(), report.frame_count);
            reports.push(report);
        }

        Ok(reports)
    }
}
