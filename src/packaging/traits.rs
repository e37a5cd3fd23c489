use std::path::PathBuf;

use crate::error::Result;

/// A build target that writes one kind of boot-splash output
pub trait Packager {
    /// Short name of the target, used in logs and error messages
    fn name(&self) -> &str;

    /// Build every output of this target from scratch
    ///
    /// Any existing output of the target is replaced. On error no partial
    /// output directory is left behind for the unit that failed.
    fn package(&self) -> Result<BuildReport>;
}

/// Summary of a finished packaging run
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Name of the packager that produced this report
    pub target: String,

    /// Archives or directories written
    pub outputs: Vec<PathBuf>,

    /// Frames per output
    pub frame_count: usize,
}
