//! # Bootanim-Builder
//!
//! Build device-specific boot splash assets from a single theme folder.
//!
//! A theme is one `top.<ext>` logo plus a sequence of `*bottom*` frames. For
//! every configured screen resolution the logo is resized and stacked over each
//! frame, and the results are packed into an Android `bootanimation.zip`. The
//! same raw frames also produce a Plymouth splash theme with a templated
//! `.script` file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bootanim_builder::{BuildDriver, BuildTarget, Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let reports = BuildDriver::new(config).run(BuildTarget::All)?;
//! for report in reports {
//!     println!("{}: {:?}", report.target, report.outputs);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`assets`] - Theme folder discovery and decoding
//! - [`composition`] - Logo resizing and frame compositing
//! - [`packaging`] - Android archive and Plymouth theme writers
//! - [`build`] - Target selection and stage ordering
//! - [`config`] - Configuration management

pub mod assets;
pub mod build;
pub mod composition;
pub mod config;
pub mod error;
pub mod packaging;

// Re-export commonly used types for convenience
pub use crate::{
    build::{BuildDriver, BuildTarget},
    config::Config,
    error::{BuildError, Result},
    packaging::{BuildReport, Packager},
};
