//! # Packaging
//!
//! Turns theme assets into the on-disk layouts the two boot-splash runtimes
//! expect:
//!
//! - **Android**: one `bootanimation.zip` per resolution holding `desc.txt`
//!   and the composited frames as `part0/partNNNNN.png`, stored uncompressed
//! - **Plymouth**: a theme folder with the raw frames renamed to unpadded
//!   numbers, the `.plymouth` descriptor and a token-substituted `.script`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bootanim_builder::{config::Config, packaging::{AndroidPackager, Packager}};
//!
//! # fn main() -> anyhow::Result<()> {
//! let packager = AndroidPackager::new(Config::default());
//! let report = packager.package()?;
//! println!("wrote {} archives", report.outputs.len());
//! # Ok(())
//! # }
//! ```

pub mod android;
pub mod description;
pub mod output;
pub mod plymouth;
pub mod template;
pub mod traits;

pub use android::AndroidPackager;
pub use description::BootDescriptor;
pub use output::OutputDir;
pub use plymouth::PlymouthPackager;
pub use traits::{BuildReport, Packager};
