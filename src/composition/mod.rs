//! # Composition
//!
//! Builds the per-resolution frame set for a boot animation: the theme logo is
//! resized to a third of the screen's shorter side and stacked above every
//! bottom frame on a transparent canvas.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bootanim_builder::composition::{Compositor, Resolution};
//!
//! # fn main() -> anyhow::Result<()> {
//! let logo = image::open("assets/themes/main/top.png")?.to_rgba8();
//! let frame = image::open("assets/themes/main/bottom_000.png")?.to_rgba8();
//!
//! let resolution = Resolution::new("skipjack", 360, 360);
//! let resized = Compositor::resize_logo(&logo, &resolution);
//! let composite = Compositor::compose(&resized, &frame);
//! println!("{}x{}", composite.width(), composite.height());
//! # Ok(())
//! # }
//! ```

pub mod compositor;
pub mod types;

pub use compositor::Compositor;
pub use types::{CompositeFrame, ResizedLogo, Resolution};
