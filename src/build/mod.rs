//! # Build Driver
//!
//! Picks the packagers for a CLI target and runs them in a fixed order
//! (Android before Plymouth), stopping at the first failure.

pub mod driver;

pub use driver::{BuildDriver, BuildTarget};
