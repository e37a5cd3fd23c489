use std::fmt;

use crate::composition::CompositeFrame;

/// Contents of an Android `desc.txt`
///
/// First line is `<width> <height> <fps>`, second is a single looping part
/// (`p 0 0 <folder>`: loop forever, no pause, frames in `<folder>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootDescriptor {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
    pub folder: String,
}

impl BootDescriptor {
    pub fn new<S: Into<String>>(width: u32, height: u32, refresh_rate: u32, folder: S) -> Self {
        Self {
            width,
            height,
            refresh_rate,
            folder: folder.into(),
        }
    }

    /// Descriptor sized after the first composited frame
    pub fn for_frame<S: Into<String>>(frame: &CompositeFrame, refresh_rate: u32, folder: S) -> Self {
        Self::new(frame.width(), frame.height(), refresh_rate, folder)
    }
}

impl fmt::Display for BootDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.width, self.height, self.refresh_rate)?;
        writeln!(f, "p 0 0 {}", self.folder)
    }
}

/// Render a `desc.txt` body
pub fn describe(width: u32, height: u32, refresh_rate: u32, folder: &str) -> String {
    BootDescriptor::new(width, height, refresh_rate, folder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_format() {
        assert_eq!(describe(360, 244, 60, "part0"), "360 244 60\np 0 0 part0\n");
    }

    #[test]
    fn test_descriptor_from_frame() {
        let frame = crate::composition::Compositor::compose(
            &crate::composition::Compositor::resize_logo(
                &image::RgbaImage::new(512, 512),
                &crate::composition::Resolution::new("skipjack", 360, 360),
            ),
            &image::RgbaImage::new(360, 64),
        );

        let descriptor = BootDescriptor::for_frame(&frame, 60, "part0");
        assert_eq!(descriptor.to_string(), "360 244 60\np 0 0 part0\n");
    }
}
