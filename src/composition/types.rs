use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageError, RgbaImage};

/// A named target screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Device codename, used as the output folder name
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new<S: Into<String>>(name: S, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Side of the square logo for this screen: a third of the shorter side
    pub fn logo_side(&self) -> u32 {
        self.width.min(self.height) / 3
    }
}

/// The theme logo resampled for one resolution. Always square.
#[derive(Clone, Debug)]
pub struct ResizedLogo {
    buffer: RgbaImage,
}

impl ResizedLogo {
    pub(crate) fn new(buffer: RgbaImage) -> Self {
        debug_assert_eq!(buffer.width(), buffer.height());
        Self { buffer }
    }

    pub fn side(&self) -> u32 {
        self.buffer.width()
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }
}

/// Logo stacked over one bottom frame on a transparent canvas
#[derive(Clone, Debug)]
pub struct CompositeFrame {
    buffer: RgbaImage,
}

impl CompositeFrame {
    pub(crate) fn new(buffer: RgbaImage) -> Self {
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGBA array)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.buffer.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Encode the frame as PNG bytes
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ImageError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.buffer.as_raw(),
            self.buffer.width(),
            self.buffer.height(),
            ColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}
