use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::assets::FrameImage;
use crate::composition::types::{CompositeFrame, ResizedLogo, Resolution};

/// Stateless layout and blending of logo + frame canvases.
///
/// All integer math truncates, so any two builds of the same inputs produce
/// the same canvas geometry.
pub struct Compositor;

impl Compositor {
    /// Resample the logo to a `side x side` square, `side = min(w, h) / 3`.
    ///
    /// The logo keeps its alpha channel; nothing is matted onto a background.
    pub fn resize_logo(logo: &RgbaImage, resolution: &Resolution) -> ResizedLogo {
        let side = resolution.logo_side();
        if side == 0 {
            return ResizedLogo::new(RgbaImage::new(0, 0));
        }

        debug!("Resizing {}x{} logo to {}x{} for {}",
               logo.width(), logo.height(), side, side, resolution.name);

        ResizedLogo::new(imageops::resize(logo, side, side, FilterType::Lanczos3))
    }

    /// Stack the logo (top) and a frame (bottom) on a transparent canvas.
    ///
    /// Width is the wider of the two, height is
    /// `logo + logo / 2 + frame`, both layers centered horizontally.
    pub fn compose(logo: &ResizedLogo, frame: &RgbaImage) -> CompositeFrame {
        let (width, height) = Self::canvas_size(logo, frame);
        let mut canvas = RgbaImage::new(width, height);

        let logo_x = (width - logo.width()) / 2;
        let frame_x = (width - frame.width()) / 2;
        let frame_y = height - frame.height();

        imageops::overlay(&mut canvas, logo.as_image(), logo_x as i64, 0);
        imageops::overlay(&mut canvas, frame, frame_x as i64, frame_y as i64);

        CompositeFrame::new(canvas)
    }

    /// Canvas dimensions for a logo/frame pair
    pub fn canvas_size(logo: &ResizedLogo, frame: &RgbaImage) -> (u32, u32) {
        let width = logo.width().max(frame.width());
        let height = logo.height() + logo.height() / 2 + frame.height();
        (width, height)
    }

    /// Resize the logo once for `resolution` and compose every frame in order
    pub fn compose_all(
        logo: &RgbaImage,
        frames: &[FrameImage],
        resolution: &Resolution,
    ) -> Vec<CompositeFrame> {
        let resized = Self::resize_logo(logo, resolution);
        frames
            .iter()
            .map(|frame| Self::compose(&resized, &frame.image))
            .collect()
    }
}
