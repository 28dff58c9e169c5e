// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image helpers that are handy next to the builder.
//!
//! - [`solid_color_image`] produces a flat-colored bitmap, typically used as
//!   a per-state background image.
//! - [`ImageView`] describes an image-bearing view with an optional
//!   highlighted image.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};

/// Logical size used by [`solid_color_image`] when none is given.
pub const DEFAULT_IMAGE_SIZE: Size = Size::new(100.0, 100.0);

/// Rasterizes a solid `color` into an RGBA8 image.
///
/// `size` is in logical units (default [`DEFAULT_IMAGE_SIZE`]) and `scale`
/// is the display scale factor. The bitmap is `ceil(size * scale)` pixels.
///
/// Returns `None` if the pixel size is empty or not finite, or if the pixel
/// buffer cannot be allocated.
///
/// ```
/// use peniko::Color;
/// use understory_control_style::image::solid_color_image;
///
/// let image = solid_color_image(Color::from_rgb8(255, 0, 0), None, 2.0).unwrap();
/// assert_eq!((image.width, image.height), (200, 200));
/// assert_eq!(&image.data.data()[..4], &[255, 0, 0, 255]);
/// ```
#[must_use]
pub fn solid_color_image(color: Color, size: Option<Size>, scale: f64) -> Option<ImageData> {
    let pixels = (size.unwrap_or(DEFAULT_IMAGE_SIZE) * scale).ceil();
    let width = pixel_extent(pixels.width)?;
    let height = pixel_extent(pixels.height)?;

    let count = usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?;
    let rgba = color.to_rgba8();
    let texel = [rgba.r, rgba.g, rgba.b, rgba.a];
    let mut data = Vec::new();
    data.try_reserve_exact(count.checked_mul(texel.len())?).ok()?;
    for _ in 0..count {
        data.extend_from_slice(&texel);
    }

    Some(ImageData {
        data: Blob::from(data),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    })
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "range is checked against u32::MAX before casting"
)]
fn pixel_extent(extent: f64) -> Option<u32> {
    (1.0..=f64::from(u32::MAX))
        .contains(&extent)
        .then(|| extent as u32)
}

/// How an image is fitted into its view's frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContentMode {
    /// Stretch to fill, ignoring aspect ratio.
    ScaleToFill,
    /// Scale to fit inside, keeping aspect ratio.
    #[default]
    ScaleAspectFit,
    /// Scale to cover, keeping aspect ratio.
    ScaleAspectFill,
    /// Centered at natural size.
    Center,
}

/// A view that shows an image, and optionally a different one while
/// highlighted.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView<I> {
    /// Frame in the parent's coordinates.
    pub frame: Rect,
    /// Normal image, `None` if a named image could not be found.
    pub image: Option<I>,
    /// Image shown while highlighted.
    pub highlighted_image: Option<I>,
    /// Fitting mode, [`ContentMode::ScaleAspectFit`] by default.
    pub content_mode: ContentMode,
}

impl<I> ImageView<I> {
    /// Creates a view from image values.
    #[must_use]
    pub fn new(frame: Rect, image: I, highlighted_image: Option<I>) -> Self {
        Self {
            frame,
            image: Some(image),
            highlighted_image,
            content_mode: ContentMode::ScaleAspectFit,
        }
    }

    /// Creates a view from image names, resolved through `lookup`.
    ///
    /// Names that `lookup` cannot resolve leave the matching image empty.
    ///
    /// ```
    /// use kurbo::Rect;
    /// use understory_control_style::image::ImageView;
    ///
    /// let lookup = |name: &str| (name == "play").then_some(1_u32);
    /// let view = ImageView::from_named(Rect::new(0., 0., 24., 24.), "play", Some("missing"), lookup);
    ///
    /// assert_eq!(view.image, Some(1));
    /// assert_eq!(view.highlighted_image, None);
    /// ```
    #[must_use]
    pub fn from_named(
        frame: Rect,
        name: &str,
        highlighted_name: Option<&str>,
        lookup: impl Fn(&str) -> Option<I>,
    ) -> Self {
        Self {
            frame,
            image: lookup(name),
            highlighted_image: highlighted_name.and_then(&lookup),
            content_mode: ContentMode::ScaleAspectFit,
        }
    }

    /// Returns the image to draw, preferring the highlighted image while
    /// `highlighted`.
    #[must_use]
    pub fn displayed_image(&self, highlighted: bool) -> Option<&I> {
        if highlighted {
            self.highlighted_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }
}
