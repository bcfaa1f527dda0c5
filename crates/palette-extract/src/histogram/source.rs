//! Pixel sources
//!
//! The histogram never decodes files. Anything that can answer
//! `width`, `height` and `pixel_at(x, y)` can be scanned, and each source
//! declares which end of its alpha range means "fully transparent".

use crate::color::Rgb;

/// One pixel as handed out by a [`PixelSource`]. `a` is on the source's
/// own [`AlphaScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque on the default 8-bit opacity scale.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Color channels without alpha.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// How a source encodes transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaScale {
    /// `0` is fully transparent, `max` fully opaque (8-bit RGBA uses 255).
    Opacity { max: u8 },
    /// `0` is fully opaque, `max` fully transparent (GD-style 7-bit uses 127).
    Transparency { max: u8 },
}

impl AlphaScale {
    /// Standard 8-bit RGBA.
    pub const RGBA8: AlphaScale = AlphaScale::Opacity { max: 255 };

    /// Whether `alpha` sits at the fully transparent end of this scale.
    #[inline]
    pub fn is_fully_transparent(self, alpha: u8) -> bool {
        match self {
            AlphaScale::Opacity { .. } => alpha == 0,
            AlphaScale::Transparency { max } => alpha >= max,
        }
    }
}

impl Default for AlphaScale {
    fn default() -> Self {
        Self::RGBA8
    }
}

/// A pixel-addressable bitmap.
///
/// Implementations are expected to return a valid pixel for every
/// `x < width()`, `y < height()`; the histogram never asks outside that.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, x: u32, y: u32) -> Rgba;

    /// Transparency convention of [`Rgba::a`]. Defaults to 8-bit opacity.
    fn alpha_scale(&self) -> AlphaScale {
        AlphaScale::RGBA8
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> Rgba {
        (**self).pixel_at(x, y)
    }

    fn alpha_scale(&self) -> AlphaScale {
        (**self).alpha_scale()
    }
}

/// An owned, row-major RGBA buffer (4 bytes per pixel).
///
/// # Example
///
/// ```
/// use palette_extract::{PixelSource, Rgba, RgbaBuffer};
///
/// let buffer = RgbaBuffer::from_fn(2, 1, |x, _| {
///     if x == 0 { Rgba::opaque(255, 0, 0) } else { Rgba::new(0, 0, 0, 0) }
/// });
/// assert_eq!(buffer.pixel_at(0, 0), Rgba::opaque(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    alpha_scale: AlphaScale,
}

impl RgbaBuffer {
    /// Wrap raw RGBA bytes. Returns `None` when `data.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (data.len() == expected).then_some(Self {
            width,
            height,
            data,
            alpha_scale: AlphaScale::RGBA8,
        })
    }

    /// Build a buffer by evaluating `f` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let p = f(x, y);
                data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
            }
        }
        Self {
            width,
            height,
            data,
            alpha_scale: AlphaScale::RGBA8,
        }
    }

    /// Override the transparency convention of the stored alpha bytes.
    pub fn with_alpha_scale(mut self, alpha_scale: AlphaScale) -> Self {
        self.alpha_scale = alpha_scale;
        self
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, x: u32, y: u32) -> Rgba {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    fn alpha_scale(&self) -> AlphaScale {
        self.alpha_scale
    }
}
