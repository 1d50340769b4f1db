//! Raster drawing surface backed by a Cairo image surface.

use super::color::{BLACK, Color};
use thiserror::Error;

/// Default stroke width applied to a freshly allocated surface.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// How newly painted pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compositing {
    /// Paint opaquely over existing pixels ("source over destination").
    #[default]
    Draw,
    /// Clear existing pixels to transparent wherever the new shape lands
    /// ("destination out"), regardless of the source color.
    Erase,
}

impl Compositing {
    fn operator(self) -> cairo::Operator {
        match self {
            Compositing::Draw => cairo::Operator::Over,
            Compositing::Erase => cairo::Operator::DestOut,
        }
    }
}

/// Errors raised while allocating or reading a [`Surface`].
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// A single pixel read back from the surface, premultiplied as stored by Cairo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Fixed-size ARGB32 raster plus the 2-D drawing state applied to it.
///
/// The surface keeps the state a canvas context would (compositing mode,
/// line width, stroke color) and hands out short-lived Cairo contexts
/// configured with that state via [`Surface::context`]. Contexts must be
/// dropped before pixels are read back.
pub struct Surface {
    image: cairo::ImageSurface,
    compositing: Compositing,
    line_width: f64,
    stroke_color: Color,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("compositing", &self.compositing)
            .field("line_width", &self.line_width)
            .field("stroke_color", &self.stroke_color)
            .finish()
    }
}

impl Surface {
    /// Allocates a fully transparent surface of `width` × `height` pixels.
    ///
    /// # Errors
    /// Returns an error if Cairo rejects the dimensions (e.g. negative sizes).
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            image,
            compositing: Compositing::Draw,
            line_width: DEFAULT_LINE_WIDTH,
            stroke_color: BLACK,
        })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub fn compositing(&self) -> Compositing {
        self.compositing
    }

    pub fn set_compositing(&mut self, compositing: Compositing) {
        self.compositing = compositing;
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// Creates a Cairo context for this surface with the current drawing state applied.
    ///
    /// The context starts with an empty path, the current compositing operator,
    /// line width and stroke color as its source, and round line caps and joins.
    pub fn context(&self) -> Result<cairo::Context, SurfaceError> {
        let ctx = cairo::Context::new(&self.image)?;
        ctx.set_operator(self.compositing.operator());
        ctx.set_line_width(self.line_width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        let c = self.stroke_color;
        ctx.set_source_rgba(c.r, c.g, c.b, c.a);
        ctx.new_path();
        Ok(ctx)
    }

    /// Paints the whole surface with `color`, replacing every pixel.
    pub fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.image)?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.paint()?;
        Ok(())
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.fill(super::color::TRANSPARENT)
    }

    /// Reads back a single pixel, or `None` if the coordinates are outside the
    /// surface or the pixel data is still borrowed by a live context.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Pixel> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let stride = self.image.stride() as usize;
        let data = self.image.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        Some(unpack(&data[offset..offset + 4]))
    }

    /// Counts the pixels that are not fully transparent.
    pub fn painted_pixels(&mut self) -> Result<usize, SurfaceError> {
        let width = self.width() as usize;
        let stride = self.image.stride() as usize;
        let data = self.image.data()?;
        let count = data
            .chunks(stride)
            .flat_map(|row| row[..width * 4].chunks_exact(4))
            .filter(|px| unpack(px).a != 0)
            .count();
        Ok(count)
    }

    /// Returns `true` if no pixel has been painted (or everything was erased).
    pub fn is_blank(&mut self) -> Result<bool, SurfaceError> {
        Ok(self.painted_pixels()? == 0)
    }
}

// ARGB32 pixels are stored as native-endian u32 words.
fn unpack(bytes: &[u8]) -> Pixel {
    let word = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    Pixel {
        a: (word >> 24) as u8,
        r: (word >> 16) as u8,
        g: (word >> 8) as u8,
        b: word as u8,
    }
}
