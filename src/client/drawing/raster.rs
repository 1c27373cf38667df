//! Drawing surface backed by a tiny-skia pixmap
//!
//! The pixmap is the source of truth for what gets submitted. Painted
//! segments are also kept as a display list so the on-screen canvas can
//! redraw them without reading pixels back.

use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{Palette, Rgba, Segment, STROKE_WIDTH};
use crate::common::error::{PadError, Result};

pub struct Raster {
    pixmap: Pixmap,
    palette: Palette,
    segments: Vec<Segment>,
}

impl Raster {
    /// Allocate the surface and fill it with the background color.
    pub fn new(width: u32, height: u32, palette: Palette) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| PadError::Surface(format!("cannot allocate a {width}x{height} raster")))?;
        let mut raster = Self {
            pixmap,
            palette,
            segments: Vec::new(),
        };
        raster.clear();
        Ok(raster)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Segments painted since the last clear, oldest first
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn clear(&mut self) {
        self.pixmap.fill(to_skia(self.palette.background));
        self.segments.clear();
    }

    /// Stroke one segment with round caps in the foreground color.
    pub fn draw_segment(&mut self, segment: Segment) {
        let mut pb = PathBuilder::new();
        pb.move_to(segment.from.x, segment.from.y);
        pb.line_to(segment.to.x, segment.to.y);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(to_skia(self.palette.foreground));
            paint.anti_alias = true;

            let stroke = Stroke {
                width: STROKE_WIDTH,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        self.segments.push(segment);
    }

    /// Read back one pixel, demultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        // Pixmap::pixel only bounds-checks the flat index, so (width, 0) would wrap to (0, 1).
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// True when every pixel still has the background color
    pub fn is_blank(&self) -> bool {
        let bg = to_skia(self.palette.background).premultiply().to_color_u8();
        self.pixmap.pixels().iter().all(|p| *p == bg)
    }

    /// Lossless PNG of the full surface, background included.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| PadError::Encode(e.to_string()))
    }
}

fn to_skia(color: Rgba) -> Color {
    let [r, g, b, a] = color.0;
    Color::from_rgba8(r, g, b, a)
}
