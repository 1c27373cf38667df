//! Drawing surface and freehand stroke capture
//!
//! - `raster`: the pixel buffer the user draws on (tiny-skia)
//! - `stroke`: the Idle/Drawing pointer state machine

pub mod raster;
pub mod stroke;

use serde::{Deserialize, Serialize};

/// Logical size of the drawing surface, in pixels.
pub const CANVAS_SIZE: u32 = 400;
/// Width of every stroke segment, in pixels.
pub const STROKE_WIDTH: f32 = 10.0;

/// Position in canvas-local coordinates (origin at the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub const ORIGIN: CanvasPoint = CanvasPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One straight piece of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: CanvasPoint,
    pub to: CanvasPoint,
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    pub fn to_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
    }
}

/// The two colors in use on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub foreground: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            foreground: Rgba::WHITE,
        }
    }
}

/// Pointer input as seen by the stroke renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down(CanvasPoint),
    Move(CanvasPoint),
    Up,
    /// Pointer left the surface; ends the stroke like `Up`
    Leave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_event_json() {
        let events: Vec<PointerEvent> = serde_json::from_str(
            r#"[{"kind":"down","x":1,"y":2},{"kind":"move","x":3.5,"y":4},{"kind":"up"},{"kind":"leave"}]"#,
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                PointerEvent::Down(CanvasPoint::new(1.0, 2.0)),
                PointerEvent::Move(CanvasPoint::new(3.5, 4.0)),
                PointerEvent::Up,
                PointerEvent::Leave,
            ]
        );
    }
}
