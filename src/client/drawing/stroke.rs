//! Freehand stroke capture as an explicit two-state machine.
//!
//! The renderer never touches pixels itself: `handle` returns the segment
//! that has to be painted, if any. Consecutive segments of one stroke share
//! their endpoints, so the painted line has no gaps however fast the pointer
//! moves (fast moves just give longer straight pieces).

use super::{CanvasPoint, PointerEvent, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pen {
    #[default]
    Idle,
    Drawing,
}

#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    pen: Pen,
    last: CanvasPoint,
    width: f32,
    height: f32,
}

impl StrokeRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pen: Pen::Idle,
            last: CanvasPoint::ORIGIN,
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn last_position(&self) -> CanvasPoint {
        self.last
    }

    fn contains(&self, p: CanvasPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Apply one pointer event and return the segment to paint.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Segment> {
        match (self.pen, event) {
            (_, PointerEvent::Down(p)) => {
                if self.contains(p) {
                    self.last = p;
                    self.pen = Pen::Drawing;
                } else {
                    self.pen = Pen::Idle;
                }
                None
            }
            (Pen::Drawing, PointerEvent::Move(p)) if self.contains(p) => {
                let segment = Segment { from: self.last, to: p };
                self.last = p;
                Some(segment)
            }
            // Leaving the surface mid-stroke ends it; re-entering needs a new press.
            (Pen::Drawing, PointerEvent::Move(_)) | (_, PointerEvent::Up) | (_, PointerEvent::Leave) => {
                self.pen = Pen::Idle;
                None
            }
            (Pen::Idle, PointerEvent::Move(_)) => None,
        }
    }

    pub fn reset(&mut self) {
        self.pen = Pen::Idle;
        self.last = CanvasPoint::ORIGIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> CanvasPoint {
        CanvasPoint::new(x, y)
    }

    fn renderer() -> StrokeRenderer {
        StrokeRenderer::new(400, 400)
    }

    #[test]
    fn down_moves_up_yields_one_chained_segment_per_move() {
        let mut r = renderer();
        let path = [p(10.0, 10.0), p(20.0, 15.0), p(35.0, 40.0), p(36.0, 41.0), p(100.0, 300.0)];

        assert_eq!(r.handle(PointerEvent::Down(p(5.0, 5.0))), None);
        assert_eq!(r.pen(), Pen::Drawing);

        let segments: Vec<Segment> = path
            .iter()
            .filter_map(|&pt| r.handle(PointerEvent::Move(pt)))
            .collect();
        assert_eq!(r.handle(PointerEvent::Up), None);

        assert_eq!(segments.len(), path.len());
        assert_eq!(segments[0].from, p(5.0, 5.0));
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.to, path[i]);
            if i > 0 {
                assert_eq!(seg.from, segments[i - 1].to);
            }
        }
        assert_eq!(r.pen(), Pen::Idle);
    }

    #[test]
    fn moves_while_idle_draw_nothing() {
        let mut r = renderer();
        for i in 0..5 {
            assert_eq!(r.handle(PointerEvent::Move(p(i as f32, i as f32))), None);
        }
        assert_eq!(r.pen(), Pen::Idle);
        assert_eq!(r.last_position(), CanvasPoint::ORIGIN);
    }

    #[test]
    fn leave_ends_stroke() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(50.0, 50.0)));
        assert!(r.handle(PointerEvent::Move(p(60.0, 60.0))).is_some());
        assert_eq!(r.handle(PointerEvent::Leave), None);
        assert_eq!(r.pen(), Pen::Idle);
        assert_eq!(r.handle(PointerEvent::Move(p(70.0, 70.0))), None);
    }

    #[test]
    fn moving_off_the_surface_counts_as_leave() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(390.0, 200.0)));
        assert_eq!(r.handle(PointerEvent::Move(p(420.0, 200.0))), None);
        assert_eq!(r.pen(), Pen::Idle);
        // back inside without a new press
        assert_eq!(r.handle(PointerEvent::Move(p(380.0, 200.0))), None);
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(-3.0, 10.0)));
        assert_eq!(r.pen(), Pen::Idle);
        assert_eq!(r.handle(PointerEvent::Move(p(10.0, 10.0))), None);
    }

    #[test]
    fn press_outside_mid_stroke_ends_it() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(100.0, 100.0)));
        r.handle(PointerEvent::Down(p(-50.0, 100.0)));
        assert_eq!(r.pen(), Pen::Idle);
        assert_eq!(r.handle(PointerEvent::Move(p(120.0, 100.0))), None);
    }

    #[test]
    fn second_press_restarts_from_new_point() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(10.0, 10.0)));
        r.handle(PointerEvent::Move(p(20.0, 20.0)));
        r.handle(PointerEvent::Up);
        r.handle(PointerEvent::Down(p(200.0, 200.0)));
        let seg = r.handle(PointerEvent::Move(p(210.0, 200.0))).unwrap();
        assert_eq!(seg.from, p(200.0, 200.0));
    }

    #[test]
    fn reset_returns_to_origin_and_idle() {
        let mut r = renderer();
        r.handle(PointerEvent::Down(p(10.0, 10.0)));
        r.handle(PointerEvent::Move(p(20.0, 20.0)));
        r.reset();
        assert_eq!(r.pen(), Pen::Idle);
        assert_eq!(r.last_position(), CanvasPoint::ORIGIN);
        assert_eq!(r.handle(PointerEvent::Move(p(30.0, 30.0))), None);
    }
}
