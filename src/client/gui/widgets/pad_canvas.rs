// Canvas widget: turns mouse input into pad pointer events and paints the strokes
use iced::mouse;
use iced::widget::canvas::event::{self, Event};
use iced::widget::canvas::{self, Cache, Canvas, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use crate::client::drawing::raster::Raster;
use crate::client::drawing::stroke::Pen;
use crate::client::drawing::{CanvasPoint, PointerEvent, Rgba, STROKE_WIDTH};
use crate::client::models::messages::Message;

pub struct PadCanvas<'a> {
    raster: &'a Raster,
    pen: Pen,
    cache: &'a Cache,
}

impl<'a> PadCanvas<'a> {
    pub fn new(raster: &'a Raster, pen: Pen, cache: &'a Cache) -> Self {
        Self { raster, pen, cache }
    }

    /// Map one mouse event to a pointer event; `position` is canvas-local, `None` when outside.
    fn pointer_event(&self, event: mouse::Event, position: Option<Point>) -> Option<PointerEvent> {
        let drawing = self.pen == Pen::Drawing;
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                position.map(|p| PointerEvent::Down(to_canvas(p)))
            }
            mouse::Event::CursorMoved { .. } if drawing => Some(match position {
                Some(p) => PointerEvent::Move(to_canvas(p)),
                None => PointerEvent::Leave,
            }),
            mouse::Event::ButtonReleased(mouse::Button::Left) if drawing => Some(PointerEvent::Up),
            mouse::Event::CursorLeft if drawing => Some(PointerEvent::Leave),
            _ => None,
        }
    }
}

impl canvas::Program<Message> for PadCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut (),
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };
        match self.pointer_event(mouse_event, cursor.position_in(bounds)) {
            Some(pointer) => (event::Status::Captured, Some(Message::Pointer(pointer))),
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let strokes = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = self.raster.palette();
            frame.fill_rectangle(Point::ORIGIN, frame.size(), to_color(palette.background));

            // Rebuilt from the whole display list on every change; cheap at digit scale.
            let ink = Path::new(|builder| {
                for segment in self.raster.segments() {
                    builder.move_to(Point::new(segment.from.x, segment.from.y));
                    builder.line_to(Point::new(segment.to.x, segment.to.y));
                }
            });
            frame.stroke(
                &ink,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(to_color(palette.foreground))
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );
        });
        vec![strokes]
    }

    fn mouse_interaction(
        &self,
        _state: &(),
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

fn to_canvas(p: Point) -> CanvasPoint {
    CanvasPoint::new(p.x, p.y)
}

fn to_color(c: Rgba) -> Color {
    let [r, g, b, a] = c.to_f32();
    Color::from_rgba(r, g, b, a)
}

pub fn view<'a>(raster: &'a Raster, pen: Pen, cache: &'a Cache) -> Element<'a, Message> {
    Canvas::new(PadCanvas::new(raster, pen, cache))
        .width(Length::Fixed(raster.width() as f32))
        .height(Length::Fixed(raster.height() as f32))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::drawing::{Palette, CANVAS_SIZE};

    fn raster() -> Raster {
        Raster::new(CANVAS_SIZE, CANVAS_SIZE, Palette::default()).unwrap()
    }

    #[test]
    fn press_inside_starts_stroke() {
        let (raster, cache) = (raster(), Cache::new());
        let canvas = PadCanvas::new(&raster, Pen::Idle, &cache);
        let ev = canvas.pointer_event(
            mouse::Event::ButtonPressed(mouse::Button::Left),
            Some(Point::new(12.0, 34.0)),
        );
        assert_eq!(ev, Some(PointerEvent::Down(CanvasPoint::new(12.0, 34.0))));
        assert_eq!(
            canvas.pointer_event(mouse::Event::ButtonPressed(mouse::Button::Left), None),
            None
        );
    }

    #[test]
    fn hover_without_press_is_ignored() {
        let (raster, cache) = (raster(), Cache::new());
        let canvas = PadCanvas::new(&raster, Pen::Idle, &cache);
        let moved = mouse::Event::CursorMoved { position: Point::new(5.0, 5.0) };
        assert_eq!(canvas.pointer_event(moved, Some(Point::new(5.0, 5.0))), None);
        assert_eq!(canvas.pointer_event(mouse::Event::CursorLeft, None), None);
    }

    #[test]
    fn moving_out_while_drawing_leaves() {
        let (raster, cache) = (raster(), Cache::new());
        let canvas = PadCanvas::new(&raster, Pen::Drawing, &cache);
        let moved = mouse::Event::CursorMoved { position: Point::new(500.0, 5.0) };
        assert_eq!(canvas.pointer_event(moved, None), Some(PointerEvent::Leave));
        assert_eq!(
            canvas.pointer_event(mouse::Event::ButtonReleased(mouse::Button::Left), None),
            Some(PointerEvent::Up)
        );
        assert_eq!(
            canvas.pointer_event(mouse::Event::CursorLeft, None),
            Some(PointerEvent::Leave)
        );
    }
}
