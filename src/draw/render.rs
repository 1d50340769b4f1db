//! Commits pointer segments to a [`Surface`] as pen lines or eraser discs.

use super::surface::{Compositing, Surface};
use crate::input::{Segment, Tool};
use crate::util::Point;
use log::trace;

/// Radius of the disc punched out by the eraser, in surface units.
pub const ERASER_RADIUS: f64 = 8.0;

/// What a single commit painted onto the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Pen stroke from the previous sample to the current one.
    Line { from: Point, to: Point },
    /// Eraser disc centered on the previous sample.
    Disc { center: Point, radius: f64 },
}

/// Draws one segment onto the surface using the given tool.
///
/// # Behavior
/// - Pen: switches to [`Compositing::Draw`], then strokes a straight line from
///   `segment.prev` to `segment.curr` with the surface's line width and color.
/// - Eraser: switches to [`Compositing::Erase`], then fills a disc of
///   [`ERASER_RADIUS`] centered on `segment.prev`. The current point is ignored,
///   so erasing trails the pointer by one sample.
///
/// Cairo failures while painting are ignored; the returned [`Mark`] describes
/// what was requested.
pub fn commit_segment(surface: &mut Surface, tool: Tool, segment: Segment) -> Mark {
    let Segment { prev, curr } = segment;
    match tool {
        Tool::Pen => {
            surface.set_compositing(Compositing::Draw);
            if let Ok(ctx) = surface.context() {
                ctx.move_to(prev.x, prev.y);
                ctx.line_to(curr.x, curr.y);
                let _ = ctx.stroke();
            }
            trace!(
                "Pen segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                prev.x, prev.y, curr.x, curr.y
            );
            Mark::Line {
                from: prev,
                to: curr,
            }
        }
        Tool::Eraser => {
            surface.set_compositing(Compositing::Erase);
            if let Ok(ctx) = surface.context() {
                // Destination-out only looks at source alpha; keep it opaque so the
                // erase is total whatever the stroke color is.
                ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
                ctx.arc(
                    prev.x,
                    prev.y,
                    ERASER_RADIUS,
                    0.0,
                    std::f64::consts::PI * 2.0,
                );
                let _ = ctx.fill();
            }
            trace!("Eraser disc at ({:.1}, {:.1})", prev.x, prev.y);
            Mark::Disc {
                center: prev,
                radius: ERASER_RADIUS,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment {
            prev: Point::new(x1, y1),
            curr: Point::new(x2, y2),
        }
    }

    #[test]
    fn pen_strokes_line_with_draw_compositing() {
        let mut surface = Surface::new(100, 100).unwrap();
        surface.set_line_width(5.0);
        surface.set_stroke_color(RED);

        let mark = commit_segment(&mut surface, Tool::Pen, segment(10.0, 50.0, 90.0, 50.0));

        assert_eq!(
            mark,
            Mark::Line {
                from: Point::new(10.0, 50.0),
                to: Point::new(90.0, 50.0),
            }
        );
        assert_eq!(surface.compositing(), Compositing::Draw);
        let px = surface.pixel(50, 50).unwrap();
        assert_eq!((px.r, px.g, px.b, px.a), (255, 0, 0, 255));
        // Width 5 keeps the stroke well away from y = 40.
        assert_eq!(surface.pixel(50, 40).unwrap().a, 0);
    }

    #[test]
    fn eraser_clears_disc_around_previous_point() {
        let mut surface = Surface::new(100, 100).unwrap();
        surface.fill(WHITE).unwrap();

        let mark = commit_segment(
            &mut surface,
            Tool::Eraser,
            segment(20.0, 20.0, 80.0, 80.0),
        );

        assert_eq!(
            mark,
            Mark::Disc {
                center: Point::new(20.0, 20.0),
                radius: ERASER_RADIUS,
            }
        );
        assert_eq!(surface.compositing(), Compositing::Erase);
        assert_eq!(surface.pixel(20, 20).unwrap().a, 0);
        assert_eq!(surface.pixel(25, 20).unwrap().a, 0);
        // The current point is untouched.
        assert_eq!(surface.pixel(80, 80).unwrap().a, 255);
        assert_eq!(surface.pixel(40, 20).unwrap().a, 255);
    }

    #[test]
    fn eraser_ignores_transparent_stroke_color() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.fill(WHITE).unwrap();
        surface.set_stroke_color(crate::draw::TRANSPARENT);

        commit_segment(&mut surface, Tool::Eraser, segment(20.0, 20.0, 21.0, 21.0));

        assert_eq!(surface.pixel(20, 20).unwrap().a, 0);
    }

    #[test]
    fn pen_restores_draw_after_eraser() {
        let mut surface = Surface::new(60, 60).unwrap();
        surface.set_line_width(4.0);

        commit_segment(&mut surface, Tool::Eraser, segment(30.0, 30.0, 31.0, 31.0));
        commit_segment(&mut surface, Tool::Pen, segment(5.0, 30.0, 55.0, 30.0));

        assert_eq!(surface.compositing(), Compositing::Draw);
        assert_eq!(surface.pixel(30, 30).unwrap().a, 255);
    }
}
