use scrawl::draw::{Compositing, Mark, WHITE};
use scrawl::input::{PointerEvent, Tool};
use scrawl::util::{BoundingRect, Point};
use scrawl::{DrawingSurface, FixedTarget, MountTarget, StrokeConfig};
use std::cell::Cell;

fn make_widget(config: StrokeConfig) -> DrawingSurface<FixedTarget> {
    DrawingSurface::mounted(
        config,
        FixedTarget::new(BoundingRect::new(20.0, 40.0, 400.0, 400.0)),
    )
}

/// Target whose rect shifts right by one unit every time it is queried.
struct DriftingTarget {
    queries: Cell<u32>,
}

impl MountTarget for DriftingTarget {
    fn bounding_rect(&self) -> BoundingRect {
        let n = self.queries.get();
        self.queries.set(n + 1);
        BoundingRect::new(n as f64, 0.0, 400.0, 400.0)
    }
}

#[test]
fn pen_gesture_paints_configured_color_along_path() {
    let mut widget = make_widget(StrokeConfig {
        color: "#ff0000".to_string(),
        ..StrokeConfig::default()
    });

    // Local path: (50, 100) -> (150, 100) -> (150, 200)
    widget.handle_event(PointerEvent::press(70.0, 140.0));
    widget.handle_event(PointerEvent::moved(170.0, 140.0));
    widget.handle_event(PointerEvent::moved(170.0, 240.0));
    widget.handle_event(PointerEvent::release(170.0, 240.0));

    let surface = widget.surface_mut().unwrap();
    let on_first = surface.pixel(100, 100).unwrap();
    assert_eq!((on_first.r, on_first.g, on_first.b, on_first.a), (255, 0, 0, 255));
    assert_eq!(surface.pixel(150, 150).unwrap().a, 255);
    assert_eq!(surface.pixel(100, 150).unwrap().a, 0);
}

#[test]
fn moves_after_leave_do_not_paint() {
    let mut widget = make_widget(StrokeConfig::default());

    widget.handle_event(PointerEvent::press(70.0, 140.0));
    widget.handle_event(PointerEvent::leave(70.0, 140.0));
    widget.handle_event(PointerEvent::moved(300.0, 300.0));

    assert!(widget.surface_mut().unwrap().is_blank().unwrap());
}

#[test]
fn eraser_punches_hole_through_existing_drawing() {
    let mut widget = make_widget(StrokeConfig::default());
    widget.surface_mut().unwrap().fill(WHITE).unwrap();
    let before = widget.surface_mut().unwrap().painted_pixels().unwrap();

    widget.set_mode(Tool::Eraser);
    widget.handle_event(PointerEvent::press(120.0, 140.0));
    let mark = widget.handle_event(PointerEvent::moved(121.0, 141.0));
    widget.handle_event(PointerEvent::release(121.0, 141.0));

    assert_eq!(
        mark,
        Some(Mark::Disc {
            center: Point::new(100.0, 100.0),
            radius: 8.0
        })
    );
    let surface = widget.surface_mut().unwrap();
    assert_eq!(surface.compositing(), Compositing::Erase);
    assert_eq!(surface.pixel(100, 100).unwrap().a, 0);
    let erased = before - surface.painted_pixels().unwrap();
    // Roughly pi * 8^2 pixels, allowing for partially covered edge pixels.
    assert!((150..=250).contains(&erased), "erased {erased} pixels");
}

#[test]
fn switching_back_to_pen_draws_opaquely_again() {
    let mut widget = make_widget(StrokeConfig {
        mode: Tool::Eraser,
        ..StrokeConfig::default()
    });

    widget.handle_event(PointerEvent::press(70.0, 140.0));
    widget.handle_event(PointerEvent::moved(80.0, 140.0));
    widget.handle_event(PointerEvent::release(80.0, 140.0));
    assert!(widget.surface_mut().unwrap().is_blank().unwrap());

    widget.set_mode(Tool::Pen);
    widget.handle_event(PointerEvent::press(70.0, 140.0));
    widget.handle_event(PointerEvent::moved(120.0, 140.0));

    let surface = widget.surface_mut().unwrap();
    assert_eq!(surface.compositing(), Compositing::Draw);
    assert_eq!(surface.pixel(75, 100).unwrap().a, 255);
}

#[test]
fn rect_is_queried_for_every_event() {
    let target = DriftingTarget {
        queries: Cell::new(0),
    };
    let mut widget = DrawingSurface::mounted(StrokeConfig::default(), target);

    widget.handle_event(PointerEvent::press(10.0, 10.0));
    let mark = widget.handle_event(PointerEvent::moved(10.0, 10.0));

    assert_eq!(widget.target().queries.get(), 2);
    assert_eq!(
        mark,
        Some(Mark::Line {
            from: Point::new(10.0, 10.0),
            to: Point::new(9.0, 10.0)
        })
    );
}
