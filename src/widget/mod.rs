//! The freehand drawing widget.
//!
//! [`DrawingSurface`] owns the raster, the gesture state and the stroke
//! settings. The host feeds it pointer events in delivery order; each move
//! during a gesture commits exactly one pen line or eraser disc.

use crate::config::StrokeConfig;
use crate::draw::{self, Color, Compositing, Mark, Surface, SurfaceError};
use crate::input::{InteractionState, PointerEvent, PointerEventKind, Segment, Tool};
use crate::util::{BoundingRect, Point};
use log::{debug, warn};


/// Host element the surface is mounted into.
///
/// The bounding rect is queried on every event so the element may move or
/// scroll between events without skewing coordinates.
pub trait MountTarget {
    fn bounding_rect(&self) -> BoundingRect;
}

/// Mount target with a rect the host updates by hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedTarget {
    pub rect: BoundingRect,
}

impl FixedTarget {
    pub fn new(rect: BoundingRect) -> Self {
        Self { rect }
    }
}

impl MountTarget for FixedTarget {
    fn bounding_rect(&self) -> BoundingRect {
        self.rect
    }
}

/// Freehand drawing surface with pen and eraser tools.
pub struct DrawingSurface<T: MountTarget> {
    target: T,
    config: StrokeConfig,
    /// `config.color` resolved once per config change
    color: Color,
    surface: Option<Surface>,
    state: InteractionState,
}

impl<T: MountTarget> DrawingSurface<T> {
    /// Creates an unmounted widget. No surface exists until [`mount`](Self::mount).
    pub fn new(config: StrokeConfig, target: T) -> Self {
        Self {
            target,
            color: config.stroke_color(),
            config,
            surface: None,
            state: InteractionState::Idle,
        }
    }

    /// Creates a widget and mounts it immediately.
    pub fn mounted(config: StrokeConfig, target: T) -> Self {
        let mut widget = Self::new(config, target);
        widget.mount();
        widget
    }

    /// Allocates the surface at the configured size with opaque compositing,
    /// the configured line width and stroke color.
    ///
    /// Mounting an already mounted widget keeps the existing surface. If Cairo
    /// rejects the dimensions the widget stays unmounted and commits are skipped.
    pub fn mount(&mut self) {
        if self.surface.is_some() {
            return;
        }
        match self.allocate() {
            Ok(surface) => {
                debug!(
                    "Mounted {}x{} drawing surface",
                    surface.width(),
                    surface.height()
                );
                self.surface = Some(surface);
            }
            Err(err) => warn!(
                "Failed to allocate {}x{} drawing surface: {}",
                self.config.width, self.config.height, err
            ),
        }
    }

    fn allocate(&self) -> Result<Surface, SurfaceError> {
        let mut surface = Surface::new(self.config.width, self.config.height)?;
        surface.set_compositing(Compositing::Draw);
        surface.set_line_width(self.config.line_width);
        surface.set_stroke_color(self.color);
        Ok(surface)
    }

    /// Releases the surface and abandons any gesture in progress.
    ///
    /// # Returns
    /// The released surface, if the widget was mounted.
    pub fn unmount(&mut self) -> Option<Surface> {
        self.state = InteractionState::Idle;
        let surface = self.surface.take();
        if surface.is_some() {
            debug!("Unmounted drawing surface");
        }
        surface
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn config(&self) -> &StrokeConfig {
        &self.config
    }

    /// Replaces the stroke settings.
    ///
    /// Tool, color and line width apply from the next committed segment; a
    /// gesture in progress keeps going. Width and height are not applied to an
    /// already allocated surface.
    pub fn set_config(&mut self, config: StrokeConfig) {
        self.color = config.stroke_color();
        self.config = config;
    }

    /// Switches between pen and eraser.
    pub fn set_mode(&mut self, mode: Tool) {
        self.config.mode = mode;
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Erases everything drawn so far. No-op while unmounted.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if let Err(err) = surface.clear() {
                warn!("Failed to clear drawing surface: {}", err);
            }
        }
    }

    /// Dispatches a raw pointer event to the matching handler.
    ///
    /// # Returns
    /// The mark painted by a move during a gesture, `None` for everything else.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<Mark> {
        match event.kind {
            PointerEventKind::Press => {
                self.on_press(event.client_x, event.client_y);
                None
            }
            PointerEventKind::Move => self.on_move(event.client_x, event.client_y),
            PointerEventKind::Release => {
                self.on_release();
                None
            }
            PointerEventKind::Leave => {
                self.on_leave();
                None
            }
        }
    }

    /// Starts a gesture at the given device coordinates.
    pub fn on_press(&mut self, client_x: f64, client_y: f64) {
        let point = self.to_local(client_x, client_y);
        debug!("Pointer pressed at ({:.1}, {:.1})", point.x, point.y);
        self.state.on_press(point);
    }

    /// Extends the current gesture, committing one segment; ignored while idle.
    pub fn on_move(&mut self, client_x: f64, client_y: f64) -> Option<Mark> {
        let point = self.to_local(client_x, client_y);
        let segment = self.state.on_move(point)?;
        self.commit_segment(segment)
    }

    /// Ends the current gesture.
    pub fn on_release(&mut self) {
        debug!("Pointer released");
        self.state.on_release();
    }

    /// Ends the current gesture because the pointer left the surface.
    pub fn on_leave(&mut self) {
        debug!("Pointer left surface");
        self.state.on_leave();
    }

    /// Paints `segment` with the configured tool, color and line width.
    ///
    /// Silently does nothing while the surface is not allocated.
    pub fn commit_segment(&mut self, segment: Segment) -> Option<Mark> {
        let surface = self.surface.as_mut()?;
        surface.set_line_width(self.config.line_width);
        surface.set_stroke_color(self.color);
        Some(draw::commit_segment(surface, self.config.mode, segment))
    }

    fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        self.target.bounding_rect().to_local(client_x, client_y)
    }
}
