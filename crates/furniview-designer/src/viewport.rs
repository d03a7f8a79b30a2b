//! Viewport and coordinate transformation for the 2D layout canvas.
//!
//! Converts between model space (metres, origin at the room's top-left
//! corner) and screen space (pixels, origin at the canvas top-left). The room
//! box is centred in the canvas; zoom scales around that centre and the
//! integer pan offset is applied last.

use std::fmt;

use furniview_core::constants::{ZOOM_2D_MAX, ZOOM_2D_MIN, ZOOM_2D_STEP};
use furniview_core::{Point, Room, UNITS_PER_METER};

/// Zoom and pan state of the 2D canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: i32,
    pan_y: i32,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport for a canvas of the given pixel size.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0,
            pan_y: 0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Current zoom level (1.0 = 100 pixels per metre).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the 2D zoom range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_2D_MIN, ZOOM_2D_MAX);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_2D_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_2D_STEP);
    }

    pub fn pan_x(&self) -> i32 {
        self.pan_x
    }

    pub fn pan_y(&self) -> i32 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: i32, y: i32) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a pixel delta.
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.pan_x = self.pan_x.saturating_add(dx);
        self.pan_y = self.pan_y.saturating_add(dy);
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0;
        self.pan_y = 0;
    }

    /// Pixels drawn per metre of model space.
    pub fn pixels_per_meter(&self) -> f64 {
        UNITS_PER_METER * self.zoom
    }

    /// Screen position of the room's top-left corner, before panning.
    ///
    /// ```text
    /// top_left = canvas_centre - room_size * 100 * zoom / 2
    /// ```
    pub fn room_top_left(&self, room: &Room) -> Point {
        let ppm = self.pixels_per_meter();
        Point::new(
            self.canvas_width / 2.0 - room.width * ppm / 2.0,
            self.canvas_height / 2.0 - room.length * ppm / 2.0,
        )
    }

    /// Converts a room-local model point (metres) to screen pixels.
    ///
    /// ```text
    /// screen = top_left + model * 100 * zoom + pan
    /// ```
    pub fn model_to_screen(&self, room: &Room, model: Point) -> Point {
        let origin = self.room_top_left(room);
        let ppm = self.pixels_per_meter();
        Point::new(
            origin.x + model.x * ppm + f64::from(self.pan_x),
            origin.y + model.y * ppm + f64::from(self.pan_y),
        )
    }

    /// Converts screen pixels back to a room-local model point (metres).
    /// Exact inverse of [`Viewport::model_to_screen`].
    pub fn screen_to_model(&self, room: &Room, screen: Point) -> Point {
        let origin = self.room_top_left(room);
        let ppm = self.pixels_per_meter();
        Point::new(
            (screen.x - f64::from(self.pan_x) - origin.x) / ppm,
            (screen.y - f64::from(self.pan_y) - origin.y) / ppm,
        )
    }

    /// Converts a pixel distance to metres at the current zoom.
    pub fn pixels_to_meters(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_meter()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({}, {})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
