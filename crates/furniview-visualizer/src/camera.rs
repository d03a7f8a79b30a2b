use glam::{DMat4, DVec3};

use furniview_core::constants::{
    DEFAULT_CAMERA_ROTATION, DRAG_DEGREES_PER_PIXEL, ZOOM_3D_MAX, ZOOM_3D_MIN, ZOOM_3D_STEP,
};

/// Distance from the camera to the room centre, in scene units.
pub const CAMERA_DISTANCE: f64 = 1000.0;

/// Orbit camera for the 3D view.
///
/// The room sits at the origin. Rotation is applied as X then Y (degrees),
/// the zoom scales the whole scene, and the camera looks down -Z from a
/// fixed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    pub rotate_x: f64, // degrees
    pub rotate_y: f64, // degrees
    pub zoom: f64,
    pub fov: f64, // degrees
    pub near: f64,
    pub far: f64,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            rotate_x: DEFAULT_CAMERA_ROTATION,
            rotate_y: DEFAULT_CAMERA_ROTATION,
            zoom: 1.0,
            fov: 45.0,
            near: 0.1,
            far: 10000.0,
        }
    }
}

impl Camera3D {
    pub fn set_rotation(&mut self, x_deg: f64, y_deg: f64) {
        self.rotate_x = x_deg;
        self.rotate_y = y_deg;
    }

    /// Orbit by a pointer drag in pixels.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.rotate_y += dx * DRAG_DEGREES_PER_PIXEL;
        self.rotate_x -= dy * DRAG_DEGREES_PER_PIXEL;
    }

    /// One scroll tick: positive zooms in, anything else zooms out.
    pub fn scroll(&mut self, delta: f64) {
        let zoom = if delta > 0.0 {
            self.zoom * ZOOM_3D_STEP
        } else {
            self.zoom / ZOOM_3D_STEP
        };
        self.zoom = zoom.clamp(ZOOM_3D_MIN, ZOOM_3D_MAX);
    }

    /// Back to the default angles and zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get_view_matrix(&self) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, -CAMERA_DISTANCE))
            * DMat4::from_scale(DVec3::splat(self.zoom))
            * DMat4::from_rotation_x(self.rotate_x.to_radians())
            * DMat4::from_rotation_y(self.rotate_y.to_radians())
    }

    pub fn get_projection_matrix(&self, aspect_ratio: f64) -> DMat4 {
        let aspect = if aspect_ratio > 0.0 { aspect_ratio } else { 1.0 };
        DMat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// Eye position in scene space.
    pub fn get_eye_position(&self) -> DVec3 {
        self.get_view_matrix().inverse().transform_point3(DVec3::ZERO)
    }
}
