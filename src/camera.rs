use glam::Vec2;

use crate::camera_controller::MovementInput;

/// Top-down camera. `position` is the world point drawn at screen center.
pub struct Camera {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Camera {
    pub fn new(position: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            position,
            radius,
            speed,
        }
    }

    /// Moves by `speed * elapsed` along each held direction. Diagonals add up unnormalized.
    pub fn displace(&mut self, input: &MovementInput, elapsed: f32) {
        self.position += input.direction() * self.speed * elapsed;
    }
}

/// Maps window pixels to screen-relative and world coordinates.
pub struct Projection {
    half_extent: Vec2,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            half_extent: Self::half(width, height),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.half_extent = Self::half(width, height);
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Pixel position relative to screen center.
    pub fn screen_coords(&self, pixel: Vec2) -> Vec2 {
        pixel - self.half_extent
    }

    pub fn world_coords(&self, camera: &Camera, pixel: Vec2) -> Vec2 {
        camera.position + self.screen_coords(pixel)
    }

    fn half(width: u32, height: u32) -> Vec2 {
        Vec2::new(width as f32, height as f32) / 2.0
    }
}
