use glam::Vec2;

use crate::camera_controller::MovementInput;

pub type Color = [f32; 3];

/// Drawing primitives a renderer offers a scene. Coordinates are window pixels.
pub trait SceneSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn outline_rect(&mut self, origin: Vec2, size: Vec2, thickness: f32, color: Color) {
        let t = thickness;
        self.fill_rect(origin, Vec2::new(size.x, t), color);
        self.fill_rect(origin + Vec2::new(0.0, size.y - t), Vec2::new(size.x, t), color);
        self.fill_rect(origin, Vec2::new(t, size.y), color);
        self.fill_rect(origin + Vec2::new(size.x - t, 0.0), Vec2::new(t, size.y), color);
    }
}

/// Something the host ticks once and draws once per frame.
pub trait Scene {
    fn update(&mut self, elapsed: f32, input: &MovementInput);
    fn render(&self, surface: &mut dyn SceneSurface);
    /// Diagnostic lines for an overlay. Free-form.
    fn overlay_lines(&self) -> Vec<String>;
    fn resize(&mut self, _width: u32, _height: u32) {}
}
