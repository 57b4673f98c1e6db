use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held direction keys. Built by the host from window events and handed to
/// the scene on every update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    pub fn process_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => match key_event.physical_key {
                PhysicalKey::Code(code) => {
                    self.set_key(code, key_event.state == ElementState::Pressed)
                }
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Focused(false) => {
                self.clear();
                false
            }
            _ => false,
        }
    }

    /// Applies a press or release. Returns false for keys that do not steer.
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        let flag = match code {
            KeyCode::KeyW | KeyCode::ArrowUp => &mut self.up,
            KeyCode::KeyS | KeyCode::ArrowDown => &mut self.down,
            KeyCode::KeyA | KeyCode::ArrowLeft => &mut self.left,
            KeyCode::KeyD | KeyCode::ArrowRight => &mut self.right,
            _ => return false,
        };
        *flag = pressed;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Sum of unit vectors for the held keys, y pointing down the screen.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction
    }
}
