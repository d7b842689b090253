use crate::config::RigConfig;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub last_pointer: Vec2,
    pub target_rotation_y: f32,
    pub target_rotation_x: f32,
}

/// Turns pointer/touch events into rotation targets for the rig.
///
/// Down is container-scoped; move and up are window-scoped so a drag that
/// leaves the container still tracks and still ends.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    drag: DragState,
    config: RigConfig,
}

impl OrbitControls {
    pub fn new(config: RigConfig) -> Self {
        Self {
            drag: DragState::default(),
            config,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.drag
    }

    pub fn pointer_down(&mut self, _kind: PointerKind, pos: Vec2) {
        self.drag.is_dragging = true;
        self.drag.last_pointer = pos;
    }

    pub fn pointer_move(&mut self, kind: PointerKind, pos: Vec2) {
        if !self.drag.is_dragging {
            return;
        }
        let delta = pos - self.drag.last_pointer;
        self.drag.target_rotation_y += delta.x * self.config.drag_sensitivity;
        // Touch drags only orbit unless touch tilt is switched on
        if kind == PointerKind::Mouse || self.config.touch_tilt_enabled {
            let limit = self.config.tilt_limit;
            self.drag.target_rotation_x = (self.drag.target_rotation_x
                + delta.y * self.config.drag_sensitivity)
                .clamp(-limit, limit);
        }
        self.drag.last_pointer = pos;
    }

    pub fn pointer_up(&mut self) {
        self.drag.is_dragging = false;
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use glam::Vec2;
    use web_sys as web;

    #[inline]
    pub fn mouse_client_px(ev: &web::MouseEvent) -> Vec2 {
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
    }

    /// Client position of the first active touch point, if any.
    #[inline]
    pub fn first_touch_client_px(ev: &web::TouchEvent) -> Option<Vec2> {
        ev.touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;
