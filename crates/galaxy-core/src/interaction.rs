//! Rotation/zoom state and the arbitration between its mutation sources:
//! pointer drags, wheel zoom, keyboard steps and ambient animation ticks.

use glam::Vec2;
use std::time::Duration;

use crate::constants::{
    AUTO_PITCH_PER_MS, AUTO_YAW_PER_MS, DRAG_ROTATE_PER_PX, KEY_ROTATE_STEP, KEY_ZOOM_STEP,
    WHEEL_MIN_INTERVAL_MS, WHEEL_ZOOM_PER_UNIT, ZOOM_MAX, ZOOM_MIN,
};

/// Accumulated view rotation in radians. Unbounded by design: values grow
/// without wraparound and are only normalized by a presentation layer if it
/// needs them bounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
}

#[derive(Clone, Copy, Debug)]
struct DragState {
    pointer_id: i32,
    last: Vec2,
}

/// Commands the keyboard can issue. Parsing is a pure function so the
/// mapping stays host-testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
    ZoomIn,
    ZoomOut,
    ClearSelection,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowLeft" => Some(KeyCommand::RotateLeft),
        "ArrowRight" => Some(KeyCommand::RotateRight),
        "ArrowUp" => Some(KeyCommand::RotateUp),
        "ArrowDown" => Some(KeyCommand::RotateDown),
        "+" | "=" => Some(KeyCommand::ZoomIn),
        "-" => Some(KeyCommand::ZoomOut),
        "Escape" => Some(KeyCommand::ClearSelection),
        _ => None,
    }
}

/// Owns rotation and zoom; consumes input events and animation ticks.
pub struct InteractionController {
    pub rotation: Rotation,
    scale: f32,
    drag: Option<DragState>,
    last_wheel_ms: Option<f64>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            scale: 1.0,
            drag: None,
            last_wheel_ms: None,
        }
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom scale, always within [ZOOM_MIN, ZOOM_MAX].
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag on primary-button press. Secondary pointers are ignored
    /// while a drag is active; returns whether a drag actually began.
    pub fn pointer_down(&mut self, pointer_id: i32, button: i16, x: f32, y: f32) -> bool {
        if button != 0 || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragState {
            pointer_id,
            last: Vec2::new(x, y),
        });
        true
    }

    /// Movement of the dragging pointer rotates the view; other pointers are
    /// ignored.
    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if drag.pointer_id != pointer_id {
            return;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - drag.last;
        drag.last = pos;
        self.rotation.yaw += delta.x * DRAG_ROTATE_PER_PX;
        self.rotation.pitch += delta.y * DRAG_ROTATE_PER_PX;
    }

    /// Release ends the drag unconditionally. Returns whether a drag ended.
    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    /// Wheel zoom with inverted delta (scroll up zooms in). Events closer
    /// than WHEEL_MIN_INTERVAL_MS to the last processed one are dropped;
    /// returns whether this one was processed.
    pub fn wheel(&mut self, delta_y: f32, now_ms: f64) -> bool {
        if let Some(last) = self.last_wheel_ms {
            if now_ms - last < WHEEL_MIN_INTERVAL_MS {
                return false;
            }
        }
        self.last_wheel_ms = Some(now_ms);
        self.set_scale(self.scale - delta_y * WHEEL_ZOOM_PER_UNIT);
        true
    }

    /// Apply a keyboard command. ClearSelection is not ours; the caller
    /// routes it to the selection machine.
    pub fn apply_key(&mut self, cmd: KeyCommand) {
        match cmd {
            KeyCommand::RotateLeft => self.rotation.yaw -= KEY_ROTATE_STEP,
            KeyCommand::RotateRight => self.rotation.yaw += KEY_ROTATE_STEP,
            KeyCommand::RotateUp => self.rotation.pitch -= KEY_ROTATE_STEP,
            KeyCommand::RotateDown => self.rotation.pitch += KEY_ROTATE_STEP,
            KeyCommand::ZoomIn => self.set_scale(self.scale + KEY_ZOOM_STEP),
            KeyCommand::ZoomOut => self.set_scale(self.scale - KEY_ZOOM_STEP),
            KeyCommand::ClearSelection => {}
        }
    }

    /// Ambient auto-rotation. Advances by real elapsed time, suspended while
    /// a drag is active and whenever reduced motion is asserted.
    pub fn tick(&mut self, dt: Duration, reduced_motion: bool) {
        if self.drag.is_some() || reduced_motion {
            return;
        }
        let dt_ms = dt.as_secs_f32() * 1000.0;
        self.rotation.yaw += dt_ms * AUTO_YAW_PER_MS;
        self.rotation.pitch += dt_ms * AUTO_PITCH_PER_MS;
    }

    fn set_scale(&mut self, value: f32) {
        self.scale = value.clamp(ZOOM_MIN, ZOOM_MAX);
    }
}
