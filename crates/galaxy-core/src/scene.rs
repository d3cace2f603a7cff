//! Explicit state holder tying store, layout, interaction and selection
//! together, with a recompute step (`items`) the rendering layer invokes
//! after any mutation. Runs headlessly; the web crate is only a binding.

use std::time::Duration;

use crate::constants::{MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
use crate::interaction::{command_for_key, InteractionController, KeyCommand};
use crate::layout::{compute_positions, Position};
use crate::projection::{orb_diameter, project};
use crate::selection::{announcement, Selection, SelectionStateMachine};
use crate::skills::SkillStore;

/// Per-item geometry handed to whatever draws the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemGeometry {
    pub id: String,
    pub screen_x: f32,
    pub screen_y: f32,
    pub diameter: f32,
    pub visual_scale: f32,
    pub is_selected: bool,
    pub is_comparing: bool,
}

pub struct Galaxy {
    store: SkillStore,
    width: f32,
    height: f32,
    positions: Vec<Position>,
    pub controller: InteractionController,
    pub selection: SelectionStateMachine,
    torn_down: bool,
}

impl Galaxy {
    pub fn new(store: SkillStore, width: f32, height: f32) -> Self {
        let width = width.max(MIN_VIEWPORT_WIDTH);
        let height = height.max(MIN_VIEWPORT_HEIGHT);
        let positions = compute_positions(store.len(), width, height);
        Self {
            store,
            width,
            height,
            positions,
            controller: InteractionController::new(),
            selection: SelectionStateMachine::new(),
            torn_down: false,
        }
    }

    pub fn store(&self) -> &SkillStore {
        &self.store
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Re-layout for a new container size. Zero or degenerate sizes are
    /// clamped to the minimum floor. Rotation, zoom and selection persist.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.torn_down {
            return;
        }
        self.width = width.max(MIN_VIEWPORT_WIDTH);
        self.height = height.max(MIN_VIEWPORT_HEIGHT);
        self.positions = compute_positions(self.store.len(), self.width, self.height);
    }

    /// Per-frame animation step.
    pub fn tick(&mut self, dt: Duration, reduced_motion: bool) {
        if self.torn_down {
            return;
        }
        self.controller.tick(dt, reduced_motion);
    }

    pub fn pointer_down(&mut self, pointer_id: i32, button: i16, x: f32, y: f32) -> bool {
        if self.torn_down {
            return false;
        }
        self.controller.pointer_down(pointer_id, button, x, y)
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) {
        if self.torn_down {
            return;
        }
        self.controller.pointer_move(pointer_id, x, y);
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if self.torn_down {
            return false;
        }
        self.controller.pointer_up(pointer_id)
    }

    pub fn wheel(&mut self, delta_y: f32, now_ms: f64) -> bool {
        if self.torn_down {
            return false;
        }
        self.controller.wheel(delta_y, now_ms)
    }

    /// Route a raw key name; returns true when it was handled (callers use
    /// this to decide on preventDefault).
    pub fn key(&mut self, key: &str) -> bool {
        if self.torn_down {
            return false;
        }
        match command_for_key(key) {
            Some(KeyCommand::ClearSelection) => {
                self.selection.escape();
                true
            }
            Some(cmd) => {
                self.controller.apply_key(cmd);
                true
            }
            None => false,
        }
    }

    /// Returns whether a selection transition actually occurred, so callers
    /// only report transitions (ignored ids and torn-down scenes do not
    /// count).
    pub fn click(&mut self, id: &str) -> bool {
        if self.torn_down || !self.store.contains(id) {
            return false;
        }
        self.selection.click(id);
        true
    }

    pub fn compare_toggle(&mut self, id: &str) -> bool {
        if self.torn_down || !self.store.contains(id) {
            return false;
        }
        self.selection.compare_toggle(id);
        true
    }

    pub fn escape(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.selection.escape()
    }

    pub fn selection_state(&self) -> Selection {
        self.selection.state()
    }

    pub fn announcement(&self) -> String {
        announcement(&self.selection.state(), &self.store)
    }

    /// The explicit recompute-projection step: current screen geometry for
    /// every item, in record order.
    pub fn items(&self) -> Vec<ItemGeometry> {
        let rotation = self.controller.rotation;
        let scale = self.controller.scale();
        self.store
            .records()
            .iter()
            .zip(&self.positions)
            .map(|(record, &pos)| {
                let p = project(pos, rotation, scale, self.width, self.height);
                ItemGeometry {
                    id: record.id.clone(),
                    screen_x: p.screen_x,
                    screen_y: p.screen_y,
                    diameter: orb_diameter(record.percent, p.visual_scale),
                    visual_scale: p.visual_scale,
                    is_selected: self.selection.is_selected(&record.id),
                    is_comparing: self.selection.is_comparing(&record.id),
                }
            })
            .collect()
    }

    /// Component teardown: selection clears and every later mutation,
    /// including a stale queued animation callback, becomes a no-op.
    pub fn teardown(&mut self) {
        self.selection.escape();
        self.torn_down = true;
        log::debug!("galaxy torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
