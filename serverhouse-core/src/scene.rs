//! Full Canvas2D frame composition: circuit backdrop, room layout, sparks.

use crate::config::BACKDROP_DENSITY;
use crate::draw::draw_circuit_board;
use crate::{room_layout, DrawList, FrameParams, ParticleField, RandomSource};

/// Per-canvas Canvas2D scene state. The draw list is rebuilt every frame;
/// only the particle field carries over.
#[derive(Debug, Default)]
pub struct RoomScene {
    list: DrawList,
    particles: ParticleField,
}

impl RoomScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Build the commands for `frame`.
    pub fn compose(&mut self, frame: &FrameParams, rng: &mut dyn RandomSource) -> &DrawList {
        self.list.clear();

        let width = frame.surface.css_width;
        let height = frame.surface.css_height;

        draw_circuit_board(&mut self.list, 0.0, 0.0, width, height, BACKDROP_DENSITY, rng);

        for element in room_layout(frame.room, frame.is_active, width, height, frame.time_secs) {
            element.paint(&mut self.list);
        }

        if frame.is_active {
            self.particles.spawn(width, height, rng);
            self.particles.draw_and_step(&mut self.list);
        } else {
            self.particles.clear();
        }

        &self.list
    }
}
