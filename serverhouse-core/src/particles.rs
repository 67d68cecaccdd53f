//! Rising spark particles shown over powered Canvas2D rooms.

use crate::config::{LED_COLORS, MAX_PARTICLES, PARTICLE_LIFETIME, PARTICLE_RADIUS};
use crate::{Color, DrawCommand, DrawList, Point, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Pixels per frame.
    pub velocity: Point,
    /// Remaining frames.
    pub life: f64,
    pub max_life: f64,
    pub color: Color,
}

impl Particle {
    /// Opacity fades linearly with remaining life.
    pub fn alpha(&self) -> f64 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Advance by one frame.
    pub fn step(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.life -= 1.0;
    }
}

/// Bounded set of live particles.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn push(&mut self, particle: Particle) {
        if self.particles.len() < MAX_PARTICLES {
            self.particles.push(particle);
        }
    }

    /// Emit one spark from the bottom edge of a `width` x `height` area,
    /// drifting upwards.
    pub fn spawn(&mut self, width: f64, height: f64, rng: &mut dyn RandomSource) {
        if self.particles.len() >= MAX_PARTICLES || width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = rng.next_f64() * width;
        let vx = (rng.next_f64() - 0.5) * 0.6;
        let vy = -(0.5 + rng.next_f64());
        let color_index = ((rng.next_f64() * LED_COLORS.len() as f64) as usize)
            .min(LED_COLORS.len() - 1);
        self.push(Particle {
            position: Point::new(x, height),
            velocity: Point::new(vx, vy),
            life: PARTICLE_LIFETIME,
            max_life: PARTICLE_LIFETIME,
            color: LED_COLORS[color_index],
        });
    }

    /// Draw every particle at its current state, then advance them and
    /// drop the dead ones. Leaves global alpha at 1.
    pub fn draw_and_step(&mut self, list: &mut DrawList) {
        if self.particles.is_empty() {
            return;
        }
        for particle in &mut self.particles {
            let alpha = particle.alpha();
            list.push(DrawCommand::SetAlpha(alpha));
            list.fill_circle(particle.position, PARTICLE_RADIUS * alpha, particle.color);
            particle.step();
        }
        list.push(DrawCommand::SetAlpha(1.0));
        self.particles.retain(Particle::is_alive);
    }
}
