use glam::Vec2;

use crate::particle::Particle;

/// A global force, applied by the simulator to every eligible particle once
/// per tick through the particle's force accumulator.
///
/// Both variants act on all particles. Storing the contribution in the
/// accumulator instead of folding it into the integrator keeps the door open
/// for forces that act differently per particle (anchored springs and the
/// like), at the cost of a copy per application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Force {
    /// A uniform acceleration field, in units per ms².
    Gravity(Vec2),
    /// Linear damping opposing the current velocity.
    Drag(f32),
}

impl Force {
    /// The gravity the simulator starts with, tuned for millisecond ticks.
    pub const DEFAULT_GRAVITY: Force = Force::Gravity(Vec2::new(0.0, 0.000_01));
    /// The drag the simulator starts with.
    pub const DEFAULT_DRAG: Force = Force::Drag(0.001);

    /// Adds this force's contribution to the particle's accumulator.
    ///
    /// Particles with zero inverse mass are immovable and skipped. Gravity is
    /// pre-multiplied by the particle's mass, so after the integrator scales
    /// the accumulator by the inverse mass again every particle sees the same
    /// acceleration.
    pub fn apply(&self, particle: &mut Particle, _elapsed_ms: f32) {
        if particle.inverse_mass() <= 0.0 {
            return;
        }

        match self {
            Force::Gravity(field) => {
                particle.add_force(*field / particle.inverse_mass());
            }
            Force::Drag(damping) => {
                particle.add_force(particle.velocity() * -damping);
            }
        }
    }
}
