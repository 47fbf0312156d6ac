use glam::Vec2;

use crate::color::Rgba;

/// Minimum lifespan of an emitted particle, in milliseconds.
pub const PARTICLE_MIN_LIFESPAN: f32 = 1000.0;
/// Maximum number of milliseconds added on top of the minimum lifespan.
pub const PARTICLE_MAX_LIFESPAN_INCREASE: f32 = 10000.0;
/// Upper bound on an emitted particle's lifespan, in milliseconds.
pub const PARTICLE_MAX_LIFESPAN: f32 = PARTICLE_MIN_LIFESPAN + PARTICLE_MAX_LIFESPAN_INCREASE;
/// Radius substituted when a non-positive radius is requested.
pub const PARTICLE_DEFAULT_RADIUS: f32 = 5.0;
/// Inverse mass substituted by [`Particle::set_mass`] for non-positive
/// masses: the largest finite value rather than infinity.
pub const MAX_INVERSE_MASS: f32 = f32::MAX;

/// A single simulated point mass.
///
/// Particles are created by [`crate::emitter::Emitter`]s, accumulate forces
/// each tick and advance through [`Particle::integrate`]. They never remove
/// themselves; the simulator drops them once they report inactive or leave
/// the simulation area.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    force_accumulator: Vec2,
    lifespan: f32,
    age: f32,
    radius: f32,
    inverse_mass: f32,
    base_color: Rgba,
}

impl Particle {
    /// Creates a particle at age zero. A non-positive lifespan or radius is
    /// replaced by the documented default.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, lifespan: f32, radius: f32) -> Self {
        Self {
            position,
            velocity,
            force_accumulator: Vec2::ZERO,
            lifespan: if lifespan > 0.0 {
                lifespan
            } else {
                PARTICLE_MIN_LIFESPAN
            },
            age: 0.0,
            radius: if radius > 0.0 {
                radius
            } else {
                PARTICLE_DEFAULT_RADIUS
            },
            inverse_mass: 0.0,
            base_color: Rgba::default(),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline(always)]
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline(always)]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline(always)]
    #[must_use]
    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Milliseconds left before the particle dies of old age.
    #[inline(always)]
    #[must_use]
    pub fn life_left(&self) -> f32 {
        self.lifespan - self.age
    }

    #[inline(always)]
    #[must_use]
    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Sets the mass, storing its reciprocal. Non-positive masses clamp to
    /// [`MAX_INVERSE_MASS`].
    pub fn set_mass(&mut self, mass: f32) {
        self.inverse_mass = if mass > 0.0 { 1.0 / mass } else { MAX_INVERSE_MASS };
    }

    /// Sets the inverse mass directly. Zero is meaningful here: it marks the
    /// particle immovable, so non-positive values collapse to it.
    pub fn set_inverse_mass(&mut self, inverse_mass: f32) {
        self.inverse_mass = if inverse_mass > 0.0 { inverse_mass } else { 0.0 };
    }

    #[must_use]
    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    pub fn set_base_color(&mut self, color: Rgba) {
        self.base_color = color;
    }

    /// The render-facing color: the base color faded by the remaining-life
    /// fraction. Recomputed on demand, never stored.
    #[must_use]
    pub fn aged_color(&self) -> Rgba {
        self.base_color.aged(self.life_left() / self.lifespan)
    }

    /// Adds a force contribution to this tick's accumulator.
    pub fn add_force(&mut self, force: Vec2) {
        self.force_accumulator += force;
    }

    /// Advances the particle by `elapsed_ms`, returning whether it is still
    /// active.
    ///
    /// Velocity is updated before position (semi-implicit Euler); the ½at²
    /// term of the position update is dropped since tick intervals are
    /// assumed small enough to make it negligible. A particle whose lifespan
    /// ran out reports inactive immediately and this tick's accumulated
    /// forces are discarded.
    pub fn integrate(&mut self, elapsed_ms: f32) -> bool {
        self.age += elapsed_ms;

        if self.life_left() <= 0.0 {
            return false;
        }

        self.velocity += self.force_accumulator * self.inverse_mass * elapsed_ms;
        self.position += self.velocity * elapsed_ms;

        // Forces do not persist across ticks; contributors re-apply each tick.
        self.force_accumulator = Vec2::ZERO;
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Particle, MAX_INVERSE_MASS, PARTICLE_DEFAULT_RADIUS, PARTICLE_MIN_LIFESPAN};

    fn particle(lifespan: f32) -> Particle {
        Particle::new(Vec2::ZERO, Vec2::ZERO, lifespan, 2.0)
    }

    #[test]
    fn mass_setter_stores_reciprocal() {
        let mut p = particle(1000.0);

        p.set_mass(4.0);
        assert!((p.inverse_mass() - 0.25).abs() < f32::EPSILON);

        p.set_mass(0.0);
        assert!((p.inverse_mass() - MAX_INVERSE_MASS).abs() < f32::EPSILON);

        p.set_mass(-3.0);
        assert!((p.inverse_mass() - MAX_INVERSE_MASS).abs() < f32::EPSILON);
    }

    #[test]
    fn inverse_mass_setter_allows_immovable() {
        let mut p = particle(1000.0);

        p.set_inverse_mass(2.0);
        assert!((p.inverse_mass() - 2.0).abs() < f32::EPSILON);

        p.set_inverse_mass(-1.0);
        assert!(p.inverse_mass().abs() < f32::EPSILON);
    }

    #[test]
    fn non_positive_construction_inputs_fall_back_to_defaults() {
        let p = Particle::new(Vec2::ZERO, Vec2::ZERO, 0.0, -1.0);

        assert!((p.lifespan() - PARTICLE_MIN_LIFESPAN).abs() < f32::EPSILON);
        assert!((p.radius() - PARTICLE_DEFAULT_RADIUS).abs() < f32::EPSILON);
    }

    #[test]
    fn dies_exactly_when_lifespan_is_exhausted() {
        let mut p = particle(100.0);

        assert!(p.integrate(40.0));
        assert!(p.integrate(59.9));
        // Cumulative age reaches the lifespan on this call, never before.
        assert!(!p.integrate(0.1));
    }

    #[test]
    fn dead_particle_skips_integration() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 50.0, 2.0);
        p.set_mass(1.0);
        p.add_force(Vec2::new(100.0, 0.0));

        assert!(!p.integrate(60.0));
        // Neither the force nor the velocity moved it.
        assert_eq!(p.position(), Vec2::ZERO);
        assert_eq!(p.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn integration_is_semi_implicit_euler() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1000.0, 2.0);
        p.set_mass(2.0);
        p.add_force(Vec2::new(4.0, 0.0));

        assert!(p.integrate(10.0));

        // velocity += f * (1/m) * dt = 4 * 0.5 * 10 = 20, then position uses
        // the updated velocity: 21 * 10 = 210.
        assert!((p.velocity().x - 21.0).abs() < 1e-4);
        assert!((p.position().x - 210.0).abs() < 1e-3);
    }

    #[test]
    fn forces_are_cleared_after_integration() {
        let mut p = particle(1000.0);
        p.set_mass(1.0);
        p.add_force(Vec2::new(1.0, 0.0));

        assert!(p.integrate(1.0));
        let velocity_after_first = p.velocity();

        // Second tick with no re-applied force leaves velocity unchanged.
        assert!(p.integrate(1.0));
        assert_eq!(p.velocity(), velocity_after_first);
    }
}
