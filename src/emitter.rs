use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    color::Rgba,
    particle::{
        Particle, PARTICLE_MAX_LIFESPAN, PARTICLE_MAX_LIFESPAN_INCREASE, PARTICLE_MIN_LIFESPAN,
    },
};

/// Default number of particles emitted per second.
pub const EMITTER_DEFAULT_DENSITY: f32 = 10.0;
/// Default upper bound for the derived particle radius.
pub const EMITTER_DEFAULT_MAX_RADIUS: f32 = 8.0;

/// A spawn-rate policy: given an elapsed time slice, produces a batch of new
/// particles with randomized lifespan, velocity jitter, mass and color.
///
/// Every random draw comes from the emitter's own generator, so a seeded
/// emitter (see [`Emitter::seeded`]) emits a reproducible stream.
#[derive(Debug)]
pub struct Emitter {
    position: Vec2,
    /// Launch direction; its magnitude is the mean initial speed.
    direction: Vec2,
    density: f32,
    particle_max_radius: f32,
    randomize_initial_velocity: bool,
    rng: StdRng,
}

impl Emitter {
    /// Creates an entropy-seeded emitter. Non-positive density or radius
    /// inputs are replaced by the documented defaults.
    #[must_use]
    pub fn new(
        position: Vec2,
        direction: Vec2,
        particles_per_second: f32,
        particle_max_radius: f32,
        randomize_initial_velocity: bool,
    ) -> Self {
        Self::with_rng(
            position,
            direction,
            particles_per_second,
            particle_max_radius,
            randomize_initial_velocity,
            StdRng::from_entropy(),
        )
    }

    /// Creates an emitter with a deterministic random stream: same seed and
    /// parameters, same batches. Intended for tests and reproducible runs.
    #[must_use]
    pub fn seeded(
        position: Vec2,
        direction: Vec2,
        particles_per_second: f32,
        particle_max_radius: f32,
        randomize_initial_velocity: bool,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            position,
            direction,
            particles_per_second,
            particle_max_radius,
            randomize_initial_velocity,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        position: Vec2,
        direction: Vec2,
        particles_per_second: f32,
        particle_max_radius: f32,
        randomize_initial_velocity: bool,
        rng: StdRng,
    ) -> Self {
        Self {
            position,
            direction,
            density: if particles_per_second > 0.0 {
                particles_per_second
            } else {
                EMITTER_DEFAULT_DENSITY
            },
            particle_max_radius: if particle_max_radius > 0.0 {
                particle_max_radius
            } else {
                EMITTER_DEFAULT_MAX_RADIUS
            },
            randomize_initial_velocity,
            rng,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    /// Particles emitted per second.
    #[must_use]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Non-positive rates are ignored, the current density stays in place.
    pub fn set_density(&mut self, particles_per_second: f32) {
        if particles_per_second > 0.0 {
            self.density = particles_per_second;
        }
    }

    #[must_use]
    pub fn particle_max_radius(&self) -> f32 {
        self.particle_max_radius
    }

    /// Non-positive radii are ignored, the current bound stays in place.
    pub fn set_particle_max_radius(&mut self, particle_max_radius: f32) {
        if particle_max_radius > 0.0 {
            self.particle_max_radius = particle_max_radius;
        }
    }

    #[must_use]
    pub fn randomizes_initial_velocity(&self) -> bool {
        self.randomize_initial_velocity
    }

    pub fn set_randomize_initial_velocity(&mut self, randomize: bool) {
        self.randomize_initial_velocity = randomize;
    }

    /// Emits the batch of particles owed for an `elapsed_ms` time slice.
    ///
    /// The batch size is `round(elapsed_ms / 1000 * density)`; fractional
    /// particles are not carried over between calls, so slices short enough
    /// to round to zero emit nothing. Each particle starts at the emitter's
    /// position, aged zero, with:
    /// - a lifespan in `[PARTICLE_MIN_LIFESPAN, PARTICLE_MAX_LIFESPAN]` ms,
    /// - the emitter's direction as velocity, each axis optionally perturbed
    ///   by an independent uniform `(-0.5, 0.5)` offset,
    /// - a radius proportional to both the lifespan and the launch speed,
    /// - a uniform `(0, 1)` mass and a random opaque color.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn emit(&mut self, elapsed_ms: f32) -> Vec<Particle> {
        let count = (elapsed_ms / 1000.0 * self.density).round() as usize;
        let mut batch = Vec::with_capacity(count);

        for _ in 0..count {
            let lifespan = PARTICLE_MIN_LIFESPAN
                + (self.rng.gen::<f32>() * PARTICLE_MAX_LIFESPAN_INCREASE).round();

            let mut velocity = self.direction;
            if self.randomize_initial_velocity {
                // An exactly-zero draw means no perturbation on that axis.
                let jitter_x = self.rng.gen_range(-0.5..0.5);
                if jitter_x != 0.0 {
                    velocity.x += jitter_x;
                }
                let jitter_y = self.rng.gen_range(-0.5..0.5);
                if jitter_y != 0.0 {
                    velocity.y += jitter_y;
                }
            }

            // Radius is derived, not sampled: long-lived, fast particles are
            // the biggest ones.
            let radius =
                lifespan / PARTICLE_MAX_LIFESPAN * self.particle_max_radius * velocity.length();

            let mut particle = Particle::new(self.position, velocity, lifespan, radius);
            particle.set_base_color(Rgba::random(&mut self.rng));
            // The mass setter clamps a zero draw away from the singularity.
            particle.set_mass(self.rng.gen::<f32>());
            batch.push(particle);
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Emitter, EMITTER_DEFAULT_DENSITY, EMITTER_DEFAULT_MAX_RADIUS};
    use crate::particle::{PARTICLE_MAX_LIFESPAN, PARTICLE_MIN_LIFESPAN};

    fn test_emitter(density: f32, randomize: bool) -> Emitter {
        Emitter::seeded(
            Vec2::new(10.0, 20.0),
            Vec2::new(0.2, -0.1),
            density,
            8.0,
            randomize,
            42,
        )
    }

    #[test]
    fn emits_density_particles_per_second() {
        let mut emitter = test_emitter(10.0, false);
        let batch = emitter.emit(1000.0);

        assert_eq!(batch.len(), 10);
        for particle in &batch {
            assert!(particle.lifespan() >= PARTICLE_MIN_LIFESPAN);
            assert!(particle.lifespan() <= PARTICLE_MAX_LIFESPAN);
            assert!((particle.life_left() - particle.lifespan()).abs() < f32::EPSILON);
            assert_eq!(particle.position(), Vec2::new(10.0, 20.0));
        }
    }

    #[test]
    fn batch_size_rounds_to_nearest() {
        let mut emitter = test_emitter(10.0, false);

        // 10 p/s over 250ms owes 2.5 particles, rounded up.
        assert_eq!(emitter.emit(250.0).len(), 3);
        // 140ms owes 1.4, rounded down.
        assert_eq!(emitter.emit(140.0).len(), 1);
    }

    #[test]
    fn no_emission_below_rounding_threshold() {
        // 1 p/s over a 16ms frame owes 0.016 particles. The fraction is not
        // carried over, so a stream of short ticks emits nothing at all.
        let mut emitter = test_emitter(1.0, false);
        for _ in 0..10 {
            assert!(emitter.emit(16.0).is_empty());
        }
    }

    #[test]
    fn fixed_direction_without_randomization() {
        let mut emitter = test_emitter(20.0, false);
        for particle in emitter.emit(1000.0) {
            assert_eq!(particle.velocity(), Vec2::new(0.2, -0.1));
        }
    }

    #[test]
    fn jitter_stays_within_half_unit_per_axis() {
        let mut emitter = test_emitter(200.0, true);
        for particle in emitter.emit(1000.0) {
            let offset = particle.velocity() - Vec2::new(0.2, -0.1);
            assert!(offset.x.abs() < 0.5);
            assert!(offset.y.abs() < 0.5);
        }
    }

    #[test]
    fn radius_scales_with_lifespan_and_speed() {
        let mut emitter = test_emitter(50.0, true);
        for particle in emitter.emit(1000.0) {
            let expected = particle.lifespan() / PARTICLE_MAX_LIFESPAN
                * 8.0
                * particle.velocity().length();
            assert!((particle.radius() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn emitted_masses_are_finite_and_positive() {
        let mut emitter = test_emitter(100.0, true);
        for particle in emitter.emit(1000.0) {
            assert!(particle.inverse_mass() > 0.0);
            // gen::<f32>() draws in [0, 1); 1/mass must exceed the unit.
            assert!(particle.inverse_mass() > 1.0);
        }
    }

    #[test]
    fn same_seed_emits_identical_batches() {
        let mut a = test_emitter(25.0, true);
        let mut b = test_emitter(25.0, true);

        let batch_a = a.emit(1000.0);
        let batch_b = b.emit(1000.0);

        assert_eq!(batch_a.len(), batch_b.len());
        for (pa, pb) in batch_a.iter().zip(&batch_b) {
            assert_eq!(pa.velocity(), pb.velocity());
            assert!((pa.lifespan() - pb.lifespan()).abs() < f32::EPSILON);
            assert_eq!(pa.base_color(), pb.base_color());
            assert!((pa.inverse_mass() - pb.inverse_mass()).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn non_positive_parameters_fall_back_to_defaults() {
        let emitter = Emitter::seeded(Vec2::ZERO, Vec2::ONE, -5.0, 0.0, false, 1);

        assert!((emitter.density() - EMITTER_DEFAULT_DENSITY).abs() < f32::EPSILON);
        assert!((emitter.particle_max_radius() - EMITTER_DEFAULT_MAX_RADIUS).abs() < f32::EPSILON);
    }

    #[test]
    fn setters_ignore_non_positive_values() {
        let mut emitter = test_emitter(10.0, false);

        emitter.set_density(0.0);
        assert!((emitter.density() - 10.0).abs() < f32::EPSILON);

        emitter.set_particle_max_radius(-2.0);
        assert!((emitter.particle_max_radius() - 8.0).abs() < f32::EPSILON);

        emitter.set_density(30.0);
        assert!((emitter.density() - 30.0).abs() < f32::EPSILON);
    }
}
