use crate::{bounds::SimulationArea, emitter::Emitter, force::Force, particle::Particle};

/// Default ceiling on concurrently live particles.
pub const DEFAULT_MAX_PARTICLES: usize = 500;

/// Container for the simulated emitters and particles.
///
/// The simulator exclusively owns both collections: particles enter through
/// registered emitters (or the [`Simulator::add_particle`] debug path), get
/// forces applied and integrated once per [`Simulator::tick`], and leave the
/// pool the moment their lifespan runs out or they exit the simulation area.
/// The pool never grows past `max_particles`.
///
/// Construct one per simulation and keep it on the caller's side; there is no
/// global instance.
pub struct Simulator {
    emitters: Vec<Emitter>,
    particles: Vec<Particle>,
    max_particles: usize,
    boundaries: SimulationArea,
    gravity: Option<Force>,
    drag: Option<Force>,
}

impl Simulator {
    /// Creates an empty simulator over the given area. A zero particle limit
    /// falls back to [`DEFAULT_MAX_PARTICLES`]. Gravity and drag start at
    /// their defaults; clear them with [`Simulator::set_gravity`] and
    /// [`Simulator::set_drag`].
    #[must_use]
    pub fn new(max_particles: usize, boundaries: SimulationArea) -> Self {
        Self {
            emitters: Vec::new(),
            particles: Vec::new(),
            max_particles: if max_particles > 0 {
                max_particles
            } else {
                DEFAULT_MAX_PARTICLES
            },
            boundaries,
            gravity: Some(Force::DEFAULT_GRAVITY),
            drag: Some(Force::DEFAULT_DRAG),
        }
    }

    /// Raises or lowers the particle ceiling. Zero is ignored. Lowering the
    /// limit does not evict live particles; the pool shrinks through normal
    /// culling and stricter admission.
    pub fn set_max_particles_limit(&mut self, max_particles: usize) {
        if max_particles > 0 {
            self.max_particles = max_particles;
        }
    }

    #[must_use]
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Replaces the gravity force; `None` disables it from the next tick on.
    pub fn set_gravity(&mut self, gravity: Option<Force>) {
        self.gravity = gravity;
    }

    /// Replaces the drag force; `None` disables it from the next tick on.
    pub fn set_drag(&mut self, drag: Option<Force>) {
        self.drag = drag;
    }

    /// Registers an emitter. Registration order matters: earlier emitters get
    /// first claim on pool room during admission.
    pub fn add_emitter(&mut self, emitter: Emitter) {
        self.emitters.push(emitter);
    }

    /// Debug path for injecting a particle directly; emitters are the normal
    /// way in. Silently dropped when the pool is already at its ceiling.
    pub fn add_particle(&mut self, particle: Particle) {
        if self.particles.len() < self.max_particles {
            self.particles.push(particle);
        }
    }

    /// The live-particle snapshot for an external renderer: position, radius
    /// and [`Particle::aged_color`] of everything that survived the last
    /// tick. Only valid between a completed [`Simulator::tick`] and the next
    /// one; no liveness re-check is performed on read.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Runs one full simulation step for an `elapsed_ms` time slice:
    /// force application, integration, culling, then emission and admission.
    /// Runs to completion; nothing here suspends or re-enters.
    pub fn tick(&mut self, elapsed_ms: f32) {
        // Force phase and integrate-and-cull phase, fused per particle:
        // gravity then drag into the accumulator, one Euler step, then keep
        // the particle only if it is both alive and still in bounds. Dead and
        // out-of-bounds particles are dropped the same way.
        let gravity = self.gravity;
        let drag = self.drag;
        let boundaries = self.boundaries;
        self.particles.retain_mut(|particle| {
            if let Some(gravity) = gravity {
                gravity.apply(particle, elapsed_ms);
            }
            if let Some(drag) = drag {
                drag.apply(particle, elapsed_ms);
            }

            particle.integrate(elapsed_ms) && boundaries.contains(particle.position())
        });

        // Emission phase, in registration order. When a batch does not fit,
        // its head fills the remaining room and every later emitter is
        // skipped for this tick. Not a fair policy: under sustained overflow
        // the room would need to be split across emitters, proportionally to
        // their densities, instead of first come first served.
        for emitter in &mut self.emitters {
            let mut batch = emitter.emit(elapsed_ms);
            // The pool can sit above a freshly lowered limit; saturate so the
            // tick just admits nothing until culling catches up.
            let room = self.max_particles.saturating_sub(self.particles.len());
            if batch.len() > room {
                batch.truncate(room);
                self.particles.append(&mut batch);
                break;
            }
            self.particles.append(&mut batch);
        }
    }
}
