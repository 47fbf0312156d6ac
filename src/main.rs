use glam::Vec2;
use libplume::{
    bounds::SimulationArea, emitter::Emitter, simulator::Simulator, stats::SimStats, time::Time,
};
use log::{debug, info};

const DEMO_MAX_PARTICLES: usize = 2000;
const DEMO_WIDTH: f32 = 1280.0;
const DEMO_HEIGHT: f32 = 720.0;
const DEMO_RUN_SECONDS: f32 = 30.0;
const FPS: u64 = 60;

/// Headless demo driver: two emitters under default gravity and drag, ticked
/// at roughly 60Hz wall clock. A renderer would consume the particle
/// snapshot after each tick; here we only log pool occupancy.
fn main() {
    env_logger::init();

    let mut simulator = Simulator::new(
        DEMO_MAX_PARTICLES,
        SimulationArea::new(0.0, DEMO_WIDTH, 0.0, DEMO_HEIGHT),
    );

    // A steady spray near the bottom left and a jittered fountain just off
    // the center, both launching upward against gravity. The first one keeps
    // a fixed launch velocity, the second randomizes it per particle.
    simulator.add_emitter(Emitter::new(
        Vec2::new(200.0, DEMO_HEIGHT - 200.0),
        Vec2::new(0.1, -0.15),
        16.0,
        90.0,
        false,
    ));
    simulator.add_emitter(Emitter::new(
        Vec2::new(DEMO_WIDTH / 2.0 + 50.0, DEMO_HEIGHT / 2.0 - 10.0),
        Vec2::new(-0.2, -0.2),
        15.0,
        30.0,
        true,
    ));

    let mut time = Time::new();
    let mut stats = SimStats::new();

    info!("Starting a {}s headless run", DEMO_RUN_SECONDS);
    while time.total_seconds() < DEMO_RUN_SECONDS {
        std::thread::sleep(std::time::Duration::from_millis(1000 / FPS));
        time.update();

        stats.tick_start();
        simulator.tick(time.delta_millis());
        stats.tick_end(simulator.particles().len());

        debug!("{} live particles", simulator.particles().len());
    }

    info!(
        "Run finished with {} live particles (limit {})",
        simulator.particles().len(),
        simulator.max_particles()
    );
}
