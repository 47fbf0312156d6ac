use cfg_if::cfg_if;
#[cfg(feature = "stats")]
use log::error;

/// Per-tick simulation statistics, compiled to no-ops unless the `stats`
/// feature is enabled.
///
/// Wrap every simulator tick in [`SimStats::tick_start`]/[`SimStats::tick_end`]
/// and a summary is logged every five seconds.
#[allow(dead_code)]
pub struct SimStats {
    tick_start: instant::Instant,
    ticks: u32,
    total_tick_time: f32,
    total_live: usize,
    peak_live: usize,
    last_log: instant::Instant,
}

impl SimStats {
    #[must_use]
    pub fn new() -> Self {
        let now = instant::Instant::now();
        Self {
            tick_start: now,
            ticks: 0,
            total_tick_time: 0.0,
            total_live: 0,
            peak_live: 0,
            last_log: now,
        }
    }

    #[inline(always)]
    pub fn tick_start(&mut self) {
        cfg_if! {
            if #[cfg(feature = "stats")] {
                self.tick_start = instant::Instant::now();
            }
        }
    }

    #[inline(always)]
    #[allow(clippy::cast_precision_loss)]
    pub fn tick_end(&mut self, live_particles: usize) {
        cfg_if! {
            if #[cfg(feature = "stats")] {
                let now = instant::Instant::now();
                self.ticks += 1;
                self.total_tick_time += now.duration_since(self.tick_start).as_secs_f32();
                self.total_live += live_particles;
                self.peak_live = self.peak_live.max(live_particles);

                if now.duration_since(self.last_log).as_secs_f32() >= 5.0 {
                    error!("-------------");
                    error!("Avg tick: {:.3}ms", self.total_tick_time / self.ticks as f32 * 1000.0);
                    error!("Avg live: {:.1}", self.total_live as f32 / self.ticks as f32);
                    error!("Peak live: {}", self.peak_live);
                    error!("-------------");
                    self.ticks = 0;
                    self.total_tick_time = 0.0;
                    self.total_live = 0;
                    self.peak_live = 0;
                    self.last_log = now;
                }
            } else {
                let _ = live_particles;
            }
        }
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
