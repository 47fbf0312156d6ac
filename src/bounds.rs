use glam::Vec2;

/// The axis-aligned rectangle a simulation runs in.
///
/// Particles whose position leaves the area are culled by the simulator
/// regardless of their remaining lifespan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl SimulationArea {
    #[must_use]
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Returns true iff `point` lies inside the area, bounds included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::SimulationArea;

    #[test]
    fn containment_is_inclusive() {
        let area = SimulationArea::new(0.0, 100.0, 0.0, 50.0);

        assert!(area.contains(Vec2::new(50.0, 25.0)));
        assert!(area.contains(Vec2::new(0.0, 0.0)));
        assert!(area.contains(Vec2::new(100.0, 50.0)));

        assert!(!area.contains(Vec2::new(-0.1, 25.0)));
        assert!(!area.contains(Vec2::new(100.1, 25.0)));
        assert!(!area.contains(Vec2::new(50.0, 50.1)));
        assert!(!area.contains(Vec2::new(50.0, -0.1)));
    }
}
