use instant::Instant;

/// Monotonic animation clock started when the scene mounts.
///
/// Advances with wall time, never resets, and is destroyed with the scene.
pub struct SceneClock {
    start: Instant,
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
