/// Fixed-step simulation clock. `elapsed` is the timestamp of the tick
/// currently being simulated.
#[derive(Debug, Clone)]
pub struct SimClock {
    pub dt: f32,
    pub elapsed: f32,
    pub tick: u64,
}

impl SimClock {
    pub fn new(tick_rate: f32) -> Self {
        Self {
            dt: 1.0 / tick_rate,
            elapsed: 0.0,
            tick: 0,
        }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        // Recomputed from `tick`, never accumulated.
        self.elapsed = self.tick as f32 * self.dt;
    }
}
