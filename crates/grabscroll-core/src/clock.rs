use web_time::Instant;

/// Monotonic millisecond clock anchored at construction.
///
/// Backed by `web_time`, so it reads `performance.now()` on wasm and
/// `std::time::Instant` elsewhere.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}
