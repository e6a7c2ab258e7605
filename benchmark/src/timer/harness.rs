use std::{
    hint,
    time::{Duration, Instant},
};

pub type RunResult = Result<Duration, String>;

pub struct Harness {
    warmup: u32,
}

impl Harness {
    pub fn new(warmup: u32) -> Self {
        Self { warmup }
    }

    /// Runs `run` on fresh data `warmup` times, then once more under the
    /// clock. `prepare` is never timed.
    pub fn time<D, R>(
        &mut self,
        prepare: impl Fn() -> D,
        run: impl Fn(D) -> R) -> (Duration, R)
    {
        for _ in 0..self.warmup {
            let data = prepare();
            hint::black_box(run(data));
        }

        let data = prepare();

        let start = Instant::now();
        let result = hint::black_box(run(data));
        let elapsed = start.elapsed();

        (elapsed, result)
    }
}
