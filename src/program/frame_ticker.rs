use std::time::{Duration, Instant};

use color_eyre::eyre;

/// Fixed-rate ticker that decides when the next frame should be drawn
///
/// If the loop falls behind by more than one interval, the missed ticks are dropped instead of being delivered in a burst
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameTicker {
    interval: Duration,
    next_tick: Instant,
}

impl FrameTicker {
    /// Creates a ticker that fires `rate_hz` times per second, the first tick one interval after `start`
    pub fn new(rate_hz: u32, start: Instant) -> eyre::Result<Self> {
        if rate_hz == 0 {
            eyre::bail!("frame rate must be at least 1 frame per second");
        }
        let interval = Duration::from_secs(1) / rate_hz;
        Ok(Self {
            interval,
            next_tick: start + interval,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due. Pass to [ControlFlow::WaitUntil](glium::glutin::event_loop::ControlFlow::WaitUntil)
    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    /// Returns `true` if a tick is due at `now`, and moves on to the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        true
    }
}
