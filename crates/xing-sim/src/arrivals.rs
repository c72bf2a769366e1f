//! Per-population arrival timers.
//!
//! Each population runs an independent renewal process: after every firing,
//! the next interarrival delay is drawn fresh from that population's
//! truncated-normal profile and converted to ticks.  The scheduler is polled
//! once per tick from the main loop, so no timer threads or wakeups exist —
//! determinism comes for free from the tick order.

use xing_core::{PopulationRng, SimClock, Tick};

use crate::ArrivalProfile;

/// One population's polled arrival timer.
#[derive(Debug)]
pub struct ArrivalScheduler {
    profile: ArrivalProfile,
    next_fire: Tick,
}

impl ArrivalScheduler {
    /// Create a scheduler with its first delay already drawn, so the first
    /// arrival is as random as every later one.
    pub fn new(profile: ArrivalProfile, rng: &mut PopulationRng, clock: &SimClock) -> Self {
        let mut scheduler = Self { profile, next_fire: Tick::ZERO };
        scheduler.rearm(Tick::ZERO, rng, clock);
        scheduler
    }

    /// Poll the timer at `now`.  Returns `true` when an arrival is due and
    /// rearms for the next one.
    ///
    /// The caller applies its admission predicate *after* a `true` poll; a
    /// refused admission still consumes the firing (the slot is lost, not
    /// deferred), matching a saturated real-world approach.
    pub fn poll(&mut self, now: Tick, rng: &mut PopulationRng, clock: &SimClock) -> bool {
        if now < self.next_fire {
            return false;
        }
        self.rearm(now, rng, clock);
        true
    }

    /// Replace the interarrival profile without disturbing the pending
    /// firing — the new distribution takes effect from the next draw.
    pub fn retune(&mut self, profile: ArrivalProfile) {
        self.profile = profile;
    }

    /// The tick the next arrival fires at (for tests and introspection).
    #[inline]
    pub fn next_fire(&self) -> Tick {
        self.next_fire
    }

    fn rearm(&mut self, from: Tick, rng: &mut PopulationRng, clock: &SimClock) {
        let delay_ms = rng.truncated_normal(
            self.profile.mean_ms,
            self.profile.std_ms,
            self.profile.min_fraction,
        );
        self.next_fire = from + clock.ticks_for_ms(delay_ms);
    }
}
