//! Plain data row types written by output backends.

/// One population's counters at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStatsRow {
    pub tick:             u64,
    /// Population label (`pedestrian`, `vehicle`, `rail`).
    pub population:       &'static str,
    pub live:             u64,
    pub total_spawned:    u64,
    pub total_pruned:     u64,
    /// Delay folded in from pruned agents, in ticks.
    pub cumulative_delay: f64,
    /// Delay carried by agents still in flight, in ticks.
    pub pending_delay:    f64,
}

/// One coordination event, as it fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:  u64,
    /// Event label, e.g. `ped:enterRoad`.
    pub event: &'static str,
}
