//! intersection — headless run of the canonical shared-crossing scene.
//!
//! Pedestrians cross a road and a light-rail corridor on a 1000 × 600 plane;
//! vehicles and trains share one x-band crossing. A renderer would call
//! `run_ticks(1, …)` per frame and read `views()`; this demo instead runs a
//! fixed number of ticks and dumps statistics plus the CSV output files.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use xing_agent::SpawnProfile;
use xing_coord::CrossingEvent;
use xing_core::{Axis, Plane, Population, SimConfig, Tick, Vec2};
use xing_output::{CsvWriter, StatsObserver};
use xing_sim::{
    ArrivalProfile, PopulationSetup, SimObserver, SimulationBuilder, ZoneLayout,
};
use xing_zone::ZoneBand;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TICK_DURATION_MS:      u32 = 16;      // ~60 fps frame loop
const TOTAL_TICKS:           u64 = 30_000;  // 8 simulated minutes
const OUTPUT_INTERVAL_TICKS: u64 = 60;

const PLANE_W: f64 = 1000.0;
const PLANE_H: f64 = 600.0;

// Bands measured from the scene artwork, as fractions of the plane.
const ROAD_BAND_Y:     (f64, f64) = (0.300 * PLANE_H, 0.565 * PLANE_H);
const RAIL_BAND_Y:     (f64, f64) = (0.565 * PLANE_H, 0.740 * PLANE_H);
const CROSSING_BAND_X: (f64, f64) = (0.380 * PLANE_W, 0.870 * PLANE_W);

const CAR_LANE_Y: f64 = 0.3524 * PLANE_H;
const LRT_LANE_Y: f64 = 0.6897 * PLANE_H;

const BASE_SPEED: f64 = 0.8;

// ── Observer wrapper to count events ─────────────────────────────────────────

struct CountingObserver<W: xing_output::OutputWriter> {
    inner:  StatsObserver<W>,
    events: usize,
}

impl<W: xing_output::OutputWriter> SimObserver for CountingObserver<W> {
    fn on_event(&mut self, tick: Tick, event: CrossingEvent) {
        self.events += 1;
        self.inner.on_event(tick, event);
    }

    fn on_snapshot(
        &mut self,
        tick: Tick,
        population: Population,
        agents: &[xing_sim::AgentView],
        stats: xing_agent::CohortStats,
    ) {
        self.inner.on_snapshot(tick, population, agents, stats);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== intersection — rust_xing crossing simulation ===");
    println!(
        "Plane: {PLANE_W} × {PLANE_H}  |  Ticks: {TOTAL_TICKS} ({TICK_DURATION_MS} ms each)  |  Seed: {SEED}"
    );
    println!();

    let config = SimConfig {
        tick_duration_ms:      TICK_DURATION_MS,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };

    let plane = Plane::new(Vec2::ZERO, PLANE_W, PLANE_H)?;
    let zones = ZoneLayout {
        road_band:     ZoneBand::new(Axis::Y, ROAD_BAND_Y.0, ROAD_BAND_Y.1)?,
        rail_band:     ZoneBand::new(Axis::Y, RAIL_BAND_Y.0, RAIL_BAND_Y.1)?,
        crossing_band: ZoneBand::new(Axis::X, CROSSING_BAND_X.0, CROSSING_BAND_X.1)?,
    };

    let mut sim = SimulationBuilder::new(config, plane, zones)
        .population(PopulationSetup {
            profile: SpawnProfile::Pedestrian {
                base_speed:    BASE_SPEED,
                south_north_p: 0.33,
                span_x:        CROSSING_BAND_X,
                variants:      4,
            },
            arrivals: ArrivalProfile::new(2000.0, 600.0),
            capacity: None,
            prune_padding: 50.0,
            detection_margin: 50.0,
            footprint_length: 0.0,
        })
        .population(PopulationSetup {
            profile: SpawnProfile::Vehicle {
                base_speed: BASE_SPEED,
                lane_y:     CAR_LANE_Y,
                padding:    200.0,
                variants:   3,
            },
            arrivals: ArrivalProfile::new(3000.0, 1000.0),
            capacity: Some(3),
            prune_padding: 200.0,
            detection_margin: 80.0,
            footprint_length: 0.0,
        })
        .population(PopulationSetup {
            profile: SpawnProfile::Rail {
                base_speed: BASE_SPEED,
                lane_y:     LRT_LANE_Y,
                padding:    900.0,
            },
            arrivals: ArrivalProfile::new(15000.0, 2000.0),
            capacity: Some(1),
            prune_padding: 900.0,
            detection_margin: 250.0,
            footprint_length: 450.0,
        })
        .build()?;

    std::fs::create_dir_all("output/intersection")?;
    let writer = CsvWriter::new(Path::new("output/intersection"))?;
    let mut obs = CountingObserver { inner: StatsObserver::new(writer), events: 0 };

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Coordination events fired: {}", obs.events);
    println!();

    println!(
        "{:<12} {:>6} {:>10} {:>10} {:>14} {:>14}",
        "Population", "live", "spawned", "pruned", "delay(done)", "delay(live)"
    );
    println!("{}", "-".repeat(72));
    for pop in Population::ALL {
        let s = sim.stats(pop);
        println!(
            "{:<12} {:>6} {:>10} {:>10} {:>14.1} {:>14.1}",
            pop.as_str(),
            s.live,
            s.total_spawned,
            s.total_pruned,
            s.cumulative_delay,
            s.pending_delay
        );
    }

    Ok(())
}
