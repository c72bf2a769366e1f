//! Unit tests for integration, braking, and separation.

use xing_agent::Agent;
use xing_core::{AgentId, Axis, Population, Vec2};

use crate::{apply_separation, Integrator, ReleaseStyle, StopLines};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn vehicle(x: f64, vx: f64) -> Agent {
    Agent {
        id:               AgentId(0),
        population:       Population::Vehicle,
        position:         Vec2::new(x, 352.0),
        velocity:         Vec2::new(vx, 0.0),
        rest_velocity:    Vec2::new(2.0, 0.0),
        radius:           0.0,
        visual_variant:   0,
        cumulative_delay: 0.0,
    }
}

fn pedestrian(x: f64, y: f64, vy: f64, radius: f64) -> Agent {
    Agent {
        id:               AgentId(0),
        population:       Population::Pedestrian,
        position:         Vec2::new(x, y),
        velocity:         Vec2::new(0.0, vy),
        rest_velocity:    Vec2::new(0.0, vy),
        radius,
        visual_variant:   0,
        cumulative_delay: 0.0,
    }
}

fn vehicle_integrator() -> Integrator {
    Integrator::new(Axis::X, 20.0, 120.0, ReleaseStyle::Staggered { accel: 0.04 }).unwrap()
}

fn ped_integrator() -> Integrator {
    Integrator::new(Axis::Y, 20.0, 0.0, ReleaseStyle::Immediate).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_non_positive_stopping_distance() {
        assert!(Integrator::new(Axis::X, 0.0, 0.0, ReleaseStyle::Immediate).is_err());
        assert!(Integrator::new(Axis::X, -1.0, 0.0, ReleaseStyle::Immediate).is_err());
    }

    #[test]
    fn rejects_negative_queue_spacing() {
        assert!(Integrator::new(Axis::X, 20.0, -5.0, ReleaseStyle::Immediate).is_err());
    }
}

// ── Pure integration ──────────────────────────────────────────────────────────

#[cfg(test)]
mod integration {
    use super::*;

    #[test]
    fn unheld_vehicle_integrates_exactly() {
        // Plane w=1000, single vehicle at x=-200 with rest vx=+2, never held:
        // after k ticks x = -200 + 2k, bit for bit.
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(-200.0, 2.0)];
        for k in 1..=600u32 {
            integ.tick(&mut agents, false, &stops);
            assert_eq!(agents[0].position.x, -200.0 + 2.0 * k as f64);
        }
        assert_eq!(agents[0].cumulative_delay, 0.0);
    }

    #[test]
    fn zero_agents_is_a_noop() {
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0]);
        let mut agents: Vec<Agent> = Vec::new();
        integ.tick(&mut agents, true, &stops);
        integ.tick(&mut agents, false, &stops);
    }
}

// ── Braking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod braking {
    use super::*;

    #[test]
    fn brake_ratio_full_at_stopping_distance() {
        // At the stopping-distance edge (x=360, line 380, window 20) the
        // scale factor is exactly 1.
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(360.0, 0.0)]; // parked at 360
        integ.tick(&mut agents, true, &stops);
        assert_eq!(agents[0].velocity.x, 2.0);
    }

    #[test]
    fn brake_ratio_quarter_inside_window() {
        // x=375 → scale factor (380−375)/20 = 0.25.
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(375.0, 0.0)];
        integ.tick(&mut agents, true, &stops);
        assert_eq!(agents[0].velocity.x, 0.5);
    }

    #[test]
    fn agent_at_line_stays_at_zero_until_released() {
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(380.0, 0.0)];
        for _ in 0..10 {
            integ.tick(&mut agents, true, &stops);
            assert_eq!(agents[0].velocity.x, 0.0);
            assert_eq!(agents[0].position.x, 380.0);
        }
        integ.tick(&mut agents, false, &stops);
        assert!(agents[0].velocity.x > 0.0, "released agent should move again");
    }

    #[test]
    fn velocity_never_exceeds_rest_velocity() {
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(300.0, 2.0), vehicle(250.0, 2.0)];
        for tick in 0..200 {
            let held = (20..120).contains(&tick);
            integ.tick(&mut agents, held, &stops);
            for a in &agents {
                assert!(
                    a.velocity.x.abs() <= a.rest_velocity.x.abs() + 1e-12,
                    "tick {tick}: |v| {} > |v0| {}",
                    a.velocity.x.abs(),
                    a.rest_velocity.x.abs()
                );
            }
        }
    }

    #[test]
    fn passed_agent_is_never_rebraked() {
        // An agent already past the line keeps clearing the crossing at
        // full speed for as long as the hold lasts.
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(400.0, 2.0)];
        for _ in 0..50 {
            integ.tick(&mut agents, true, &stops);
            assert_eq!(agents[0].velocity.x, 2.0);
        }
        assert_eq!(agents[0].position.x, 500.0);
        assert_eq!(agents[0].cumulative_delay, 0.0);
    }

    #[test]
    fn queue_recedes_per_vehicle() {
        // Three vehicles converge on the same line; the follower queue
        // slots sit 120 apart, so steady-state positions are spaced.
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![
            vehicle(370.0, 2.0),
            vehicle(100.0, 2.0),
            vehicle(0.0, 2.0),
        ];
        for _ in 0..600 {
            integ.tick(&mut agents, true, &stops);
        }
        let xs: Vec<f64> = agents.iter().map(|a| a.position.x).collect();
        assert!((xs[0] - 380.0).abs() < 1.0, "front stops at the line, got {}", xs[0]);
        assert!((xs[1] - 260.0).abs() < 1.0, "second stops one spacing back, got {}", xs[1]);
        assert!((xs[2] - 140.0).abs() < 1.0, "third stops two spacings back, got {}", xs[2]);
    }

    #[test]
    fn held_without_stop_lines_keeps_velocity() {
        let integ = vehicle_integrator();
        let stops = StopLines::none(Axis::X);
        let mut agents = vec![vehicle(0.0, 2.0)];
        integ.tick(&mut agents, true, &stops);
        assert_eq!(agents[0].velocity.x, 2.0);
        assert_eq!(agents[0].position.x, 2.0);
    }

    #[test]
    fn opposite_directions_brake_at_opposite_edges() {
        // Pedestrian band y ∈ [180, 339]: southbound (vy>0) brakes at 180,
        // northbound (vy<0) at 339.
        let integ = ped_integrator();
        let stops = StopLines::new(Axis::Y, vec![180.0, 339.0]);
        let mut agents = vec![
            pedestrian(500.0, 170.0, 1.0, 8.0),  // southbound, 10 before 180
            pedestrian(600.0, 349.0, -1.0, 8.0), // northbound, 10 before 339
        ];
        // Position integrates before braking, so the ratio reflects the
        // post-step coordinates 171 and 348.
        integ.tick(&mut agents, true, &stops);
        assert!((agents[0].velocity.y - 0.45).abs() < 1e-12);
        assert!((agents[1].velocity.y + 0.45).abs() < 1e-12);
    }

    #[test]
    fn held_braking_accrues_delay() {
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![vehicle(380.0, 0.0)];
        for _ in 0..10 {
            integ.tick(&mut agents, true, &stops);
        }
        // Fully stopped: one tick of delay per tick.
        assert!((agents[0].cumulative_delay - 10.0).abs() < 1e-12);
    }
}

// ── Release ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod release {
    use super::*;

    #[test]
    fn immediate_release_snaps_to_rest() {
        let integ = ped_integrator();
        let stops = StopLines::new(Axis::Y, vec![180.0, 339.0]);
        let mut agents = vec![pedestrian(500.0, 178.0, 1.0, 8.0)];
        integ.tick(&mut agents, true, &stops);
        assert!(agents[0].velocity.y < 1.0);
        integ.tick(&mut agents, false, &stops);
        assert_eq!(agents[0].velocity.y, 1.0);
    }

    #[test]
    fn staggered_release_discharges_front_first() {
        let integ = vehicle_integrator();
        let stops = StopLines::new(Axis::X, vec![380.0, 870.0]);
        let mut agents = vec![
            vehicle(380.0, 0.0),
            vehicle(260.0, 0.0),
            vehicle(140.0, 0.0),
        ];
        integ.tick(&mut agents, false, &stops);
        let v: Vec<f64> = agents.iter().map(|a| a.velocity.x).collect();
        // Front gains accel/1, second accel/6, third accel/11.
        assert!((v[0] - 0.04).abs() < 1e-12);
        assert!((v[1] - 0.04 / 6.0).abs() < 1e-12);
        assert!((v[2] - 0.04 / 11.0).abs() < 1e-12);
        assert!(v[0] > v[1] && v[1] > v[2]);
    }

    #[test]
    fn staggered_release_caps_at_rest_speed() {
        let integ = vehicle_integrator();
        let stops = StopLines::none(Axis::X);
        let mut agents = vec![vehicle(0.0, 0.0)];
        for _ in 0..200 {
            integ.tick(&mut agents, false, &stops);
        }
        assert_eq!(agents[0].velocity.x, 2.0);
    }
}

// ── Separation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod separation {
    use super::*;

    #[test]
    fn overlapping_agents_are_pushed_apart() {
        let mut agents = vec![
            pedestrian(500.0, 200.0, 1.0, 10.0),
            pedestrian(500.0, 205.0, -1.0, 10.0),
        ];
        let before = agents[1].position.y - agents[0].position.y;
        apply_separation(&mut agents, 0.4);
        let after = agents[1].position.y - agents[0].position.y;
        assert!(after > before, "gap should widen: {before} → {after}");
        // One pass is a partial correction, not a teleport.
        assert!(after < 20.0);
    }

    #[test]
    fn separated_agents_are_untouched() {
        let mut agents = vec![
            pedestrian(500.0, 200.0, 1.0, 8.0),
            pedestrian(500.0, 300.0, 1.0, 8.0),
        ];
        let snapshot: Vec<Vec2> = agents.iter().map(|a| a.position).collect();
        apply_separation(&mut agents, 0.4);
        assert_eq!(agents[0].position, snapshot[0]);
        assert_eq!(agents[1].position, snapshot[1]);
    }

    #[test]
    fn separation_never_touches_velocity() {
        let mut agents = vec![
            pedestrian(500.0, 200.0, 1.0, 10.0),
            pedestrian(501.0, 203.0, -1.0, 10.0),
            pedestrian(502.0, 206.0, 1.0, 10.0),
        ];
        let velocities: Vec<Vec2> = agents.iter().map(|a| a.velocity).collect();
        apply_separation(&mut agents, 0.4);
        for (a, v) in agents.iter().zip(velocities) {
            assert_eq!(a.velocity, v);
        }
    }

    #[test]
    fn coincident_centers_separate_vertically() {
        let mut agents = vec![
            pedestrian(500.0, 200.0, 1.0, 10.0),
            pedestrian(500.0, 200.0, -1.0, 10.0),
        ];
        apply_separation(&mut agents, 0.4);
        assert!(agents[0].position.y < agents[1].position.y);
    }
}
