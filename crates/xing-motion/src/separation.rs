//! Pairwise short-range repulsion between pedestrians.
//!
//! Purely cosmetic anti-overlap, not a physical collision response.  The
//! correction is applied to *positions* only — velocities are untouched, so
//! the force can never invert an agent's direction of travel and composes
//! independently with stop-line braking.

use xing_agent::Agent;

/// Apply one relaxation pass of the separation force.
///
/// `agents` must be sorted by y (the cohort maintains this), which lets the
/// inner scan stop as soon as the vertical gap alone exceeds the largest
/// possible radius sum.  Two agents closer than the sum of their radii are
/// pushed apart by `overlap × strength`, split evenly.
pub fn apply_separation(agents: &mut [Agent], strength: f64) {
    if agents.len() < 2 {
        return;
    }
    let max_radius = agents
        .iter()
        .map(|a| a.radius)
        .fold(0.0_f64, f64::max);

    for i in 0..agents.len() - 1 {
        for j in (i + 1)..agents.len() {
            let dy = agents[j].position.y - agents[i].position.y;
            if dy > agents[i].radius + max_radius {
                break; // sorted by y: everything further is further away
            }
            let min_dist = agents[i].radius + agents[j].radius;
            let delta = agents[j].position - agents[i].position;
            let dist = delta.length();
            if dist >= min_dist {
                continue;
            }

            let overlap = min_dist - dist;
            let push = overlap * strength * 0.5;
            let (ux, uy) = if dist > 0.0 {
                (delta.x / dist, delta.y / dist)
            } else {
                (0.0, 1.0) // coincident centers: separate vertically
            };
            agents[i].position.x -= ux * push;
            agents[i].position.y -= uy * push;
            agents[j].position.x += ux * push;
            agents[j].position.y += uy * push;
        }
    }
}
