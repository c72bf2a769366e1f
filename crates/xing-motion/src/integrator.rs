//! The movement integrator: one explicit Euler step per tick, plus the
//! braking and release rules driven by the population's `held` flag.
//!
//! # Braking model
//!
//! A held agent approaching its stop line gets its travel-axis velocity set
//! to `rest × clamp((line − pos)/stopping_distance, 0, 1)` (sign-adjusted):
//! a linear ramp over a fixed window that reaches exactly zero at the line.
//! Recomputing from the *rest* velocity each tick — rather than compounding
//! the current one — keeps `|velocity| ≤ |rest_velocity|` an invariant and
//! makes the per-tick value independent of braking history.
//!
//! An agent already past the line is left alone: agents in the crossing
//! clear it rather than stopping mid-crossing.
//!
//! # Queueing
//!
//! When `queue_spacing > 0` (vehicles), the effective stop line recedes by
//! one spacing per approaching agent ahead, producing a spaced queue.  On
//! release, queued agents accelerate back to rest speed at a rate that falls
//! off with queue depth, so the queue discharges front-first.

use xing_agent::Agent;
use xing_core::Axis;

use crate::{MotionError, MotionResult, StopLines};

/// How a population recovers its rest velocity when released.
#[derive(Copy, Clone, Debug)]
pub enum ReleaseStyle {
    /// One-tick snap back to `rest_velocity` (pedestrians).
    Immediate,
    /// Queue discharge: the i-th agent from the front gains at most
    /// `accel / (i·5 + 1)` speed per tick (vehicles).
    Staggered {
        /// Front-of-queue acceleration, plane units per tick².
        /// Canonical: `base_speed / 20`.
        accel: f64,
    },
}

/// Movement integrator for one population.
#[derive(Clone, Debug)]
pub struct Integrator {
    /// The axis this population travels (and brakes) along.
    pub axis: Axis,
    stopping_distance: f64,
    queue_spacing: f64,
    release: ReleaseStyle,
}

impl Integrator {
    /// Construct an integrator, rejecting degenerate parameters.
    pub fn new(
        axis:              Axis,
        stopping_distance: f64,
        queue_spacing:     f64,
        release:           ReleaseStyle,
    ) -> MotionResult<Self> {
        if stopping_distance <= 0.0 {
            return Err(MotionError::NonPositiveStoppingDistance(stopping_distance));
        }
        if queue_spacing < 0.0 {
            return Err(MotionError::NegativeQueueSpacing(queue_spacing));
        }
        Ok(Self { axis, stopping_distance, queue_spacing, release })
    }

    /// Advance every agent by one tick.
    ///
    /// Positions integrate unconditionally; velocities then relax toward
    /// rest (released) or brake toward `stops` (held).  Held agents accrue
    /// their speed deficit into `cumulative_delay`.  Zero agents is a no-op.
    pub fn tick(&self, agents: &mut [Agent], held: bool, stops: &StopLines) {
        for agent in agents.iter_mut() {
            agent.position += agent.velocity;
        }

        if held {
            self.brake(agents, stops);
            for agent in agents.iter_mut() {
                agent.cumulative_delay += agent.speed_deficit(self.axis);
            }
        } else {
            self.release(agents);
        }
    }

    // ── Release ───────────────────────────────────────────────────────────

    fn release(&self, agents: &mut [Agent]) {
        match self.release {
            ReleaseStyle::Immediate => {
                for agent in agents.iter_mut() {
                    agent.velocity = agent.rest_velocity;
                }
            }
            ReleaseStyle::Staggered { accel } => {
                // Recover per direction group, front of queue first.
                for sign in [1.0, -1.0] {
                    let mut group: Vec<usize> = (0..agents.len())
                        .filter(|&i| agents[i].travel_sign(self.axis) == sign)
                        .collect();
                    group.sort_by(|&a, &b| {
                        let ka = sign * self.axis.component(agents[a].position);
                        let kb = sign * self.axis.component(agents[b].position);
                        kb.total_cmp(&ka)
                    });
                    for (queue_pos, &i) in group.iter().enumerate() {
                        let agent = &mut agents[i];
                        let rest = self.axis.component(agent.rest_velocity).abs();
                        let cur = self.axis.component(agent.velocity).abs();
                        let gained = cur + accel / (queue_pos as f64 * 5.0 + 1.0);
                        *self.axis.component_mut(&mut agent.velocity) =
                            sign * gained.min(rest);
                    }
                }
            }
        }
    }

    // ── Braking ───────────────────────────────────────────────────────────

    fn brake(&self, agents: &mut [Agent], stops: &StopLines) {
        if stops.is_empty() {
            return;
        }
        for sign in [1.0, -1.0] {
            let Some(boundary) = stops.boundary_for(sign) else { continue };

            // Agents approaching the line, nearest first, get queue slots.
            let mut approaching: Vec<usize> = (0..agents.len())
                .filter(|&i| {
                    agents[i].travel_sign(self.axis) == sign
                        && sign * (self.axis.component(agents[i].position) - boundary) <= 0.0
                })
                .collect();
            approaching.sort_by(|&a, &b| {
                let da = sign * (boundary - self.axis.component(agents[a].position));
                let db = sign * (boundary - self.axis.component(agents[b].position));
                da.total_cmp(&db)
            });

            for (queue_pos, &i) in approaching.iter().enumerate() {
                let agent = &mut agents[i];
                let line = boundary - sign * self.queue_spacing * queue_pos as f64;
                let pos = self.axis.component(agent.position);
                let ratio = (sign * (line - pos) / self.stopping_distance).clamp(0.0, 1.0);
                let rest = self.axis.component(agent.rest_velocity);
                *self.axis.component_mut(&mut agent.velocity) = rest * ratio;
            }
            // Agents past the boundary are intentionally untouched: they are
            // already in the crossing and must clear it.
        }
    }
}
