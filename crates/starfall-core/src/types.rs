//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position/vector in playfield space (pixels).
/// x grows rightward, y grows downward; (0, 0) is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vec2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle from this point toward another (radians, atan2 convention).
    pub fn angle_to(&self, other: &Vec2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Simulation time tracking.
///
/// Advanced by the driver-supplied elapsed milliseconds, so all
/// time-gated behavior is robust to a variable step rate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current step number (increments by 1 each step).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one step of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}

/// Test whether two center-anchored axis-aligned boxes overlap.
pub fn aabb_overlap(a: Vec2, aw: f64, ah: f64, b: Vec2, bw: f64, bh: f64) -> bool {
    (a.x - b.x).abs() * 2.0 < aw + bw && (a.y - b.y).abs() * 2.0 < ah + bh
}
